//! UI rendering and layout using egui.

use eframe::egui;
use qwertype_core::TextBuffer;

/// The single multi-line text area the translator writes into.
pub fn draw_text_area(ui: &mut egui::Ui, buffer: &mut TextBuffer, id: egui::Id) -> egui::Response {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_sized(
                ui.available_size(),
                egui::TextEdit::multiline(buffer.text_mut())
                    .id(id)
                    .desired_width(f32::INFINITY)
                    .font(egui::TextStyle::Monospace),
            )
        })
        .inner
}

pub fn draw_status_bar(ui: &mut egui::Ui, buffer: &TextBuffer, translated: usize) {
    let (line, col) = buffer.caret_line_col();
    let status = format!(
        "AZERTY → QWERTY  |  Ln {}, Col {}  |  {} translated  |  Ctrl+W Close",
        line + 1,
        col + 1,
        translated
    );
    ui.label(
        egui::RichText::new(status)
            .monospace()
            .size(11.0)
            .color(egui::Color32::from_rgb(150, 150, 150)),
    );
}
