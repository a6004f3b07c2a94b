//! qwertype GUI - egui-based desktop application.
//!
//! - input.rs: text event interception and caret sync
//! - ui.rs: egui rendering

pub mod input;
pub mod ui;

use eframe::egui;
use qwertype_core::{TextBuffer, Translator};

use self::input::{feed_resolved_text, load_caret, store_caret, take_text_events};
use self::ui::{draw_status_bar, draw_text_area};

/// Main GUI application wrapper implementing eframe::App trait.
///
/// egui only reports resolved text, so the translator runs on the resolved
/// stream and needs no caps-lock state from the host.
pub struct QwertypeGuiApp {
    translator: Translator<TextBuffer>,
    text_id: egui::Id,
    focus_requested: bool,
    translated: usize,
}

impl QwertypeGuiApp {
    pub fn new() -> Self {
        Self {
            translator: Translator::for_resolved_host(TextBuffer::new()),
            text_id: egui::Id::new("qwertype_text_area"),
            focus_requested: false,
            translated: 0,
        }
    }

    /// Translate this frame's text events before the text area sees them.
    fn intercept_text(&mut self, ctx: &egui::Context) {
        if !ctx.memory(|m| m.has_focus(self.text_id)) {
            return;
        }
        let texts = take_text_events(ctx);
        if texts.is_empty() {
            return;
        }

        // The caret may have moved since the last frame (click, arrows).
        if let Some(caret) = load_caret(ctx, self.text_id) {
            self.translator.sink_mut().set_caret(caret);
        }
        let mut count = 0;
        for text in &texts {
            count += feed_resolved_text(&mut self.translator, text);
        }
        if count > 0 {
            self.translated += count;
            store_caret(ctx, self.text_id, self.translator.sink().caret());
        }
    }
}

impl Default for QwertypeGuiApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for QwertypeGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle Ctrl+W to close
        let ctrl_w = ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::W));
        if ctrl_w {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        self.intercept_text(ctx);

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            draw_status_bar(ui, self.translator.sink(), self.translated);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let buffer = self.translator.sink_mut();
            let resp = draw_text_area(ui, buffer, self.text_id);
            if let Some(caret) = load_caret(ctx, self.text_id) {
                buffer.set_caret(caret);
            }
            if !self.focus_requested {
                resp.request_focus();
                self.focus_requested = true;
            }
        });
    }
}
