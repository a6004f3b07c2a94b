//! Keyboard input interception and caret synchronisation.

use eframe::egui;
use egui::text::{CCursor, CCursorRange};
use egui::text_edit::TextEditState;
use qwertype_core::{KeyListener, Outcome, TextBuffer, Translator, resolved_events};

/// Remove all text events from this frame's input and return them.
///
/// These are the key-typed notifications: the text area must never insert
/// the untranslated characters. Key events (Enter, Backspace, arrows) stay.
pub fn take_text_events(ctx: &egui::Context) -> Vec<String> {
    ctx.input_mut(|i| {
        let mut texts = Vec::new();
        i.events.retain(|event| match event {
            egui::Event::Text(text) => {
                texts.push(text.clone());
                false
            }
            _ => true,
        });
        texts
    })
}

/// Run every character of `text` through the resolved stream. Returns the
/// number of characters inserted.
pub fn feed_resolved_text(translator: &mut Translator<TextBuffer>, text: &str) -> usize {
    text.chars()
        .flat_map(resolved_events)
        .map(|event| translator.dispatch(event))
        .filter(|outcome| matches!(outcome, Outcome::Translated(_)))
        .count()
}

/// Caret offset of the text area, if it has been shown before.
pub fn load_caret(ctx: &egui::Context, id: egui::Id) -> Option<usize> {
    let state = TextEditState::load(ctx, id)?;
    state.cursor.char_range().map(|range| range.primary.index)
}

pub fn store_caret(ctx: &egui::Context, id: egui::Id, caret: usize) {
    let mut state = TextEditState::load(ctx, id).unwrap_or_default();
    state
        .cursor
        .set_char_range(Some(CCursorRange::one(CCursor::new(caret))));
    state.store(ctx, id);
}
