//! In-memory text surface with a caret.

use crate::sink::{TextSink, byte_offset};

/// String-backed [`TextSink`].
///
/// The caret is a char offset in `0..=len`. Editing beyond insertion is
/// limited to what a plain text area does natively: newline, backspace and
/// caret movement.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    caret: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer holding `text` with the caret at the end.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let caret = text.chars().count();
        Self { text, caret }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Direct access for widgets that edit the string themselves. Call
    /// [`set_caret`](Self::set_caret) afterwards to re-clamp the caret.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn set_caret(&mut self, at: usize) {
        self.caret = at.min(self.len_chars());
    }

    pub fn move_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.set_caret(self.caret + 1);
    }

    pub fn move_up(&mut self) {
        let (line, col) = self.caret_line_col();
        if line > 0 {
            self.set_caret_line_col(line - 1, col);
        }
    }

    pub fn move_down(&mut self) {
        let (line, col) = self.caret_line_col();
        if line + 1 < self.line_count() {
            self.set_caret_line_col(line + 1, col);
        }
    }

    pub fn move_line_start(&mut self) {
        let (line, _) = self.caret_line_col();
        self.set_caret_line_col(line, 0);
    }

    pub fn move_line_end(&mut self) {
        let (line, _) = self.caret_line_col();
        self.set_caret_line_col(line, usize::MAX);
    }

    pub fn newline(&mut self) {
        self.insert('\n', self.caret);
    }

    /// Delete the character before the caret.
    pub fn backspace(&mut self) {
        if self.caret == 0 {
            return;
        }
        let at = byte_offset(&self.text, self.caret - 1);
        self.text.remove(at);
        self.caret -= 1;
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }

    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    /// Zero-based (line, column) of the caret, columns in chars.
    pub fn caret_line_col(&self) -> (usize, usize) {
        let mut line = 0;
        let mut col = 0;
        for ch in self.text.chars().take(self.caret) {
            if ch == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }

    /// Place the caret on `line` at `col`, clamping both to the content.
    pub fn set_caret_line_col(&mut self, line: usize, col: usize) {
        let mut offset = 0;
        for (i, text) in self.text.split('\n').enumerate() {
            let width = text.chars().count();
            if i == line {
                self.caret = offset + col.min(width);
                return;
            }
            offset += width + 1;
        }
        self.caret = self.len_chars();
    }
}

impl TextSink for TextBuffer {
    fn caret_position(&self) -> usize {
        self.caret
    }

    fn insert(&mut self, ch: char, at: usize) {
        let at = at.min(self.len_chars());
        let byte = byte_offset(&self.text, at);
        self.text.insert(byte, ch);
        if at <= self.caret {
            self.caret += 1;
        }
    }
}
