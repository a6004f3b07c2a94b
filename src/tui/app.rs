//! Application state.

use qwertype_core::{InputState, TextBuffer, Translator};

/// How the terminal reports keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyStream {
    /// Modifier and lock keys arrive as their own press/release events.
    Raw,
    /// Only resolved characters arrive, shift and caps-lock already applied.
    Resolved,
}

impl KeyStream {
    pub fn name(self) -> &'static str {
        match self {
            KeyStream::Raw => "raw keys",
            KeyStream::Resolved => "resolved chars",
        }
    }
}

pub struct App {
    pub translator: Translator<TextBuffer>,
    pub stream: KeyStream,
    /// First visual row shown in the text area.
    pub scroll: usize,
    /// Text area height in rows, updated on every draw.
    pub visible_lines: usize,
    /// Text area width in columns, updated on every draw. Lines wrap here.
    pub text_width: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(stream: KeyStream, caps_lock_on: bool) -> Self {
        let translator = match stream {
            KeyStream::Raw => Translator::new(TextBuffer::new(), caps_lock_on),
            KeyStream::Resolved => Translator::for_resolved_host(TextBuffer::new()),
        };
        Self {
            translator,
            stream,
            scroll: 0,
            visible_lines: 1,
            text_width: usize::MAX,
            should_quit: false,
        }
    }

    pub fn buffer(&self) -> &TextBuffer {
        self.translator.sink()
    }

    pub fn buffer_mut(&mut self) -> &mut TextBuffer {
        self.translator.sink_mut()
    }

    pub fn input_state(&self) -> &InputState {
        self.translator.state()
    }

    fn wrap_width(&self) -> usize {
        self.text_width.max(1)
    }

    /// Visual rows of the buffer soft-wrapped at `text_width`, as
    /// (buffer line, first column) pairs.
    ///
    /// A line of `n` chars takes `n / width + 1` rows, so a caret sitting
    /// after a full row always has a cell to land on.
    pub fn wrapped_rows(&self) -> Vec<(usize, usize)> {
        let width = self.wrap_width();
        let mut rows = Vec::new();
        for (line, text) in self.buffer().lines().enumerate() {
            let len = text.chars().count();
            rows.extend((0..=len / width).map(|i| (line, i * width)));
        }
        rows
    }

    /// Visual (row, column) of the caret after wrapping.
    pub fn caret_row_col(&self) -> (usize, usize) {
        let width = self.wrap_width();
        let (line, col) = self.buffer().caret_line_col();
        let rows_before: usize = self
            .buffer()
            .lines()
            .take(line)
            .map(|l| l.chars().count() / width + 1)
            .sum();
        (rows_before + col / width, col % width)
    }

    /// Buffer (line, column) shown at a visual row and column. Rows past the
    /// end map to the end of the last line.
    pub fn line_col_at(&self, row: usize, col: usize) -> (usize, usize) {
        let width = self.wrap_width();
        match self.wrapped_rows().get(row) {
            Some(&(line, start)) => (line, start + col.min(width - 1)),
            None => {
                let last = self.buffer().line_count() - 1;
                let len = self.buffer().lines().last().map_or(0, |l| l.chars().count());
                (last, len)
            }
        }
    }

    /// Keep the caret row inside the visible window.
    pub fn update_scroll(&mut self) {
        let (row, _) = self.caret_row_col();
        let height = self.visible_lines.max(1);
        if row < self.scroll {
            self.scroll = row;
        } else if row >= self.scroll + height {
            self.scroll = row + 1 - height;
        }
    }

    pub fn status_hint(&self) -> &'static str {
        "Esc/Ctrl+C/Ctrl+Q:quit  Enter:newline  Backspace:delete  arrows/click:move caret"
    }
}
