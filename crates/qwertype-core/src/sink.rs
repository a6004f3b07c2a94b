//! Text surfaces that receive translated characters.

/// A text-editing surface with a caret.
///
/// Offsets count characters, not bytes.
pub trait TextSink {
    /// Current caret offset.
    fn caret_position(&self) -> usize;

    /// Insert `ch` at offset `at`.
    fn insert(&mut self, ch: char, at: usize);
}

impl<S: TextSink + ?Sized> TextSink for &mut S {
    fn caret_position(&self) -> usize {
        (**self).caret_position()
    }

    fn insert(&mut self, ch: char, at: usize) {
        (**self).insert(ch, at)
    }
}

/// Byte index of char offset `at` in `text`, clamped to the end.
pub fn byte_offset(text: &str, at: usize) -> usize {
    text.char_indices()
        .nth(at)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_offset_counts_chars() {
        assert_eq!(byte_offset("abc", 0), 0);
        assert_eq!(byte_offset("abc", 2), 2);
        assert_eq!(byte_offset("éa", 1), 2);
        assert_eq!(byte_offset("abc", 10), 3);
        assert_eq!(byte_offset("", 0), 0);
    }
}
