//! Character-indexed view over the source text
//!
//! Strategies reason in character positions while Rust strings are
//! indexed by bytes. `TextView` keeps both mappings so every slice it hands
//! out falls on a UTF-8 boundary.

use std::ops::Range;

/// Read-only, character-addressed view of a text
#[derive(Debug, Clone)]
pub struct TextView<'a> {
    text: &'a str,
    chars: Vec<char>,
    /// Byte offset of each character, plus a trailing `text.len()`
    offsets: Vec<usize>,
}

impl<'a> TextView<'a> {
    /// Index the text
    pub fn new(text: &'a str) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut offsets = Vec::with_capacity(text.len() + 1);

        for (byte, ch) in text.char_indices() {
            chars.push(ch);
            offsets.push(byte);
        }
        offsets.push(text.len());

        Self {
            text,
            chars,
            offsets,
        }
    }

    /// The underlying string
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the text has no characters
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at a position
    pub fn char_at(&self, pos: usize) -> char {
        self.chars[pos]
    }

    /// Characters of a range
    pub fn chars(&self, range: Range<usize>) -> &[char] {
        &self.chars[range]
    }

    /// Byte offset of a character position (`len()` maps to the text end)
    pub fn byte_offset(&self, pos: usize) -> usize {
        self.offsets[pos]
    }

    /// Character position of a byte offset that lies on a char boundary
    pub fn char_offset(&self, byte: usize) -> usize {
        match self.offsets.binary_search(&byte) {
            Ok(pos) => pos,
            // Inside a multi-byte character: snap to the character start
            Err(pos) => pos.saturating_sub(1),
        }
    }

    /// Substring for a character range
    pub fn slice(&self, range: Range<usize>) -> &'a str {
        &self.text[self.offsets[range.start]..self.offsets[range.end]]
    }

    /// Full range of the text
    pub fn full_range(&self) -> Range<usize> {
        0..self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_view() {
        let view = TextView::new("hello world");
        assert_eq!(view.len(), 11);
        assert_eq!(view.slice(6..11), "world");
        assert_eq!(view.byte_offset(11), 11);
        assert_eq!(view.char_offset(6), 6);
    }

    #[test]
    fn test_multibyte_view() {
        let text = "héllo 世界!";
        let view = TextView::new(text);
        assert_eq!(view.len(), 9);
        assert_eq!(view.char_at(1), 'é');
        assert_eq!(view.slice(6..8), "世界");
        assert_eq!(view.byte_offset(7), "héllo 世".len());
        assert_eq!(view.char_offset("héllo ".len()), 6);
        // A byte inside '世' snaps back to its start
        assert_eq!(view.char_offset("héllo ".len() + 1), 6);
        assert_eq!(view.slice(view.full_range()), text);
    }

    #[test]
    fn test_empty_view() {
        let view = TextView::new("");
        assert!(view.is_empty());
        assert_eq!(view.slice(0..0), "");
        assert_eq!(view.full_range(), 0..0);
    }
}
