//! Character offsets and context windows around regex matches.
//!
//! Regex matches report byte offsets; positions and windows in the output
//! are counted in characters.

/// Converts ascending byte offsets of one text into character offsets
/// without rescanning from the start each time.
pub(crate) struct CharOffsets<'a> {
    text: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> CharOffsets<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            text,
            byte: 0,
            chars: 0,
        }
    }

    /// Character offset of `byte`, which must lie on a char boundary.
    pub(crate) fn char_offset(&mut self, byte: usize) -> usize {
        if byte < self.byte {
            self.byte = 0;
            self.chars = 0;
        }
        self.chars += self.text[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}

/// Up to `radius` characters either side of byte offset `at`, trimmed.
///
/// The window starts `radius` characters before the match and ends
/// `radius` characters after the match start, clipped to the text.
pub(crate) fn context_window(text: &str, at: usize, radius: usize) -> String {
    let start = text[..at]
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map_or(at, |(i, _)| i);
    let end = text[at..]
        .char_indices()
        .nth(radius)
        .map_or(text.len(), |(i, _)| at + i);

    text[start..end].trim().to_string()
}
