//! Plain-text processor for text extracted upstream.

use crate::error::{Error, Result};
use crate::parser::ParseOptions;

use super::{DecodedDocument, DocumentProcessor};

const UTF8_BOM: &str = "\u{feff}";

/// Processor for UTF-8 text files.
#[derive(Debug, Clone, Default)]
pub struct TextProcessor {
    _private: (),
}

impl TextProcessor {
    /// Create a new text processor.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl DocumentProcessor for TextProcessor {
    fn supported_extensions(&self) -> &[&str] {
        &["txt", "text"]
    }

    fn name(&self) -> &str {
        "text"
    }

    fn decode(&self, bytes: &[u8], _options: &ParseOptions) -> Result<DecodedDocument> {
        let text = std::str::from_utf8(bytes).map_err(|e| Error::Encoding(e.to_string()))?;
        let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
        Ok(DecodedDocument::from_text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_strips_bom() {
        let decoded = TextProcessor::new()
            .decode("\u{feff}Total: 5".as_bytes(), &ParseOptions::default())
            .unwrap();
        assert_eq!(decoded.text, "Total: 5");
        assert!(decoded.metadata.is_none());
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let err = TextProcessor::new()
            .decode(&[b'a', 0xC3, 0x28], &ParseOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::Encoding(_)));
    }
}
