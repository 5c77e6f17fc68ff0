//! PDF document processor.

use crate::error::Result;
use crate::parser::{ParseOptions, PdfParser};

use super::{DecodedDocument, DocumentProcessor};

/// PDF document processor.
///
/// Decodes PDF bytes with lopdf and hands the page text to extraction.
#[derive(Debug, Clone, Default)]
pub struct PdfProcessor {
    _private: (),
}

impl PdfProcessor {
    /// Create a new PDF processor.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl DocumentProcessor for PdfProcessor {
    fn supported_extensions(&self) -> &[&str] {
        &["pdf"]
    }

    fn name(&self) -> &str {
        "pdf"
    }

    fn decode(&self, bytes: &[u8], options: &ParseOptions) -> Result<DecodedDocument> {
        let metadata = PdfParser::from_bytes_with_options(bytes, options.clone())?.decode()?;
        Ok(DecodedDocument {
            text: metadata.text.clone(),
            metadata: Some(metadata),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_pdf_processor_extensions() {
        let processor = PdfProcessor::new();
        assert_eq!(processor.supported_extensions(), &["pdf"]);
        assert!(processor.supports_extension("pdf"));
        assert!(processor.supports_extension("PDF"));
        assert!(!processor.supports_extension("txt"));
    }

    #[test]
    fn test_pdf_processor_rejects_text() {
        let processor = PdfProcessor::new();
        let err = processor
            .decode(b"just some text", &ParseOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownFormat));
    }
}
