//! PDF decoding using lopdf.
//!
//! Produces the document text and metadata; all structure recovery happens
//! afterwards, on the text alone.

use std::path::Path;

use lopdf::{Dictionary, Document as LopdfDocument, Object};
use serde_json::{Map, Value};

use crate::detect::pdf_version;
use crate::error::{Error, Result};
use crate::model::PdfMetadata;

use super::options::{ErrorMode, ParseOptions};

/// Separator placed between the text of consecutive pages.
const PAGE_SEPARATOR: &str = "\n\n";

/// PDF document decoder.
pub struct PdfParser {
    doc: LopdfDocument,
    options: ParseOptions,
}

impl PdfParser {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a PDF file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Load a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Load a PDF from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        pdf_version(data)?;

        let doc = LopdfDocument::load_mem(data)?;
        if doc.is_encrypted() {
            log::warn!("PDF is encrypted; text extraction may fail");
        }

        Ok(Self { doc, options })
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Get PDF version.
    pub fn version(&self) -> &str {
        &self.doc.version
    }

    /// Decode text and metadata.
    pub fn decode(&self) -> Result<PdfMetadata> {
        let mut metadata = PdfMetadata::with_version(self.doc.version.clone());
        metadata.pages = self.page_count();
        metadata.encrypted = self.doc.is_encrypted();
        metadata.info = self.info();

        if let Some(Value::String(date)) = metadata.info.get("CreationDate") {
            metadata.created = parse_pdf_date(date);
        }
        if let Some(Value::String(date)) = metadata.info.get("ModDate") {
            metadata.modified = parse_pdf_date(date);
        }

        metadata.text = self.text()?;

        log::debug!(
            "decoded PDF {}: {} page(s), {} byte(s) of text",
            metadata.version,
            metadata.pages,
            metadata.text.len()
        );
        Ok(metadata)
    }

    /// Text of the selected pages, joined by blank lines.
    fn text(&self) -> Result<String> {
        let mut pages = Vec::new();

        for page_num in self.doc.get_pages().into_keys() {
            if !self.options.pages.includes(page_num) {
                continue;
            }

            match self.doc.extract_text(&[page_num]) {
                Ok(text) => pages.push(text),
                Err(e) if self.options.error_mode == ErrorMode::Lenient => {
                    log::warn!("Failed to extract text from page {}: {}", page_num, e);
                }
                Err(e) => {
                    return Err(Error::TextExtract(format!("Page {}: {}", page_num, e)));
                }
            }
        }

        Ok(pages.join(PAGE_SEPARATOR))
    }

    /// The Info dictionary as JSON, plus format flags.
    fn info(&self) -> Map<String, Value> {
        let mut info = Map::new();
        info.insert(
            "PDFFormatVersion".to_string(),
            Value::String(self.doc.version.clone()),
        );
        info.insert(
            "IsAcroFormPresent".to_string(),
            Value::Bool(
                self.doc
                    .catalog()
                    .map(|catalog| catalog.has(b"AcroForm"))
                    .unwrap_or(false),
            ),
        );

        if let Some(dict) = self.info_dictionary() {
            for (key, value) in dict.iter() {
                if let Some(value) = self.info_value(value) {
                    info.insert(String::from_utf8_lossy(key).into_owned(), value);
                }
            }
        }

        info
    }

    fn info_dictionary(&self) -> Option<&Dictionary> {
        match self.doc.trailer.get(b"Info").ok()? {
            Object::Reference(id) => self.doc.get_dictionary(*id).ok(),
            Object::Dictionary(dict) => Some(dict),
            _ => None,
        }
    }

    fn info_value(&self, object: &Object) -> Option<Value> {
        match object {
            Object::String(bytes, _) => Some(Value::String(decode_pdf_string(bytes))),
            Object::Name(bytes) => Some(Value::String(String::from_utf8_lossy(bytes).into_owned())),
            Object::Integer(i) => Some(Value::from(*i)),
            Object::Real(r) => Some(Value::from(f64::from(*r))),
            Object::Boolean(b) => Some(Value::Bool(*b)),
            Object::Reference(id) => match self.doc.get_object(*id).ok()? {
                Object::Reference(_) => None,
                resolved => self.info_value(resolved),
            },
            _ => None,
        }
    }
}

/// Decode a PDF text string: UTF-16BE with BOM, else UTF-8, else Latin-1.
fn decode_pdf_string(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

/// Parse a PDF date string (D:YYYYMMDDHHmmSS...), ignoring the zone suffix.
fn parse_pdf_date(s: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    let s = s.strip_prefix("D:").unwrap_or(s);
    let field = |range: std::ops::Range<usize>, default: u32| {
        s.get(range)
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(default)
    };

    let year: i32 = s.get(0..4)?.parse().ok()?;
    chrono::NaiveDate::from_ymd_opt(year, field(4..6, 1), field(6..8, 1))
        .and_then(|date| date.and_hms_opt(field(8..10, 0), field(10..12, 0), field(12..14, 0)))
        .map(|dt| chrono::DateTime::from_naive_utc_and_offset(dt, chrono::Utc))
}
