//! Document-level results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{DateOccurrence, NumericOccurrence, StructuredData, Table};
use crate::error::Error;

/// Metadata of a decoded PDF.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PdfMetadata {
    /// Total number of pages in the file
    pub pages: u32,

    /// Entries of the Info dictionary (`Title`, `Author`, `Producer`, ...)
    pub info: Map<String, Value>,

    /// PDF version (e.g., "1.7")
    pub version: String,

    /// Decoded text of the selected pages
    pub text: String,

    /// Creation date, when the Info dictionary has a readable one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Last modification date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,

    /// Whether the file declares encryption
    #[serde(default)]
    pub encrypted: bool,
}

impl PdfMetadata {
    /// Create metadata for a PDF version.
    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Default::default()
        }
    }

    /// String value of an Info entry.
    pub fn info_str(&self, key: &str) -> Option<&str> {
        self.info.get(key).and_then(Value::as_str)
    }

    /// Document title from the Info dictionary.
    pub fn title(&self) -> Option<&str> {
        self.info_str("Title")
    }

    /// Document author from the Info dictionary.
    pub fn author(&self) -> Option<&str> {
        self.info_str("Author")
    }
}

/// Everything recovered from one document's text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedData {
    /// The analyzed text, verbatim
    pub text: String,

    pub tables: Vec<Table>,

    pub numbers: Vec<NumericOccurrence>,

    /// Dates grouped by pattern, not in document order
    pub dates: Vec<DateOccurrence>,

    pub structured_data: StructuredData,
}

impl ExtractedData {
    /// Whether no structure at all was recovered.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
            && self.numbers.is_empty()
            && self.dates.is_empty()
            && self.structured_data.key_value_pairs.is_empty()
            && self.structured_data.lists.is_empty()
            && self.structured_data.sections.is_empty()
    }
}

/// Outcome of processing one document.
///
/// Failures are reported in-band (`success: false` plus a message) so a
/// caller handling many uploads never sees a panic or an `Err` from the
/// pipeline itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResult {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PdfMetadata>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_data: Option<ExtractedData>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProcessResult {
    /// A successful result.
    pub fn success(metadata: Option<PdfMetadata>, extracted_data: ExtractedData) -> Self {
        Self {
            success: true,
            metadata,
            extracted_data: Some(extracted_data),
            error: None,
        }
    }

    /// A failed result carrying the error message.
    pub fn failure(error: &Error) -> Self {
        Self {
            success: false,
            metadata: None,
            extracted_data: None,
            error: Some(error.to_string()),
        }
    }

    /// Convert back into a `Result`, for callers that prefer `?`.
    pub fn into_result(self) -> crate::Result<(Option<PdfMetadata>, ExtractedData)> {
        match (self.success, self.extracted_data) {
            (true, Some(data)) => Ok((self.metadata, data)),
            _ => Err(Error::Other(
                self.error.unwrap_or_else(|| "extraction failed".to_string()),
            )),
        }
    }
}
