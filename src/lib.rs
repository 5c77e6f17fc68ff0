//! # pdfstruct
//!
//! Heuristic structure recovery from PDF text.
//!
//! PDF text extraction loses layout: what comes back is a flat string of
//! lines. This library recovers what it can from that string alone (tables,
//! key-value pairs, lists, sections, numbers and dates) and suggests chart
//! mappings over the recovered tables.
//!
//! ## Quick Start
//!
//! ```
//! use pdfstruct::{extract_text_data, render};
//!
//! let text = "SALES REPORT\n\
//!             Region   Q1     Q2\n\
//!             North    1200   1350\n\
//!             South    950    1010\n\
//!             Prepared: 2024-03-15";
//!
//! let data = extract_text_data(text)?;
//! assert_eq!(data.tables.len(), 1);
//! assert_eq!(data.structured_data.key_value_pairs[0].key, "Prepared");
//!
//! let viz = render::visualize(&data);
//! assert_eq!(viz.charts.len(), 3);
//! # Ok::<(), pdfstruct::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Line heuristics**: table rows, list items and headers from plain lines
//! - **Pattern scans**: key-value pairs, numbers and dates with context
//! - **Chart suggestions**: bar, line and scatter mappings per table
//! - **PDF front end**: lopdf decoding with page selection and lenient mode
//! - **Parallel batches**: Uses Rayon across independent documents

pub mod chart;
pub mod convert;
pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{
    DecodedDocument, DocumentProcessor, PdfProcessor, ProcessOptions, ProcessorRegistry,
    TextProcessor,
};
pub use detect::{detect_bytes, detect_path, InputKind};
pub use error::{Error, Result};
pub use extract::{ExtractOptions, TextExtractor};
pub use model::{
    ChartSuggestion, ChartType, DateOccurrence, ExtractedData, KeyValuePair, List,
    NumericOccurrence, PdfMetadata, ProcessResult, Section, StructuredData, Table,
    VisualizationData,
};
pub use parser::{ErrorMode, PageSelection, ParseOptions, PdfParser};
pub use render::{visualize, JsonFormat};

use rayon::prelude::*;
use std::path::Path;

use convert::{report, run_extraction};

/// Recover structure from document text with default options.
///
/// # Example
///
/// ```
/// use pdfstruct::extract_text_data;
///
/// let data = extract_text_data("Invoice: 1042\nDue: 03/15/2024")?;
/// assert_eq!(data.structured_data.key_value_pairs.len(), 2);
/// assert_eq!(data.dates[0].value, "03/15/2024");
/// # Ok::<(), pdfstruct::Error>(())
/// ```
pub fn extract_text_data(text: &str) -> Result<ExtractedData> {
    extract_text_data_with_options(text, &ExtractOptions::default())
}

/// Recover structure from document text with custom options.
pub fn extract_text_data_with_options(text: &str, options: &ExtractOptions) -> Result<ExtractedData> {
    Ok(TextExtractor::new(options.clone())?.extract(text))
}

/// Run extraction over text that was already decoded.
///
/// The result carries no metadata. Never fails; errors are reported in the
/// returned `ProcessResult`.
pub fn process_text(text: &str) -> ProcessResult {
    report(run_extraction(
        DecodedDocument::from_text(text),
        &ExtractOptions::default(),
    ))
}

/// Decode PDF bytes and run extraction.
///
/// # Example
///
/// ```
/// use pdfstruct::process_bytes;
///
/// let result = process_bytes(b"definitely not a pdf");
/// assert!(!result.success);
/// assert!(result.error.is_some());
/// ```
pub fn process_bytes(data: &[u8]) -> ProcessResult {
    process_bytes_with_options(data, &ProcessOptions::default())
}

/// Decode PDF bytes and run extraction with custom options.
pub fn process_bytes_with_options(data: &[u8], options: &ProcessOptions) -> ProcessResult {
    report(
        PdfProcessor::new()
            .decode(data, &options.parse)
            .and_then(|decoded| run_extraction(decoded, &options.extract)),
    )
}

/// Process a PDF or text file, chosen by extension.
///
/// # Example
///
/// ```no_run
/// use pdfstruct::process_file;
///
/// let result = process_file("report.pdf");
/// if let Some(data) = result.extracted_data {
///     println!("{} tables", data.tables.len());
/// }
/// ```
pub fn process_file<P: AsRef<Path>>(path: P) -> ProcessResult {
    process_file_with_options(path, &ProcessOptions::default())
}

/// Process a file with custom options.
pub fn process_file_with_options<P: AsRef<Path>>(path: P, options: &ProcessOptions) -> ProcessResult {
    ProcessorRegistry::with_defaults().process_file(path.as_ref(), options)
}

/// Process many files in parallel.
///
/// Results come back in input order, one per path; a failing file does not
/// affect the others.
pub fn process_batch<P: AsRef<Path> + Sync>(paths: &[P], options: &ProcessOptions) -> Vec<ProcessResult> {
    let registry = ProcessorRegistry::with_defaults();
    log::debug!("processing batch of {} file(s)", paths.len());

    paths
        .par_iter()
        .map(|path| registry.process_file(path.as_ref(), options))
        .collect()
}

/// Extract many texts in parallel, each with its own extractor.
pub fn extract_batch<S: AsRef<str> + Sync>(texts: &[S], options: &ExtractOptions) -> Result<Vec<ExtractedData>> {
    texts
        .par_iter()
        .map(|text| extract_text_data_with_options(text.as_ref(), options))
        .collect()
}

/// Read a file asynchronously, then process it.
#[cfg(feature = "async")]
pub async fn process_file_async<P: AsRef<Path>>(path: P, options: ProcessOptions) -> ProcessResult {
    let path = path.as_ref();
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) => return report(Err(e.into())),
    };

    let registry = ProcessorRegistry::with_defaults();
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => registry.process_bytes(&bytes, ext, &options),
        None => registry.process_detected_bytes(&bytes, &options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_bytes_empty_data() {
        let result = process_bytes(&[]);
        assert!(!result.success);
        assert_eq!(
            result.error.as_deref(),
            Some("Unknown file format: not a valid PDF")
        );
    }

    #[test]
    fn test_process_bytes_too_short() {
        let result = process_bytes(b"%PDF");
        assert!(!result.success);
    }

    #[test]
    fn test_process_bytes_bad_version() {
        let result = process_bytes(b"%PDF-x.y\n");
        assert_eq!(result.error.as_deref(), Some("Unsupported PDF version: x.y"));
    }

    #[test]
    fn test_process_bytes_corrupt_body() {
        let result = process_bytes(b"%PDF-1.7\nthis is not a pdf body");
        assert!(!result.success);
        assert!(result.extracted_data.is_none());
    }

    #[test]
    fn test_process_text_single_sentence() {
        let result = process_text("The quick brown fox jumps over the lazy dog.");
        assert!(result.success);

        let data = result.extracted_data.unwrap();
        assert!(data.tables.is_empty());
        assert!(data.structured_data.key_value_pairs.is_empty());
        assert!(data.structured_data.lists.is_empty());
        assert!(data.structured_data.sections.is_empty());
    }

    #[test]
    fn test_extract_batch_preserves_order() {
        let texts = ["Count: 1", "Value 7 and 8", ""];
        let results = extract_batch(&texts, &ExtractOptions::default()).unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].structured_data.key_value_pairs[0].value, "1");
        assert_eq!(results[1].numbers.len(), 2);
        assert!(results[2].is_empty());
    }

    #[test]
    fn test_process_batch_missing_file() {
        let results = process_batch(&["/nonexistent/report.pdf"], &ProcessOptions::default());
        assert_eq!(results.len(), 1);
        assert!(!results[0].success);
    }
}
