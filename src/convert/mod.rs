//! Document processors and extension-based dispatch.
//!
//! A processor turns raw file bytes into document text (plus metadata where
//! the format has any). The registry picks a processor by file extension
//! and runs the extraction pipeline over whatever text it produced.
//!
//! # Example
//!
//! ```no_run
//! use pdfstruct::convert::{ProcessOptions, ProcessorRegistry};
//! use std::path::Path;
//!
//! let registry = ProcessorRegistry::with_defaults();
//! let result = registry.process_file(Path::new("report.pdf"), &ProcessOptions::default());
//!
//! if result.success {
//!     println!("{} tables", result.extracted_data.unwrap().tables.len());
//! }
//! ```

mod pdf;
mod text;

pub use pdf::PdfProcessor;
pub use text::TextProcessor;

use crate::detect::{detect_bytes, detect_path, InputKind};
use crate::error::{Error, Result};
use crate::extract::{ExtractOptions, TextExtractor};
use crate::model::{PdfMetadata, ProcessResult};
use crate::parser::ParseOptions;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Options for processing one document.
#[derive(Debug, Clone, Default)]
pub struct ProcessOptions {
    /// Decoding options (PDF inputs only)
    pub parse: ParseOptions,

    /// Extraction options
    pub extract: ExtractOptions,
}

impl ProcessOptions {
    /// Create new processing options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set decoding options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse = options;
        self
    }

    /// Set extraction options.
    pub fn with_extract_options(mut self, options: ExtractOptions) -> Self {
        self.extract = options;
        self
    }

    /// Skip undecodable pages instead of failing the document.
    pub fn lenient(mut self) -> Self {
        self.parse = self.parse.lenient();
        self
    }
}

/// Text produced by a processor, ready for extraction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedDocument {
    /// Document text
    pub text: String,

    /// Format metadata, when the format carries any
    pub metadata: Option<PdfMetadata>,
}

impl DecodedDocument {
    /// A document with text only.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metadata: None,
        }
    }
}

/// Trait for document processors.
///
/// Implement this trait to feed another input format into the extraction
/// pipeline.
pub trait DocumentProcessor: Send + Sync {
    /// Get the supported file extensions for this processor.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["pdf"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this processor.
    fn name(&self) -> &str;

    /// Decode raw bytes into document text.
    fn decode(&self, bytes: &[u8], options: &ParseOptions) -> Result<DecodedDocument>;

    /// Decode a file at the given path.
    fn decode_file(&self, path: &Path, options: &ParseOptions) -> Result<DecodedDocument> {
        let bytes = std::fs::read(path)?;
        self.decode(&bytes, options)
    }

    /// Check if this processor supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry for document processors.
///
/// The `process_*` methods never fail: errors come back as a
/// `ProcessResult` with `success: false`. The `try_process_*` variants
/// return them as `Err` instead.
pub struct ProcessorRegistry {
    processors: HashMap<String, Arc<dyn DocumentProcessor>>,
    by_name: HashMap<String, Arc<dyn DocumentProcessor>>,
}

impl ProcessorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            processors: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the PDF and plain-text processors.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PdfProcessor::new()));
        registry.register(Arc::new(TextProcessor::new()));
        registry
    }

    /// Register a processor for all its supported extensions.
    pub fn register(&mut self, processor: Arc<dyn DocumentProcessor>) {
        for ext in processor.supported_extensions() {
            self.processors
                .insert(ext.to_lowercase(), processor.clone());
        }
        self.by_name
            .insert(processor.name().to_lowercase(), processor);
    }

    /// Get a processor by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn DocumentProcessor>> {
        self.processors.get(&ext.to_lowercase()).cloned()
    }

    /// Get a processor by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn DocumentProcessor>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.processors.contains_key(&ext.to_lowercase())
    }

    /// Get all supported extensions, sorted.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.processors.keys().map(|s| s.as_str()).collect();
        exts.sort_unstable();
        exts
    }

    /// Process a file, choosing the processor by extension.
    ///
    /// Files without an extension are sniffed instead.
    pub fn try_process_file(&self, path: &Path, options: &ProcessOptions) -> Result<ProcessResult> {
        let ext = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => ext.to_string(),
            None => extension_for(&detect_path(path)?).to_string(),
        };

        let processor = self.require(&ext)?;
        log::debug!("processing {} with the {} processor", path.display(), processor.name());

        let decoded = processor.decode_file(path, &options.parse)?;
        run_extraction(decoded, &options.extract)
    }

    /// Process bytes, using `ext` to choose the processor.
    pub fn try_process_bytes(
        &self,
        bytes: &[u8],
        ext: &str,
        options: &ProcessOptions,
    ) -> Result<ProcessResult> {
        let decoded = self.require(ext)?.decode(bytes, &options.parse)?;
        run_extraction(decoded, &options.extract)
    }

    /// Process bytes of unknown type, sniffing PDF versus text.
    pub fn try_process_detected_bytes(
        &self,
        bytes: &[u8],
        options: &ProcessOptions,
    ) -> Result<ProcessResult> {
        let kind = detect_bytes(bytes)?;
        self.try_process_bytes(bytes, extension_for(&kind), options)
    }

    /// Like [`try_process_file`](Self::try_process_file), reporting errors in-band.
    pub fn process_file(&self, path: &Path, options: &ProcessOptions) -> ProcessResult {
        report(self.try_process_file(path, options))
    }

    /// Like [`try_process_bytes`](Self::try_process_bytes), reporting errors in-band.
    pub fn process_bytes(&self, bytes: &[u8], ext: &str, options: &ProcessOptions) -> ProcessResult {
        report(self.try_process_bytes(bytes, ext, options))
    }

    /// Like [`try_process_detected_bytes`](Self::try_process_detected_bytes),
    /// reporting errors in-band.
    pub fn process_detected_bytes(&self, bytes: &[u8], options: &ProcessOptions) -> ProcessResult {
        report(self.try_process_detected_bytes(bytes, options))
    }

    fn require(&self, ext: &str) -> Result<Arc<dyn DocumentProcessor>> {
        self.get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedFileType(ext.to_string()))
    }
}

impl Default for ProcessorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn extension_for(kind: &InputKind) -> &'static str {
    match kind {
        InputKind::Pdf { .. } => "pdf",
        InputKind::Text => "txt",
    }
}

/// Run the extraction pipeline over decoded text.
pub(crate) fn run_extraction(
    decoded: DecodedDocument,
    options: &ExtractOptions,
) -> Result<ProcessResult> {
    let extractor = TextExtractor::new(options.clone())?;
    let data = extractor.extract(&decoded.text);

    log::debug!(
        "extracted {} table(s), {} number(s), {} date(s)",
        data.tables.len(),
        data.numbers.len(),
        data.dates.len()
    );
    Ok(ProcessResult::success(decoded.metadata, data))
}

/// Turn a pipeline error into a failed result.
pub(crate) fn report(result: Result<ProcessResult>) -> ProcessResult {
    result.unwrap_or_else(|e| {
        log::error!("Error processing document: {}", e);
        ProcessResult::failure(&e)
    })
}
