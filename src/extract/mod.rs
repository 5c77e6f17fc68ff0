//! Structure recovery from flat document text.
//!
//! The text is treated as an ordered sequence of `\n`-separated lines with
//! no layout information. Tables, lists and sections come from line
//! heuristics ([`classify`]); key-value pairs, numbers and dates come from
//! regex scans over the raw text.
//!
//! # Example
//!
//! ```
//! use pdfstruct::extract::{ExtractOptions, TextExtractor};
//!
//! let extractor = TextExtractor::new(ExtractOptions::default())?;
//! let data = extractor.extract("Revenue: 1200\nREGIONS\n- North\n- South");
//!
//! assert_eq!(data.structured_data.key_value_pairs[0].key, "Revenue");
//! assert_eq!(data.structured_data.lists[0].len(), 2);
//! # Ok::<(), pdfstruct::Error>(())
//! ```

pub mod classify;
mod context;
mod dates;
mod key_value;
mod lists;
mod numbers;
mod options;
pub(crate) mod patterns;
mod sections;
mod tables;

pub use classify::{classify, is_header, is_list_item, is_table_row, split_columns, LineKind};
pub use dates::extract_dates;
pub use key_value::extract_key_values;
pub use lists::segment_lists;
pub use numbers::extract_numbers;
pub use options::ExtractOptions;
pub use sections::segment_sections;
pub use tables::segment_tables;

use crate::error::Result;
use crate::model::{
    DateOccurrence, ExtractedData, KeyValuePair, List, NumericOccurrence, Section,
    StructuredData, Table,
};

use patterns::Patterns;

/// Runs every extractor over one document's text.
///
/// Each instance owns its compiled patterns; create one per document (or
/// per thread) and the extractions share nothing.
#[derive(Debug, Clone)]
pub struct TextExtractor {
    options: ExtractOptions,
    patterns: Patterns,
}

impl TextExtractor {
    /// Create an extractor, compiling its patterns.
    pub fn new(options: ExtractOptions) -> Result<Self> {
        Ok(Self {
            options,
            patterns: Patterns::compile()?,
        })
    }

    /// The options this extractor was built with.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Recover every structure from `text`.
    pub fn extract(&self, text: &str) -> ExtractedData {
        log::debug!("extracting structure from {} byte(s) of text", text.len());

        ExtractedData {
            text: text.to_string(),
            tables: self.tables(text),
            numbers: self.numbers(text),
            dates: self.dates(text),
            structured_data: self.structured_data(text),
        }
    }

    /// Tables from contiguous table-like lines.
    pub fn tables(&self, text: &str) -> Vec<Table> {
        segment_tables(lines(text), self.options.min_table_rows)
    }

    /// Numbers in document order.
    pub fn numbers(&self, text: &str) -> Vec<NumericOccurrence> {
        extract_numbers(text, &self.patterns.number, self.options.number_context_radius)
    }

    /// Dates grouped by pattern.
    pub fn dates(&self, text: &str) -> Vec<DateOccurrence> {
        extract_dates(text, &self.patterns.dates, self.options.date_context_radius)
    }

    /// `Label: Value` lines.
    pub fn key_value_pairs(&self, text: &str) -> Vec<KeyValuePair> {
        extract_key_values(text, &self.patterns.key_value)
    }

    /// Contiguous list-item runs.
    pub fn lists(&self, text: &str) -> Vec<List> {
        segment_lists(lines(text))
    }

    /// Header-delimited sections.
    pub fn sections(&self, text: &str) -> Vec<Section> {
        segment_sections(lines(text))
    }

    /// Key-value pairs, lists and sections together.
    pub fn structured_data(&self, text: &str) -> StructuredData {
        StructuredData {
            key_value_pairs: self.key_value_pairs(text),
            lists: self.lists(text),
            sections: self.sections(text),
        }
    }
}

fn lines(text: &str) -> std::str::Split<'_, char> {
    text.split('\n')
}
