//! Counts summarizing an extraction result.

use serde::{Deserialize, Serialize};

use crate::model::ExtractedData;

/// Statistics collected from one extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Number of tables recovered
    pub table_count: u32,

    /// Data rows across all tables
    pub table_row_count: u32,

    /// Numbers found
    pub number_count: u32,

    /// Dates found (across all patterns)
    pub date_count: u32,

    /// Key-value pairs found
    pub key_value_count: u32,

    /// Lists recovered
    pub list_count: u32,

    /// Items across all lists
    pub list_item_count: u32,

    /// Sections recovered
    pub section_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,
}

impl ExtractionStats {
    /// Collect statistics from an extraction result.
    pub fn from_data(data: &ExtractedData) -> Self {
        let structured = &data.structured_data;
        Self {
            table_count: data.tables.len() as u32,
            table_row_count: data.tables.iter().map(|t| t.rows.len() as u32).sum(),
            number_count: data.numbers.len() as u32,
            date_count: data.dates.len() as u32,
            key_value_count: structured.key_value_pairs.len() as u32,
            list_count: structured.lists.len() as u32,
            list_item_count: structured.lists.iter().map(|l| l.len() as u32).sum(),
            section_count: structured.sections.len() as u32,
            word_count: data.text.split_whitespace().count() as u32,
        }
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ExtractionStats) {
        self.table_count += other.table_count;
        self.table_row_count += other.table_row_count;
        self.number_count += other.number_count;
        self.date_count += other.date_count;
        self.key_value_count += other.key_value_count;
        self.list_count += other.list_count;
        self.list_item_count += other.list_item_count;
        self.section_count += other.section_count;
        self.word_count += other.word_count;
    }
}
