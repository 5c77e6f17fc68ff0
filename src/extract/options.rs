//! Extraction options and configuration.

/// Options controlling the text extraction heuristics.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    /// Minimum contiguous table-like lines (header included) for a table
    pub min_table_rows: usize,

    /// Characters of context kept on each side of a number
    pub number_context_radius: usize,

    /// Characters of context kept on each side of a date
    pub date_context_radius: usize,

    /// Share of parseable cells (0.0-1.0) for a column to count as numeric
    pub numeric_column_ratio: f64,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum number of lines for a table run.
    pub fn with_min_table_rows(mut self, rows: usize) -> Self {
        self.min_table_rows = rows;
        self
    }

    /// Set the context radius for numbers.
    pub fn with_number_context_radius(mut self, radius: usize) -> Self {
        self.number_context_radius = radius;
        self
    }

    /// Set the context radius for dates.
    pub fn with_date_context_radius(mut self, radius: usize) -> Self {
        self.date_context_radius = radius;
        self
    }

    /// Set the numeric column threshold, clamped to 0.0-1.0.
    pub fn with_numeric_column_ratio(mut self, ratio: f64) -> Self {
        self.numeric_column_ratio = ratio.clamp(0.0, 1.0);
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            min_table_rows: 3,
            number_context_radius: 50,
            date_context_radius: 30,
            numeric_column_ratio: 0.7,
        }
    }
}
