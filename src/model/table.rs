//! Table type.

use serde::{Deserialize, Serialize};

/// A table recovered from a run of table-like lines.
///
/// Rows are not padded or truncated to the header width; a row keeps
/// whatever columns its source line split into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Sequential identifier (`table_1`, `table_2`, ...)
    pub id: String,

    /// Columns of the first line in the run
    pub headers: Vec<String>,

    /// Data rows (header excluded)
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Build the table for the `ordinal`-th run (1-based).
    pub fn new(ordinal: usize, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            id: format!("table_{}", ordinal),
            headers,
            rows,
        }
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of header columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Non-empty cells of column `index` across data rows, in row order.
    ///
    /// Rows too short to have the column are skipped.
    pub fn column_values(&self, index: usize) -> Vec<&str> {
        self.rows
            .iter()
            .filter_map(|row| row.get(index))
            .map(String::as_str)
            .filter(|cell| !cell.is_empty())
            .collect()
    }

    /// Check if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
