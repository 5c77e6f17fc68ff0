//! Position-tagged token occurrences.

use serde::{Deserialize, Serialize};

/// A number found in the document text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericOccurrence {
    /// Parsed value
    pub value: f64,

    /// Character offset of the match
    pub position: usize,

    /// Trimmed text surrounding the match
    pub context: String,
}

/// A date found in the document text, kept exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOccurrence {
    /// Matched text, unparsed
    pub value: String,

    /// Character offset of the match
    pub position: usize,

    /// Trimmed text surrounding the match
    pub context: String,
}
