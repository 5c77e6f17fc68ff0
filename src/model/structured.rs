//! Key-value pairs, lists and sections.

use serde::{Deserialize, Serialize};

/// A `Label: Value` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValuePair {
    pub key: String,
    pub value: String,
}

impl KeyValuePair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A contiguous run of list-item lines, each kept trimmed with its marker.
pub type List = Vec<String>;

/// A header line and the non-empty lines that follow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// The header line
    pub title: String,

    /// Trimmed non-header lines up to the next header
    pub content: Vec<String>,
}

impl Section {
    /// Open a section with no content yet.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: Vec::new(),
        }
    }
}

/// Structures recovered alongside tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredData {
    /// Every matching line, duplicates included
    pub key_value_pairs: Vec<KeyValuePair>,

    pub lists: Vec<List>,

    pub sections: Vec<Section>,
}
