//! Visualization summary consumed by chart-rendering collaborators.

use serde::{Deserialize, Serialize};

use super::ChartSuggestion;

/// Datasets plus every table's chart suggestions, flattened.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisualizationData {
    pub datasets: Vec<Dataset>,
    pub charts: Vec<ChartSuggestion>,
}

/// Origin of a dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    #[default]
    Pdf,
}

/// A dataset, tagged on the wire by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Dataset {
    /// One recovered table
    Table(TableDataset),
    /// Every number found in the text
    Numbers(NumbersDataset),
}

impl Dataset {
    pub fn id(&self) -> &str {
        match self {
            Dataset::Table(t) => &t.id,
            Dataset::Numbers(n) => &n.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Dataset::Table(t) => &t.name,
            Dataset::Numbers(n) => &n.name,
        }
    }
}

/// Table rows, verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDataset {
    pub id: String,
    pub name: String,
    pub headers: Vec<String>,
    pub data: Vec<Vec<String>>,
    pub source: DataSource,
}

/// Numbers with their context; positions are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumbersDataset {
    pub id: String,
    pub name: String,
    pub data: Vec<NumberPoint>,
    pub source: DataSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberPoint {
    pub value: f64,
    pub context: String,
}
