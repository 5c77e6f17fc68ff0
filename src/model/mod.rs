//! Value types produced by the extraction pipeline.
//!
//! Everything here is a plain serializable value, built fresh for each
//! document. Field names follow the camelCase JSON shape that upload and
//! chart-rendering collaborators consume.

mod chart;
mod document;
mod occurrence;
mod structured;
mod table;
mod visualization;

pub use chart::{ChartSuggestion, ChartType};
pub use document::{ExtractedData, PdfMetadata, ProcessResult};
pub use occurrence::{DateOccurrence, NumericOccurrence};
pub use structured::{KeyValuePair, List, Section, StructuredData};
pub use table::Table;
pub use visualization::{DataSource, Dataset, NumberPoint, NumbersDataset, TableDataset, VisualizationData};
