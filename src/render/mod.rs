//! Rendering extraction output for downstream consumers.

mod json;
mod stats;
mod visualize;

pub use json::{to_json, JsonFormat};
pub use stats::ExtractionStats;
pub use visualize::{visualize, visualize_with_ratio};
