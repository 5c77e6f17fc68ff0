//! Visualization summary over an extraction result.

use crate::chart::{suggest_charts_with_ratio, DEFAULT_NUMERIC_RATIO};
use crate::model::{
    DataSource, Dataset, ExtractedData, NumberPoint, NumbersDataset, TableDataset,
    VisualizationData,
};

/// Build datasets and chart suggestions with the default numeric threshold.
pub fn visualize(data: &ExtractedData) -> VisualizationData {
    visualize_with_ratio(data, DEFAULT_NUMERIC_RATIO)
}

/// Build datasets and chart suggestions.
///
/// Each table with data rows becomes a `table` dataset (`pdf_table_<n>`,
/// zero-based over all tables) and contributes its suggestions in table
/// order. When any numbers were found they form one trailing `numbers`
/// dataset.
pub fn visualize_with_ratio(data: &ExtractedData, ratio: f64) -> VisualizationData {
    let mut viz = VisualizationData::default();

    for (index, table) in data.tables.iter().enumerate() {
        if table.is_empty() {
            continue;
        }

        viz.datasets.push(Dataset::Table(TableDataset {
            id: format!("pdf_table_{}", index),
            name: format!("Table {}", index + 1),
            headers: table.headers.clone(),
            data: table.rows.clone(),
            source: DataSource::Pdf,
        }));
        viz.charts.extend(suggest_charts_with_ratio(table, ratio));
    }

    if !data.numbers.is_empty() {
        viz.datasets.push(Dataset::Numbers(NumbersDataset {
            id: "pdf_numbers".to_string(),
            name: "Extracted Numbers".to_string(),
            data: data
                .numbers
                .iter()
                .map(|n| NumberPoint {
                    value: n.value,
                    context: n.context.clone(),
                })
                .collect(),
            source: DataSource::Pdf,
        }));
    }

    log::debug!(
        "visualization: {} dataset(s), {} chart suggestion(s)",
        viz.datasets.len(),
        viz.charts.len()
    );
    viz
}
