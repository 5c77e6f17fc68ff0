//! Chart suggestions over recovered tables.
//!
//! Columns are split into numeric and text columns by how many of their
//! cells parse as numbers, then fixed rules turn that partition into
//! chart-type and axis proposals.

mod numeric;

pub use numeric::parse_leading_float;

use crate::model::{ChartSuggestion, ChartType, Table};

/// Default share of parseable cells for a numeric column.
pub const DEFAULT_NUMERIC_RATIO: f64 = 0.7;

/// Inferred type of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Text,
}

/// A column's header and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column<'a> {
    pub index: usize,
    pub header: &'a str,
}

/// Columns of a table split by kind, each side in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnPartition<'a> {
    pub numeric: Vec<Column<'a>>,
    pub text: Vec<Column<'a>>,
}

/// Classify one column's non-empty cells.
///
/// A column is numeric when it has at least one value and at least `ratio`
/// of its values parse with [`parse_leading_float`].
pub fn column_kind(values: &[&str], ratio: f64) -> ColumnKind {
    if values.is_empty() {
        return ColumnKind::Text;
    }

    let parsed = values
        .iter()
        .filter(|v| parse_leading_float(v).is_some())
        .count();

    if parsed as f64 / values.len() as f64 >= ratio {
        ColumnKind::Numeric
    } else {
        ColumnKind::Text
    }
}

/// Partition the columns of `table` by kind.
pub fn partition_columns(table: &Table, ratio: f64) -> ColumnPartition<'_> {
    let mut partition = ColumnPartition::default();

    for (index, header) in table.headers.iter().enumerate() {
        let column = Column {
            index,
            header: header.as_str(),
        };
        match column_kind(&table.column_values(index), ratio) {
            ColumnKind::Numeric => partition.numeric.push(column),
            ColumnKind::Text => partition.text.push(column),
        }
    }

    partition
}

/// Suggest charts for a table using the default numeric threshold.
pub fn suggest_charts(table: &Table) -> Vec<ChartSuggestion> {
    suggest_charts_with_ratio(table, DEFAULT_NUMERIC_RATIO)
}

/// Suggest charts for a table.
///
/// - a text and a numeric column: `bar` and `line` over the first of each
/// - two numeric columns: `scatter` over the first two
///
/// Both rules may fire. Tables without data rows get no suggestions.
pub fn suggest_charts_with_ratio(table: &Table, ratio: f64) -> Vec<ChartSuggestion> {
    let mut suggestions = Vec::new();
    if table.is_empty() {
        return suggestions;
    }

    let columns = partition_columns(table, ratio);

    if let (Some(x), Some(y)) = (columns.text.first(), columns.numeric.first()) {
        suggestions.push(ChartSuggestion::new(ChartType::Bar, x.header, y.header));
        suggestions.push(ChartSuggestion::new(ChartType::Line, x.header, y.header));
    }

    if let [x, y, ..] = columns.numeric.as_slice() {
        suggestions.push(ChartSuggestion::new(ChartType::Scatter, x.header, y.header));
    }

    log::trace!("{}: {} chart suggestion(s)", table.id, suggestions.len());
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table::new(
            1,
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_region_sales_gets_bar_and_line() {
        let t = table(
            &["Region", "Sales"],
            &[
                &["North", "120"],
                &["South", "95"],
                &["East", "130"],
                &["West", "88"],
                &["Central", "101"],
            ],
        );

        let charts = suggest_charts(&t);
        assert_eq!(charts.len(), 2);
        assert_eq!(charts[0].chart_type, ChartType::Bar);
        assert_eq!(charts[1].chart_type, ChartType::Line);
        for chart in &charts {
            assert_eq!(chart.x_axis, "Region");
            assert_eq!(chart.y_axis, "Sales");
        }
        assert_eq!(charts[0].title, "Bar Chart: Region vs Sales");
        assert_eq!(charts[1].title, "Line Chart: Region vs Sales");
    }

    #[test]
    fn test_numeric_only_table_gets_scatter_alone() {
        let t = table(&["X", "Y"], &[&["1", "2"], &["3", "4"], &["5", "6"]]);

        let charts = suggest_charts(&t);
        assert_eq!(charts, vec![ChartSuggestion::new(ChartType::Scatter, "X", "Y")]);
    }

    #[test]
    fn test_text_and_two_numeric_columns_get_three() {
        let t = table(
            &["Region", "X", "Y"],
            &[&["North", "1", "2"], &["South", "3", "4"]],
        );

        let types: Vec<ChartType> = suggest_charts(&t).iter().map(|c| c.chart_type).collect();
        assert_eq!(types, vec![ChartType::Bar, ChartType::Line, ChartType::Scatter]);
    }

    #[test]
    fn test_text_only_table_gets_nothing() {
        let t = table(&["Name", "City"], &[&["Ann", "Oslo"], &["Bo", "Rome"]]);
        assert!(suggest_charts(&t).is_empty());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // 7 of 10 cells parse: exactly 70%.
        let values = ["1", "2", "3", "4", "5", "6", "7", "a", "b", "c"];
        assert_eq!(column_kind(&values, 0.7), ColumnKind::Numeric);
        assert_eq!(column_kind(&values[..9], 0.7), ColumnKind::Numeric);
        assert_eq!(column_kind(&values[3..], 0.7), ColumnKind::Text);
    }

    #[test]
    fn test_loose_parse_counts_mixed_cells() {
        let t = table(
            &["Item", "Weight"],
            &[&["Box", "12kg"], &["Crate", "30kg"], &["Bag", "4kg"]],
        );
        let columns = partition_columns(&t, DEFAULT_NUMERIC_RATIO);
        assert_eq!(columns.numeric, vec![Column { index: 1, header: "Weight" }]);
        assert_eq!(columns.text, vec![Column { index: 0, header: "Item" }]);
    }

    #[test]
    fn test_empty_column_is_text() {
        let t = table(&["A", "B", "C"], &[&["x", "1"], &["y", "2"]]);
        let columns = partition_columns(&t, DEFAULT_NUMERIC_RATIO);
        assert_eq!(columns.text.len(), 2);
        assert_eq!(columns.text[1].header, "C");
    }

    #[test]
    fn test_table_without_rows() {
        let t = table(&["Region", "Sales"], &[]);
        assert!(suggest_charts(&t).is_empty());
    }
}
