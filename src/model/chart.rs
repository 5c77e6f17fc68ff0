//! Chart suggestion types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Chart kinds the suggestion engine can propose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Line,
    Scatter,
}

impl ChartType {
    /// All supported chart types.
    pub const ALL: [ChartType; 3] = [ChartType::Bar, ChartType::Line, ChartType::Scatter];

    /// Wire name of the chart type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Scatter => "scatter",
        }
    }

    /// Human-readable prefix used in suggestion titles.
    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Bar => "Bar Chart",
            ChartType::Line => "Line Chart",
            ChartType::Scatter => "Scatter Plot",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = Error;

    /// Parse a wire name. Unknown names are rejected rather than mapped to a
    /// fallback chart.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::UnsupportedChartType(s.to_string()))
    }
}

/// A proposed chart over one table: a chart type and an X/Y column pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSuggestion {
    #[serde(rename = "type")]
    pub chart_type: ChartType,

    /// e.g. `Bar Chart: Region vs Sales`
    pub title: String,

    /// Header of the X column
    pub x_axis: String,

    /// Header of the Y column
    pub y_axis: String,
}

impl ChartSuggestion {
    /// Build a suggestion, deriving the title from the type and axes.
    pub fn new(chart_type: ChartType, x_axis: impl Into<String>, y_axis: impl Into<String>) -> Self {
        let x_axis = x_axis.into();
        let y_axis = y_axis.into();
        Self {
            chart_type,
            title: format!("{}: {} vs {}", chart_type.label(), x_axis, y_axis),
            x_axis,
            y_axis,
        }
    }
}
