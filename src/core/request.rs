use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Closed enumeration of supported chart types.
///
/// The set is fixed at compile time; anything else is rejected at the string
/// boundary by [`ChartType::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Line,
    Pie,
    Scatter,
    Area,
    Histogram,
}

impl ChartType {
    pub const ALL: [ChartType; 6] = [
        ChartType::Bar,
        ChartType::Line,
        ChartType::Pie,
        ChartType::Scatter,
        ChartType::Area,
        ChartType::Histogram,
    ];

    /// Parses a chart-type string as received from an external caller.
    pub fn parse(input: &str) -> ChartResult<Self> {
        match input {
            "bar" => Ok(ChartType::Bar),
            "line" => Ok(ChartType::Line),
            "pie" => Ok(ChartType::Pie),
            "scatter" => Ok(ChartType::Scatter),
            "area" => Ok(ChartType::Area),
            "histogram" => Ok(ChartType::Histogram),
            other => Err(ChartError::InvalidChartType(other.to_owned())),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Pie => "pie",
            ChartType::Scatter => "scatter",
            ChartType::Area => "area",
            ChartType::Histogram => "histogram",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Axis identifier used in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// A user-specified derivation intent: chart type plus axis column names.
///
/// Field names mirror the persisted storage schema. `name` is a display
/// label only and never influences the derived data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    #[serde(rename = "xAxis")]
    pub x_axis: String,
    #[serde(rename = "yAxis", default, skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<String>,
    pub name: String,
}

impl ChartRequest {
    #[must_use]
    pub fn new(
        chart_type: ChartType,
        x_axis: impl Into<String>,
        y_axis: Option<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            chart_type,
            x_axis: x_axis.into(),
            y_axis,
            name: name.into(),
        }
    }

    /// Builds a request from untyped parts, rejecting unknown chart types.
    pub fn from_parts(
        chart_type: &str,
        x_axis: impl Into<String>,
        y_axis: Option<String>,
        name: impl Into<String>,
    ) -> ChartResult<Self> {
        Ok(Self::new(ChartType::parse(chart_type)?, x_axis, y_axis, name))
    }
}
