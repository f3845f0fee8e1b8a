use serde::{Deserialize, Serialize};

/// A single surviving scatter row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

impl ScatterPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One contiguous histogram bucket over `[range_low, range_high)`.
///
/// The last bin of a series is closed on both ends so the maximum value has
/// a home.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramBin {
    pub range_low: f64,
    pub range_high: f64,
    pub count: usize,
}

impl HistogramBin {
    /// Human-readable bucket label, e.g. `"1.0 - 1.8"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:.1} - {:.1}", self.range_low, self.range_high)
    }
}

/// Derived, ready-to-render chart data: one variant per output shape.
///
/// Serialization is untagged so the payload is exactly what the storage
/// layer persists (a categories/values object, a points object, or a bins
/// object); the chart-type tag travels on the surrounding record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartSeries {
    /// Aggregated output for bar, line, area, and pie charts.
    Categories {
        categories: Vec<String>,
        values: Vec<f64>,
    },
    /// Scatter output in original row order.
    Points { points: Vec<ScatterPoint> },
    /// Histogram output, bins ordered low to high.
    Bins { bins: Vec<HistogramBin> },
}

impl ChartSeries {
    /// Number of rendered elements: categories, points, or bins.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            ChartSeries::Categories { categories, .. } => categories.len(),
            ChartSeries::Points { points } => points.len(),
            ChartSeries::Bins { bins } => bins.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
