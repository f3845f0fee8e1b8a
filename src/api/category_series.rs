use indexmap::IndexMap;
use tracing::trace;

use crate::core::{ChartSeries, Table, coerce_number};
use crate::error::{ChartError, ChartResult};

/// Aggregated builder shared by bar, line, pie, and area charts.
///
/// Categories are the distinct non-empty x values in first-occurrence order.
/// Each category's value is the sum of coerced y cells over its rows; a cell
/// that fails coercion contributes 0 rather than disqualifying the row. This
/// zero-fill deliberately differs from the scatter/histogram row-drop rule.
pub fn build_category_series(table: &Table, x_axis: &str, y_axis: &str) -> ChartResult<ChartSeries> {
    let mut sums: IndexMap<String, f64> = IndexMap::new();

    for row in table.rows() {
        let Some(label) = row.get(x_axis).and_then(|cell| cell.label()) else {
            continue;
        };
        let contribution = row.get(y_axis).and_then(coerce_number).unwrap_or(0.0);
        *sums.entry(label).or_insert(0.0) += contribution;
    }

    if sums.is_empty() {
        return Err(ChartError::NoValidXValues(x_axis.to_owned()));
    }

    let (categories, values): (Vec<String>, Vec<f64>) = sums.into_iter().unzip();

    if categories.is_empty() {
        return Err(ChartError::EmptySeries);
    }

    trace!(
        categories = categories.len(),
        "aggregated categorical series"
    );

    Ok(ChartSeries::Categories { categories, values })
}
