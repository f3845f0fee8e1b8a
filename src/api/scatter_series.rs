use tracing::trace;

use crate::core::{ChartSeries, ScatterPoint, Table, coerce_number};
use crate::error::{ChartError, ChartResult};

/// Builds scatter points from rows where both axes coerce to numbers.
///
/// Rows failing either coercion are dropped silently; survivors keep the
/// table's original row order.
pub fn build_scatter_series(table: &Table, x_axis: &str, y_axis: &str) -> ChartResult<ChartSeries> {
    let points: Vec<ScatterPoint> = table
        .rows()
        .iter()
        .filter_map(|row| {
            let x = row.get(x_axis).and_then(coerce_number)?;
            let y = row.get(y_axis).and_then(coerce_number)?;
            Some(ScatterPoint::new(x, y))
        })
        .collect();

    if points.is_empty() {
        return Err(ChartError::NoValidPoints);
    }

    trace!(
        points = points.len(),
        dropped = table.row_count() - points.len(),
        "built scatter series"
    );

    Ok(ChartSeries::Points { points })
}
