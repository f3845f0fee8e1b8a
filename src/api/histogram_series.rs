use tracing::trace;

use crate::core::{ChartSeries, HistogramBin, Table, coerce_number};
use crate::error::{ChartError, ChartResult};

/// Bins the x-axis column into `bin_count` equal-width buckets.
///
/// Rows whose x cell fails coercion are dropped. When `y_axis` is given the
/// row must also coerce on y to count; binning itself stays one-dimensional
/// over x (two-dimensional semantics are an unresolved extension point).
///
/// The last bin is closed on both ends: values equal to the maximum are
/// clamped into it, and its `range_high` is pinned to the exact maximum so
/// float rounding cannot leave the max outside the final bucket. When every
/// surviving value is identical a single zero-width bin holds all of them.
pub fn build_histogram_series(
    table: &Table,
    x_axis: &str,
    y_axis: Option<&str>,
    bin_count: usize,
) -> ChartResult<ChartSeries> {
    if bin_count == 0 {
        return Err(ChartError::InvalidConfig(
            "histogram bin count must be >= 1".to_owned(),
        ));
    }

    let values: Vec<f64> = table
        .rows()
        .iter()
        .filter_map(|row| {
            let x = row.get(x_axis).and_then(coerce_number)?;
            if let Some(y_axis) = y_axis {
                row.get(y_axis).and_then(coerce_number)?;
            }
            Some(x)
        })
        .collect();

    if values.is_empty() {
        return Err(ChartError::NoValidNumericData(x_axis.to_owned()));
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return Ok(ChartSeries::Bins {
            bins: vec![HistogramBin {
                range_low: min,
                range_high: min,
                count: values.len(),
            }],
        });
    }

    let width = (max - min) / bin_count as f64;
    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|index| HistogramBin {
            range_low: min + index as f64 * width,
            range_high: min + (index + 1) as f64 * width,
            count: 0,
        })
        .collect();
    bins[bin_count - 1].range_high = max;

    for value in &values {
        let index = (((value - min) / width).floor() as usize).min(bin_count - 1);
        bins[index].count += 1;
    }

    trace!(
        bins = bins.len(),
        values = values.len(),
        "built histogram series"
    );

    Ok(ChartSeries::Bins { bins })
}
