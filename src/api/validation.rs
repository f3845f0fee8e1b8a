use crate::core::{Axis, ChartRequest, ChartType};
use crate::error::{ChartError, ChartResult};

/// Validates a chart request against the table's column set.
///
/// Pure and side-effect free. Checks run in a fixed order: x axis presence
/// and membership, then y axis presence and membership for every type except
/// histogram, where y is optional but must exist when given. Chart-type
/// membership itself is enforced by the closed [`ChartType`] enumeration at
/// the string boundary.
pub fn validate_request(columns: &[String], request: &ChartRequest) -> ChartResult<()> {
    check_axis(columns, Axis::X, Some(request.x_axis.as_str()), true)?;

    let y_required = request.chart_type != ChartType::Histogram;
    check_axis(columns, Axis::Y, request.y_axis.as_deref(), y_required)?;

    Ok(())
}

fn check_axis(
    columns: &[String],
    axis: Axis,
    column: Option<&str>,
    required: bool,
) -> ChartResult<()> {
    match column {
        None | Some("") => {
            if required {
                return Err(ChartError::MissingAxis(axis));
            }
        }
        Some(name) => {
            if !columns.iter().any(|candidate| candidate == name) {
                return Err(ChartError::InvalidAxis {
                    axis,
                    column: name.to_owned(),
                });
            }
        }
    }
    Ok(())
}
