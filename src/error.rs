use thiserror::Error;

use crate::core::Axis;

pub type ChartResult<T> = Result<T, ChartError>;

/// Terminal, non-retryable derivation errors.
///
/// Every variant is scoped to a single derivation call and leaves the input
/// table untouched; callers decide user-facing messaging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("unknown chart type `{0}`")]
    InvalidChartType(String),

    #[error("missing required {0} axis")]
    MissingAxis(Axis),

    #[error("{axis} axis column `{column}` does not exist in the table")]
    InvalidAxis { axis: Axis, column: String },

    #[error("column `{0}` has no non-empty x values to group by")]
    NoValidXValues(String),

    #[error("no rows with numeric values on both scatter axes")]
    NoValidPoints,

    #[error("column `{0}` contains no valid numeric data")]
    NoValidNumericData(String),

    #[error("aggregation produced an empty series")]
    EmptySeries,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}
