mod category_series;
mod histogram_series;
mod record;
mod scatter_series;
mod validation;

pub use category_series::build_category_series;
pub use histogram_series::build_histogram_series;
pub use record::{CHART_RECORD_JSON_SCHEMA_V1, ChartRecord, ChartRecordJsonContractV1};
pub use scatter_series::build_scatter_series;
pub use validation::validate_request;

use tracing::debug;

use crate::core::{Axis, ChartRequest, ChartSeries, ChartType, Table};
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_HISTOGRAM_BIN_COUNT: usize = 10;

/// Tuning knobs for chart derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivationConfig {
    pub histogram_bin_count: usize,
}

impl Default for DerivationConfig {
    fn default() -> Self {
        Self {
            histogram_bin_count: DEFAULT_HISTOGRAM_BIN_COUNT,
        }
    }
}

impl DerivationConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_histogram_bin_count(mut self, bin_count: usize) -> Self {
        self.histogram_bin_count = bin_count;
        self
    }
}

/// Stateless derivation engine over read-only tables.
///
/// Holds only configuration; every call allocates its own output, so one
/// engine may serve concurrent derivations without coordination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartEngine {
    config: DerivationConfig,
}

impl ChartEngine {
    pub fn new(config: DerivationConfig) -> ChartResult<Self> {
        if config.histogram_bin_count == 0 {
            return Err(ChartError::InvalidConfig(
                "histogram bin count must be >= 1".to_owned(),
            ));
        }
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> DerivationConfig {
        self.config
    }

    /// Derives one chart series, or the first validation/derivation error.
    pub fn derive(&self, table: &Table, request: &ChartRequest) -> ChartResult<ChartSeries> {
        validate_request(table.columns(), request)?;

        debug!(
            chart_type = %request.chart_type,
            x_axis = %request.x_axis,
            rows = table.row_count(),
            "deriving chart series"
        );

        // Validation guarantees a y axis for every non-histogram type.
        let required_y = || {
            request
                .y_axis
                .as_deref()
                .ok_or(ChartError::MissingAxis(Axis::Y))
        };

        match request.chart_type {
            ChartType::Bar | ChartType::Line | ChartType::Pie | ChartType::Area => {
                build_category_series(table, &request.x_axis, required_y()?)
            }
            ChartType::Scatter => build_scatter_series(table, &request.x_axis, required_y()?),
            ChartType::Histogram => build_histogram_series(
                table,
                &request.x_axis,
                request.y_axis.as_deref(),
                self.config.histogram_bin_count,
            ),
        }
    }

    /// Derives one chart and packages it in the persisted record shape.
    pub fn derive_record(&self, table: &Table, request: &ChartRequest) -> ChartResult<ChartRecord> {
        let series = self.derive(table, request)?;
        Ok(ChartRecord::new(request.clone(), series))
    }

    /// Derives many charts over one shared table.
    ///
    /// Each request succeeds or fails independently; results keep request
    /// order. Runs in parallel with the `parallel-derivation` feature.
    #[cfg(feature = "parallel-derivation")]
    pub fn derive_all(
        &self,
        table: &Table,
        requests: &[ChartRequest],
    ) -> Vec<ChartResult<ChartSeries>> {
        use rayon::prelude::*;

        requests
            .par_iter()
            .map(|request| self.derive(table, request))
            .collect()
    }

    #[cfg(not(feature = "parallel-derivation"))]
    pub fn derive_all(
        &self,
        table: &Table,
        requests: &[ChartRequest],
    ) -> Vec<ChartResult<ChartSeries>> {
        requests
            .iter()
            .map(|request| self.derive(table, request))
            .collect()
    }
}

impl Default for ChartEngine {
    fn default() -> Self {
        Self {
            config: DerivationConfig::default(),
        }
    }
}
