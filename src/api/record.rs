use serde::{Deserialize, Serialize};

use crate::core::{ChartRequest, ChartSeries};
use crate::error::{ChartError, ChartResult};

pub const CHART_RECORD_JSON_SCHEMA_V1: u32 = 1;

/// The persisted representation of a derived chart: the request fields plus
/// the derived payload, exactly as the storage schema expects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRecord {
    #[serde(flatten)]
    pub request: ChartRequest,
    pub data: ChartSeries,
}

impl ChartRecord {
    #[must_use]
    pub fn new(request: ChartRequest, data: ChartSeries) -> Self {
        Self { request, data }
    }
}

/// Versioned wrapper around [`ChartRecord`] for durable storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRecordJsonContractV1 {
    pub schema_version: u32,
    pub record: ChartRecord,
}

impl ChartRecord {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartRecordJsonContractV1 {
            schema_version: CHART_RECORD_JSON_SCHEMA_V1,
            record: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize chart record contract v1: {e}"))
        })
    }

    /// Parses either a bare record or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(record) = serde_json::from_str::<ChartRecord>(input) {
            return Ok(record);
        }
        let payload: ChartRecordJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::Serialization(format!("failed to parse chart record payload: {e}"))
        })?;
        if payload.schema_version != CHART_RECORD_JSON_SCHEMA_V1 {
            return Err(ChartError::Serialization(format!(
                "unsupported chart record schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.record)
    }
}
