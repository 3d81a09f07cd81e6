use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

use super::PlotSnapshot;

pub const PLOT_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// On-disk envelope for [`PlotSnapshot`]. Readers check `schema_version`
/// before trusting the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: PlotSnapshot,
}

impl PlotSnapshotJsonContractV1 {
    #[must_use]
    pub fn new(snapshot: PlotSnapshot) -> Self {
        Self {
            schema_version: PLOT_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot,
        }
    }
}

impl PlotSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> PlotResult<String> {
        Ok(serde_json::to_string_pretty(
            &PlotSnapshotJsonContractV1::new(self.clone()),
        )?)
    }

    /// Accepts an enveloped snapshot or a bare one.
    ///
    /// An object carrying `schema_version` is always read as an envelope, so
    /// a future schema is reported as such instead of as a field mismatch.
    pub fn from_json_compat_str(input: &str) -> PlotResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)?;
        let Some(version) = value.get("schema_version") else {
            return Ok(serde_json::from_value(value)?);
        };

        if version.as_u64() != Some(u64::from(PLOT_SNAPSHOT_JSON_SCHEMA_V1)) {
            return Err(PlotError::InvalidData(format!(
                "unsupported snapshot schema version: {version}"
            )));
        }
        let envelope: PlotSnapshotJsonContractV1 = serde_json::from_value(value)?;
        Ok(envelope.snapshot)
    }
}
