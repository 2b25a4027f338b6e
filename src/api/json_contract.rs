use serde::{Deserialize, Serialize};

use crate::error::{GrapherError, GrapherResult};
use crate::render::Renderer;

use super::{GrapherEngine, GrapherSnapshot};

pub const GRAPHER_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrapherSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: GrapherSnapshot,
}

impl GrapherSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> GrapherResult<String> {
        let payload = GrapherSnapshotJsonContractV1 {
            schema_version: GRAPHER_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            GrapherError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Parses either a bare snapshot or a versioned v1 contract payload.
    pub fn from_json_compat_str(input: &str) -> GrapherResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<GrapherSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: GrapherSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            GrapherError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != GRAPHER_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(GrapherError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> GrapherEngine<R> {
    pub fn snapshot_json_pretty(&self) -> GrapherResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
