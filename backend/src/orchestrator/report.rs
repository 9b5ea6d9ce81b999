//! Run report - serializable outcome of a simulation
//!
//! # Critical Invariants
//!
//! - **Exact order**: `processed` lists events in processing order
//! - **Reproducibility**: `scenario_hash` identifies the input, so two reports
//!   with equal hashes must list the same order

use crate::models::event::{Event, EventId};
use crate::orchestrator::config::ScenarioError;
use crate::scheduler::{BlockedEvent, ExecutionSpan};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// One processed event, as it looked when selected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedRecord {
    pub step: usize,
    pub id: EventId,
    pub priority: i64,
    pub timestamp: i64,
    pub duration: u64,
    pub started_at: u64,
    pub finished_at: u64,
}

impl ProcessedRecord {
    pub fn new(step: usize, event: &Event, span: ExecutionSpan) -> Self {
        Self {
            step,
            id: event.id(),
            priority: event.priority(),
            timestamp: event.timestamp(),
            duration: event.duration(),
            started_at: span.started_at,
            finished_at: span.finished_at,
        }
    }
}

/// Outcome of a full run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// SHA256 of the canonical scenario JSON
    pub scenario_hash: String,

    /// Events in the input, duplicates included
    pub total_events: usize,

    pub processed: Vec<ProcessedRecord>,

    /// Events that never became ready
    pub blocked: Vec<BlockedEvent>,

    /// Serial time consumed by processed events
    pub elapsed: u64,
}

impl RunReport {
    /// Processed ids in order
    pub fn order(&self) -> Vec<EventId> {
        self.processed.iter().map(|r| r.id).collect()
    }

    pub fn to_json_pretty(&self) -> Result<String, ScenarioError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Compute a SHA256 hash of a serializable config
///
/// Object keys are sorted before hashing so the hash depends only on
/// content.
pub fn compute_config_hash<T: Serialize>(config: &T) -> Result<String, ScenarioError> {
    use serde_json::Value;
    use std::collections::BTreeMap;

    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> =
                    map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
                Value::Object(sorted.into_iter().collect())
            }
            Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
            other => other,
        }
    }

    let canonical = canonicalize(serde_json::to_value(config)?);
    let json = serde_json::to_string(&canonical)?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}
