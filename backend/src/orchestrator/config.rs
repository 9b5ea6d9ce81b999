//! Scenario configuration
//!
//! A scenario is the full input of a run: the initial event set and the
//! priority updates to apply along the way. Scenarios are JSON documents:
//!
//! ```json
//! {
//!   "events": [
//!     {"id": 1, "priority": 5, "timestamp": 0, "duration": 3, "dependencies": []},
//!     {"id": 2, "priority": 3, "timestamp": 1, "duration": 2, "dependencies": [1]}
//!   ],
//!   "priority_updates": [
//!     {"event_id": 2, "new_priority": 9, "schedule": {"step": 1}}
//!   ]
//! }
//! ```
//!
//! Loading only fails on unreadable files or malformed JSON. Duplicate ids,
//! unknown dependencies and cycles are scheduler policy, not config errors.

use crate::events::ScheduledUpdate;
use crate::models::event::Event;
use crate::scheduler::EventScheduler;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or hashing a scenario
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Scenario JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Complete input of a simulation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Initial event set, in input order
    #[serde(default)]
    pub events: Vec<Event>,

    /// Priority updates and when to apply them
    #[serde(default)]
    pub priority_updates: Vec<ScheduledUpdate>,
}

impl ScenarioConfig {
    /// Create a scenario with no priority updates
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events,
            priority_updates: Vec::new(),
        }
    }

    /// Parse a scenario from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a scenario from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String, ScenarioError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Five-event scenario with mixed priorities and dependencies
    ///
    /// Processes in the order `[1, 5, 3, 2, 4]`: event 4 waits for event 2.
    pub fn demo() -> Self {
        Self::new(vec![
            Event::new(1, 5, 0, 3, vec![]),
            Event::new(2, 3, 1, 2, vec![1]),
            Event::new(3, 4, 2, 1, vec![]),
            Event::new(4, 2, 3, 2, vec![2, 3]),
            Event::new(5, 5, 1, 1, vec![]),
        ])
    }

    /// Build a scheduler with this scenario's events and updates queued
    pub fn build_scheduler(&self) -> EventScheduler {
        EventScheduler::with_updates(
            self.events.iter().cloned(),
            self.priority_updates.iter().copied(),
        )
    }
}
