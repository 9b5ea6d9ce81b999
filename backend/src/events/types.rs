//! Scheduled priority update types
//!
//! A priority update changes one event's priority at a chosen point of the
//! run. Updates are keyed by step: the number of events processed so far.
//! An update at step `n` is applied right before the `n`-th selection, so it
//! is visible to that selection.

use crate::models::event::EventId;
use serde::{Deserialize, Serialize};

/// A priority change for a single event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityUpdate {
    pub event_id: EventId,
    pub new_priority: i64,
}

/// When to apply a priority update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UpdateSchedule {
    /// Apply before the first selection
    #[default]
    BeforeRun,

    /// Apply right before the selection at this step
    AtStep { step: usize },
}

impl UpdateSchedule {
    /// Step at which the update applies
    pub fn step(&self) -> usize {
        match self {
            UpdateSchedule::BeforeRun => 0,
            UpdateSchedule::AtStep { step } => *step,
        }
    }
}

/// A priority update paired with its schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledUpdate {
    #[serde(flatten)]
    pub update: PriorityUpdate,
    #[serde(default)]
    pub schedule: UpdateSchedule,
}
