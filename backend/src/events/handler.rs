//! Priority update queueing
//!
//! Holds updates until the drive loop reaches their step. Updates scheduled
//! for the same step keep their insertion order.

use crate::events::types::{PriorityUpdate, ScheduledUpdate};
use std::collections::BTreeMap;

/// Queues priority updates by step
#[derive(Debug, Clone, Default)]
pub struct PriorityUpdateHandler {
    pending: BTreeMap<usize, Vec<PriorityUpdate>>,
}

impl PriorityUpdateHandler {
    /// Create a handler with the given scheduled updates
    pub fn new(updates: impl IntoIterator<Item = ScheduledUpdate>) -> Self {
        let mut handler = Self::default();
        for scheduled in updates {
            handler.schedule(scheduled.schedule.step(), scheduled.update);
        }
        handler
    }

    /// Queue an update for the given step
    pub fn schedule(&mut self, step: usize, update: PriorityUpdate) {
        self.pending.entry(step).or_default().push(update);
    }

    /// Get updates queued for a step without removing them
    pub fn updates_for_step(&self, step: usize) -> &[PriorityUpdate] {
        self.pending.get(&step).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Remove and return the updates due at `step`
    ///
    /// Updates queued for earlier steps that were never applied are
    /// returned too, ahead of the ones for `step`.
    pub fn take_due(&mut self, step: usize) -> Vec<PriorityUpdate> {
        let later = self.pending.split_off(&(step + 1));
        let due = std::mem::replace(&mut self.pending, later);
        due.into_values().flatten().collect()
    }

    /// Drop every queued update, returning how many were dropped
    pub fn discard_pending(&mut self) -> usize {
        let count = self.len();
        self.pending.clear();
        count
    }

    /// Number of queued updates
    pub fn len(&self) -> usize {
        self.pending.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
