//! Event - the unit of work the scheduler orders
//!
//! An event carries its identity, its scheduling keys (priority, timestamp),
//! a processing cost, and the set of events that must be processed first.
//!
//! # Critical Invariants
//!
//! 1. **Unique IDs**: Event IDs are unique within a scheduler instance
//! 2. **Immutable keys**: Only `priority` changes after construction
//! 3. **Monotonic processing**: `processed` goes false → true exactly once
//!
//! # Example
//!
//! ```rust
//! use event_scheduler_core::Event;
//!
//! let event = Event::new(4, 2, 3, 2, vec![2, 3]);
//! assert_eq!(event.id(), 4);
//! assert!(event.depends_on(3));
//! assert!(!event.is_processed());
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Identifier of an event
pub type EventId = i64;

/// A discrete simulation event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier, stable for the event's lifetime
    id: EventId,

    /// Scheduling priority (higher value = more urgent)
    priority: i64,

    /// Earliest simulated time the event is meant for; a comparator key only
    timestamp: i64,

    /// Processing cost, recorded for output
    duration: u64,

    /// Events that must be processed before this one becomes eligible
    #[serde(default)]
    dependencies: BTreeSet<EventId>,

    /// Set once when the scheduler processes the event
    #[serde(default, skip_deserializing)]
    processed: bool,
}

impl Event {
    /// Create a new unprocessed event
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier
    /// * `priority` - Higher value = higher priority
    /// * `timestamp` - Tie-break key (earlier wins)
    /// * `duration` - Processing cost
    /// * `dependencies` - IDs that must be processed first (duplicates collapse)
    pub fn new(
        id: EventId,
        priority: i64,
        timestamp: i64,
        duration: u64,
        dependencies: impl IntoIterator<Item = EventId>,
    ) -> Self {
        Self {
            id,
            priority,
            timestamp,
            duration,
            dependencies: dependencies.into_iter().collect(),
            processed: false,
        }
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn priority(&self) -> i64 {
        self.priority
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn duration(&self) -> u64 {
        self.duration
    }

    pub fn dependencies(&self) -> &BTreeSet<EventId> {
        &self.dependencies
    }

    /// Check whether `other` is one of this event's dependencies
    pub fn depends_on(&self, other: EventId) -> bool {
        self.dependencies.contains(&other)
    }

    pub fn is_processed(&self) -> bool {
        self.processed
    }

    /// Replace the priority, returning the previous value
    pub(crate) fn set_priority(&mut self, priority: i64) -> i64 {
        std::mem::replace(&mut self.priority, priority)
    }

    /// Mark the event as processed. Never reverts.
    pub(crate) fn mark_processed(&mut self) {
        self.processed = true;
    }

    /// Reset the processed flag on an event handed to a new scheduler
    pub(crate) fn reset(mut self) -> Self {
        self.processed = false;
        self
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event ID: {}, Priority: {}, Timestamp: {}, Duration: {}",
            self.id, self.priority, self.timestamp, self.duration
        )
    }
}
