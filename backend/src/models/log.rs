//! Scheduler log for auditing a simulation run.
//!
//! Every decision the scheduler makes is recorded as a [`LogEntry`]:
//! - **Processed**: an event was selected and processed
//! - **PriorityUpdated**: a candidate's priority changed
//! - **PriorityUpdateIgnored**: an update targeted an unknown or processed id
//! - **DuplicateDiscarded**: a repeated id was dropped at construction
//! - **Halted**: no ready candidate remained
//!
//! The log is diagnostic only. Ordering never depends on it.

use crate::models::event::EventId;
use serde::{Deserialize, Serialize};

/// A single scheduler decision, stamped with the step it happened at.
///
/// The step is the number of events processed before the decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogEntry {
    /// Event selected and processed
    Processed {
        step: usize,
        id: EventId,
        priority: i64,
        timestamp: i64,
        duration: u64,
    },

    /// Candidate priority changed
    PriorityUpdated {
        step: usize,
        id: EventId,
        old_priority: i64,
        new_priority: i64,
    },

    /// Priority update had no target among the candidates
    PriorityUpdateIgnored { step: usize, id: EventId },

    /// Later occurrence of an id already in the working set
    DuplicateDiscarded { id: EventId },

    /// Drive loop reached its fixed point
    Halted { step: usize, remaining: usize },
}

impl LogEntry {
    /// Step at which the entry was recorded (construction-time entries are step 0)
    pub fn step(&self) -> usize {
        match self {
            LogEntry::Processed { step, .. } => *step,
            LogEntry::PriorityUpdated { step, .. } => *step,
            LogEntry::PriorityUpdateIgnored { step, .. } => *step,
            LogEntry::DuplicateDiscarded { .. } => 0,
            LogEntry::Halted { step, .. } => *step,
        }
    }

    /// Get a short description of the entry type
    pub fn entry_type(&self) -> &'static str {
        match self {
            LogEntry::Processed { .. } => "Processed",
            LogEntry::PriorityUpdated { .. } => "PriorityUpdated",
            LogEntry::PriorityUpdateIgnored { .. } => "PriorityUpdateIgnored",
            LogEntry::DuplicateDiscarded { .. } => "DuplicateDiscarded",
            LogEntry::Halted { .. } => "Halted",
        }
    }

    /// Event the entry refers to, if any
    pub fn event_id(&self) -> Option<EventId> {
        match self {
            LogEntry::Processed { id, .. } => Some(*id),
            LogEntry::PriorityUpdated { id, .. } => Some(*id),
            LogEntry::PriorityUpdateIgnored { id, .. } => Some(*id),
            LogEntry::DuplicateDiscarded { id } => Some(*id),
            LogEntry::Halted { .. } => None,
        }
    }
}

/// Ordered record of scheduler decisions.
#[derive(Debug, Clone, Default)]
pub struct SchedulerLog {
    entries: Vec<LogEntry>,
}

impl SchedulerLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry
    pub fn log(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Get entries of a specific type
    pub fn entries_of_type(&self, entry_type: &str) -> Vec<&LogEntry> {
        self.entries
            .iter()
            .filter(|e| e.entry_type() == entry_type)
            .collect()
    }

    /// Get entries that refer to a specific event
    pub fn entries_for_event(&self, id: EventId) -> Vec<&LogEntry> {
        self.entries
            .iter()
            .filter(|e| e.event_id() == Some(id))
            .collect()
    }
}
