//! Event scheduler - the drive loop
//!
//! Owns the candidate set (events not yet processed) and the output sequence
//! (events already processed, in order). Each step:
//!
//! 1. Apply priority updates due at this step
//! 2. Scan the candidates for ready events
//! 3. None ready → halt (the remainder can never become ready)
//! 4. Otherwise process the maximum under [`precedence`]
//!
//! # Critical Invariants
//!
//! 1. **Termination**: every step processes one event or halts
//! 2. **Dependency soundness**: an event is processed only after all its dependencies
//! 3. **Fresh priorities**: updates are visible to the very next selection
//! 4. **Silent exclusion**: cycles, missing dependencies, duplicate ids and
//!    unknown update targets never raise errors; affected events are absent
//!    from the output
//!
//! Selection is a linear scan per step, O(n²) over a full run.

use crate::core::time::SimulationClock;
use crate::events::{PriorityUpdate, PriorityUpdateHandler, ScheduledUpdate};
use crate::models::event::{Event, EventId};
use crate::models::log::{LogEntry, SchedulerLog};
use crate::scheduler::ordering::precedence;
use crate::scheduler::readiness::{is_ready, unmet_dependencies};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Result of a single drive-loop step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The event with this id was processed
    Processed(EventId),
    /// No ready candidate remained; the run is over
    Halted,
}

/// Serial-timeline placement of a processed event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSpan {
    pub started_at: u64,
    pub finished_at: u64,
}

/// A candidate that can never become ready
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedEvent {
    pub id: EventId,
    /// Dependencies that name no event in the working set
    pub missing: Vec<EventId>,
    /// Dependencies that exist but were never processed
    pub unresolved: Vec<EventId>,
}

/// Dependency-aware, mutable-priority event scheduler
///
/// # Example
///
/// ```rust
/// use event_scheduler_core::{Event, EventScheduler};
///
/// let mut scheduler = EventScheduler::new(vec![
///     Event::new(1, 2, 0, 1, vec![]),
///     Event::new(2, 2, 1, 1, vec![]),
///     Event::new(3, 2, 2, 1, vec![]),
/// ]);
/// scheduler.update_event_priority(2, 5);
/// scheduler.update_event_priority(3, 4);
/// scheduler.run_simulation();
///
/// let order: Vec<i64> = scheduler.processed_events().iter().map(|e| e.id()).collect();
/// assert_eq!(order, vec![2, 3, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct EventScheduler {
    /// Events not yet processed
    candidates: Vec<Event>,

    /// Processed events in processing order
    processed: Vec<Event>,

    /// Serial-timeline span for each entry of `processed`
    spans: Vec<ExecutionSpan>,

    /// Ids of processed events, for readiness checks
    processed_ids: HashSet<EventId>,

    /// Every id in the working set
    known_ids: HashSet<EventId>,

    /// Priority updates waiting for their step
    updates: PriorityUpdateHandler,

    clock: SimulationClock,
    log: SchedulerLog,
    halted: bool,
}

impl EventScheduler {
    /// Create a scheduler owning the given events
    ///
    /// The first occurrence of each id is kept. Later duplicates are
    /// discarded and never processed.
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        let mut log = SchedulerLog::new();
        let mut known_ids = HashSet::new();
        let mut candidates = Vec::new();

        for event in events {
            if !known_ids.insert(event.id()) {
                warn!(id = event.id(), "Discarding event with duplicate id");
                log.log(LogEntry::DuplicateDiscarded { id: event.id() });
                continue;
            }
            candidates.push(event.reset());
        }

        debug!(events = candidates.len(), "Scheduler created");

        Self {
            candidates,
            processed: Vec::new(),
            spans: Vec::new(),
            processed_ids: HashSet::new(),
            known_ids,
            updates: PriorityUpdateHandler::default(),
            clock: SimulationClock::new(),
            log,
            halted: false,
        }
    }

    /// Create a scheduler and queue the given priority updates
    pub fn with_updates(
        events: impl IntoIterator<Item = Event>,
        updates: impl IntoIterator<Item = ScheduledUpdate>,
    ) -> Self {
        let mut scheduler = Self::new(events);
        scheduler.updates = PriorityUpdateHandler::new(updates);
        scheduler
    }

    /// Set the priority of a not-yet-processed event
    ///
    /// Unknown and already-processed ids are a silent no-op.
    pub fn update_event_priority(&mut self, event_id: EventId, new_priority: i64) {
        self.apply_update(PriorityUpdate {
            event_id,
            new_priority,
        });
    }

    /// Queue a priority update for the selection at `step`
    ///
    /// `step` counts processed events, so step 0 is before the first
    /// selection. A step already passed applies at the next selection.
    /// Updates for steps the run never reaches are dropped when it halts.
    pub fn schedule_priority_update(&mut self, step: usize, event_id: EventId, new_priority: i64) {
        if self.halted {
            debug!(id = event_id, step, "Scheduler halted; update dropped");
            self.log.log(LogEntry::PriorityUpdateIgnored {
                step: self.clock.current_step(),
                id: event_id,
            });
            return;
        }
        self.updates.schedule(
            step,
            PriorityUpdate {
                event_id,
                new_priority,
            },
        );
    }

    /// Run one iteration of the drive loop
    pub fn step(&mut self) -> StepOutcome {
        if self.halted {
            return StepOutcome::Halted;
        }

        let step = self.clock.current_step();
        for update in self.updates.take_due(step) {
            self.apply_update(update);
        }

        let processed_ids = &self.processed_ids;
        let next = self
            .candidates
            .iter()
            .enumerate()
            .filter(|(_, event)| is_ready(event, processed_ids))
            .max_by(|(_, a), (_, b)| precedence(a, b))
            .map(|(index, _)| index);

        let Some(index) = next else {
            self.halt(step);
            return StepOutcome::Halted;
        };

        let mut event = self.candidates.swap_remove(index);
        event.mark_processed();
        let (started_at, finished_at) = self.clock.advance(event.duration());

        debug!(
            step,
            id = event.id(),
            priority = event.priority(),
            timestamp = event.timestamp(),
            duration = event.duration(),
            "Processed event"
        );
        self.log.log(LogEntry::Processed {
            step,
            id: event.id(),
            priority: event.priority(),
            timestamp: event.timestamp(),
            duration: event.duration(),
        });

        let id = event.id();
        self.processed_ids.insert(id);
        self.spans.push(ExecutionSpan {
            started_at,
            finished_at,
        });
        self.processed.push(event);
        StepOutcome::Processed(id)
    }

    /// Run the drive loop to its fixed point
    pub fn run_simulation(&mut self) {
        while let StepOutcome::Processed(_) = self.step() {}
    }

    /// Processed events, in the exact order they were processed
    pub fn processed_events(&self) -> &[Event] {
        &self.processed
    }

    /// Serial-timeline spans, parallel to [`Self::processed_events`]
    pub fn spans(&self) -> &[ExecutionSpan] {
        &self.spans
    }

    /// Candidates still waiting, with the dependencies holding them back
    ///
    /// Sorted by id. After a halt these are exactly the events that can
    /// never be processed.
    pub fn blocked_events(&self) -> Vec<BlockedEvent> {
        let mut blocked: Vec<BlockedEvent> = self
            .candidates
            .iter()
            .map(|event| {
                let (unresolved, missing) = unmet_dependencies(event, &self.processed_ids)
                    .partition(|dep| self.known_ids.contains(dep));
                BlockedEvent {
                    id: event.id(),
                    missing,
                    unresolved,
                }
            })
            .collect();
        blocked.sort_by_key(|b| b.id);
        blocked
    }

    /// Number of events not yet processed
    pub fn pending_count(&self) -> usize {
        self.candidates.len()
    }

    /// Check whether the drive loop has halted
    pub fn is_finished(&self) -> bool {
        self.halted
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn log(&self) -> &SchedulerLog {
        &self.log
    }

    fn apply_update(&mut self, update: PriorityUpdate) {
        let step = self.clock.current_step();
        match self
            .candidates
            .iter_mut()
            .find(|event| event.id() == update.event_id)
        {
            Some(event) => {
                let old_priority = event.set_priority(update.new_priority);
                debug!(
                    step,
                    id = update.event_id,
                    old_priority,
                    new_priority = update.new_priority,
                    "Priority updated"
                );
                self.log.log(LogEntry::PriorityUpdated {
                    step,
                    id: update.event_id,
                    old_priority,
                    new_priority: update.new_priority,
                });
            }
            None => {
                debug!(step, id = update.event_id, "No pending event for priority update");
                self.log.log(LogEntry::PriorityUpdateIgnored {
                    step,
                    id: update.event_id,
                });
            }
        }
    }

    fn halt(&mut self, step: usize) {
        self.halted = true;
        let dropped = self.updates.discard_pending();
        info!(
            processed = self.processed.len(),
            remaining = self.candidates.len(),
            dropped_updates = dropped,
            "Simulation halted"
        );
        self.log.log(LogEntry::Halted {
            step,
            remaining: self.candidates.len(),
        });
    }
}
