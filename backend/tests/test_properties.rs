//! Property tests for the drive loop
//!
//! Random event sets (including cycles, self-dependencies and unknown ids)
//! are checked against the ordering and dependency invariants.

use event_scheduler_core::{goes_before, Event, EventId, EventScheduler};
use proptest::prelude::*;
use std::collections::HashSet;

/// Events with ids 0..n; dependencies may point anywhere in 0..n+2
fn arbitrary_events() -> impl Strategy<Value = Vec<Event>> {
    (0usize..12).prop_flat_map(|n| {
        let max_id = n as i64 + 2;
        proptest::collection::vec(
            (
                -5i64..5,
                0i64..5,
                0u64..5,
                proptest::collection::vec(0..max_id, 0..3),
            ),
            n,
        )
        .prop_map(|specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(id, (priority, timestamp, duration, deps))| {
                    Event::new(id as i64, priority, timestamp, duration, deps)
                })
                .collect()
        })
    })
}

/// Events whose dependencies only point to smaller ids
fn acyclic_events() -> impl Strategy<Value = Vec<Event>> {
    arbitrary_events().prop_map(|events| {
        events
            .into_iter()
            .map(|e| {
                let deps: Vec<EventId> = e
                    .dependencies()
                    .iter()
                    .copied()
                    .filter(|dep| *dep < e.id())
                    .collect();
                Event::new(e.id(), e.priority(), e.timestamp(), e.duration(), deps)
            })
            .collect()
    })
}

fn run(events: &[Event]) -> EventScheduler {
    let mut scheduler = EventScheduler::new(events.to_vec());
    scheduler.run_simulation();
    scheduler
}

proptest! {
    #[test]
    fn prop_dependencies_processed_first(events in arbitrary_events()) {
        let scheduler = run(&events);
        let mut seen = HashSet::new();
        for event in scheduler.processed_events() {
            for dep in event.dependencies() {
                prop_assert!(seen.contains(dep), "{} ran before dependency {}", event.id(), dep);
            }
            prop_assert!(seen.insert(event.id()), "{} processed twice", event.id());
        }
    }

    #[test]
    fn prop_each_selection_is_maximal_among_ready(events in arbitrary_events()) {
        let scheduler = run(&events);
        let mut done: HashSet<EventId> = HashSet::new();
        for selected in scheduler.processed_events() {
            for other in &events {
                let ready = other.dependencies().iter().all(|d| done.contains(d));
                if other.id() != selected.id() && !done.contains(&other.id()) && ready {
                    prop_assert!(
                        goes_before(selected, other),
                        "{} selected over ready {}",
                        selected.id(),
                        other.id()
                    );
                }
            }
            done.insert(selected.id());
        }
    }

    #[test]
    fn prop_processed_and_blocked_partition_input(events in arbitrary_events()) {
        let scheduler = run(&events);
        let mut ids: Vec<EventId> = scheduler.processed_events().iter().map(|e| e.id()).collect();
        ids.extend(scheduler.blocked_events().iter().map(|b| b.id));
        ids.sort_unstable();
        let expected: Vec<EventId> = events.iter().map(|e| e.id()).collect();
        prop_assert_eq!(ids, expected);
        prop_assert!(scheduler.processed_events().iter().all(|e| e.is_processed()));
    }

    #[test]
    fn prop_acyclic_input_processes_everything(events in acyclic_events()) {
        let scheduler = run(&events);
        prop_assert_eq!(scheduler.processed_events().len(), events.len());
        prop_assert!(scheduler.blocked_events().is_empty());
    }

    #[test]
    fn prop_runs_are_deterministic(events in arbitrary_events()) {
        let first = run(&events);
        let second = run(&events);
        prop_assert_eq!(first.processed_events(), second.processed_events());
    }
}
