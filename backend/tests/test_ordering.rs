//! Tests for selection order among ready events
//!
//! Priority first, then earlier timestamp, then smaller id.

use event_scheduler_core::{Event, EventId, EventScheduler};

fn run(events: Vec<Event>) -> Vec<EventId> {
    let mut scheduler = EventScheduler::new(events);
    scheduler.run_simulation();
    scheduler.processed_events().iter().map(|e| e.id()).collect()
}

#[test]
fn test_mixed_priorities_and_dependencies() {
    let order = run(vec![
        Event::new(1, 5, 0, 3, vec![]),
        Event::new(2, 3, 1, 2, vec![1]),
        Event::new(3, 4, 2, 1, vec![]),
        Event::new(4, 2, 3, 2, vec![2, 3]),
        Event::new(5, 5, 1, 1, vec![]),
    ]);

    // 4 still waits on 2 after 3 is done
    assert_eq!(order, vec![1, 5, 3, 2, 4]);
}

#[test]
fn test_same_priority_and_timestamp_uses_id() {
    let order = run(vec![
        Event::new(1, 5, 0, 3, vec![]),
        Event::new(2, 5, 0, 2, vec![]),
        Event::new(3, 5, 0, 1, vec![]),
    ]);
    assert_eq!(order, vec![1, 2, 3]);
}

#[test]
fn test_same_priority_uses_timestamp() {
    let order = run(vec![
        Event::new(1, 5, 1, 1, vec![]),
        Event::new(2, 5, 0, 1, vec![]),
        Event::new(3, 5, 2, 1, vec![]),
    ]);
    assert_eq!(order, vec![2, 1, 3]);
}

#[test]
fn test_input_order_does_not_matter() {
    let forward = run(vec![
        Event::new(1, 5, 0, 1, vec![]),
        Event::new(2, 4, 1, 1, vec![]),
        Event::new(3, 3, 2, 1, vec![]),
    ]);
    let reversed = run(vec![
        Event::new(3, 3, 2, 1, vec![]),
        Event::new(2, 4, 1, 1, vec![]),
        Event::new(1, 5, 0, 1, vec![]),
    ]);
    assert_eq!(forward, vec![1, 2, 3]);
    assert_eq!(forward, reversed);
}

#[test]
fn test_timestamp_is_not_a_gate() {
    // A far-future timestamp does not delay a high-priority event
    let order = run(vec![
        Event::new(1, 1, 0, 1, vec![]),
        Event::new(2, 9, 1_000_000, 1, vec![]),
    ]);
    assert_eq!(order, vec![2, 1]);
}

#[test]
fn test_duration_does_not_affect_order() {
    let order = run(vec![
        Event::new(1, 5, 0, 100, vec![]),
        Event::new(2, 5, 0, 0, vec![]),
    ]);
    assert_eq!(order, vec![1, 2]);
}

#[test]
fn test_no_events() {
    let mut scheduler = EventScheduler::new(Vec::new());
    assert!(scheduler.processed_events().is_empty());
    scheduler.run_simulation();
    assert!(scheduler.processed_events().is_empty());
    assert!(scheduler.is_finished());
}

#[test]
fn test_processed_events_empty_before_run() {
    let scheduler = EventScheduler::new(vec![Event::new(1, 5, 0, 1, vec![])]);
    assert!(scheduler.processed_events().is_empty());
    assert_eq!(scheduler.pending_count(), 1);
}

#[test]
fn test_all_events_processed() {
    let order = run(vec![
        Event::new(1, 5, 0, 1, vec![]),
        Event::new(2, 4, 1, 1, vec![]),
        Event::new(3, 3, 2, 1, vec![]),
    ]);
    assert_eq!(order, vec![1, 2, 3]);
}

#[test]
fn test_second_run_is_noop() {
    let mut scheduler = EventScheduler::new(vec![
        Event::new(1, 5, 0, 1, vec![]),
        Event::new(2, 4, 0, 1, vec![]),
    ]);
    scheduler.run_simulation();
    scheduler.run_simulation();
    assert_eq!(scheduler.processed_events().len(), 2);
}
