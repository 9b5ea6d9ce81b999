//! Readiness predicate
//!
//! An event is ready once every one of its dependencies has been processed.
//! A dependency on an id that is never processed (missing from the input,
//! part of a cycle, or the event itself) keeps the event blocked forever.

use crate::models::event::{Event, EventId};
use std::collections::HashSet;

/// Check whether all of `event`'s dependencies are in `processed`
pub fn is_ready(event: &Event, processed: &HashSet<EventId>) -> bool {
    event
        .dependencies()
        .iter()
        .all(|dep| processed.contains(dep))
}

/// Dependencies of `event` that are not yet processed
pub fn unmet_dependencies<'a>(
    event: &'a Event,
    processed: &'a HashSet<EventId>,
) -> impl Iterator<Item = EventId> + 'a {
    event
        .dependencies()
        .iter()
        .copied()
        .filter(move |dep| !processed.contains(dep))
}
