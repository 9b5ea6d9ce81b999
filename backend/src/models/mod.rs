//! Domain models for the event scheduler

pub mod event;
pub mod log;

// Re-exports
pub use event::{Event, EventId};
pub use log::{LogEntry, SchedulerLog};
