//! Scheduled priority updates

pub mod handler;
pub mod types;

pub use handler::PriorityUpdateHandler;
pub use types::{PriorityUpdate, ScheduledUpdate, UpdateSchedule};
