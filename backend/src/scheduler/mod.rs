//! Event scheduler
//!
//! - **ordering**: precedence among ready candidates
//! - **readiness**: dependency check
//! - **engine**: the drive loop

pub mod engine;
pub mod ordering;
pub mod readiness;

pub use engine::{BlockedEvent, EventScheduler, ExecutionSpan, StepOutcome};
pub use ordering::{goes_before, precedence};
pub use readiness::is_ready;
