//! Event Scheduler Core - Rust Engine
//!
//! Dependency-aware event scheduler with mutable priorities and
//! deterministic execution.
//!
//! # Architecture
//!
//! - **core**: Serial simulation clock
//! - **models**: Domain types (Event, SchedulerLog)
//! - **scheduler**: Ordering relation, readiness check, drive loop
//! - **events**: Priority updates scheduled by step
//! - **orchestrator**: Scenario loading, execution and reporting
//!
//! # Critical Invariants
//!
//! 1. Ready events are processed by (priority desc, timestamp asc, id asc)
//! 2. No event is processed before its dependencies
//! 3. Unresolvable events are silently excluded, never an error

// Module declarations
pub mod core;
pub mod events;
pub mod models;
pub mod orchestrator;
pub mod scheduler;

// Re-exports for convenience
pub use crate::core::time::SimulationClock;
pub use events::{PriorityUpdate, PriorityUpdateHandler, ScheduledUpdate, UpdateSchedule};
pub use models::{
    event::{Event, EventId},
    log::{LogEntry, SchedulerLog},
};
pub use orchestrator::{
    compute_config_hash, Orchestrator, ProcessedRecord, RunReport, ScenarioConfig, ScenarioError,
};
pub use scheduler::{
    goes_before, is_ready, precedence, BlockedEvent, EventScheduler, ExecutionSpan, StepOutcome,
};
