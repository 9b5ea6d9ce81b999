//! Orchestrator - scenario loading, execution and reporting
//!
//! See `engine.rs` for the run loop and `report.rs` for the output format.

pub mod config;
pub mod engine;
pub mod report;

pub use config::{ScenarioConfig, ScenarioError};
pub use engine::Orchestrator;
pub use report::{compute_config_hash, ProcessedRecord, RunReport};
