//! Orchestrator - runs a scenario end to end
//!
//! Builds the scheduler from a [`ScenarioConfig`], queues the scenario's
//! priority updates, drives the simulation to its fixed point and collects a
//! [`RunReport`].

use crate::orchestrator::config::{ScenarioConfig, ScenarioError};
use crate::orchestrator::report::{compute_config_hash, ProcessedRecord, RunReport};
use crate::scheduler::EventScheduler;
use tracing::info;

/// Scenario runner
#[derive(Debug, Clone)]
pub struct Orchestrator {
    scheduler: EventScheduler,
    scenario_hash: String,
    total_events: usize,
}

impl Orchestrator {
    /// Create an orchestrator for the given scenario
    pub fn new(config: ScenarioConfig) -> Result<Self, ScenarioError> {
        let scenario_hash = compute_config_hash(&config)?;
        info!(
            events = config.events.len(),
            priority_updates = config.priority_updates.len(),
            scenario_hash = %scenario_hash,
            "Loaded scenario"
        );

        Ok(Self {
            scheduler: config.build_scheduler(),
            scenario_hash,
            total_events: config.events.len(),
        })
    }

    /// Run the simulation to completion and report the outcome
    pub fn run(&mut self) -> RunReport {
        self.scheduler.run_simulation();
        self.report()
    }

    /// Report the current state of the run
    pub fn report(&self) -> RunReport {
        let processed = self
            .scheduler
            .processed_events()
            .iter()
            .zip(self.scheduler.spans())
            .enumerate()
            .map(|(step, (event, span))| ProcessedRecord::new(step, event, *span))
            .collect();

        RunReport {
            scenario_hash: self.scenario_hash.clone(),
            total_events: self.total_events,
            processed,
            blocked: self.scheduler.blocked_events(),
            elapsed: self.scheduler.clock().elapsed(),
        }
    }

    pub fn scheduler(&self) -> &EventScheduler {
        &self.scheduler
    }

    /// Mutable access for interleaving updates with manual steps
    pub fn scheduler_mut(&mut self) -> &mut EventScheduler {
        &mut self.scheduler
    }

    pub fn scenario_hash(&self) -> &str {
        &self.scenario_hash
    }
}
