//! Event Scheduler CLI
//!
//! Runs a scenario file (or the built-in demo) and prints the order in which
//! events were processed.

use clap::{Parser, Subcommand};
use event_scheduler_core::{Orchestrator, RunReport, ScenarioConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "event-scheduler")]
#[command(about = "Dependency-aware event scheduler with dynamic priorities")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario from a JSON file
    Run {
        /// Path to the scenario JSON
        scenario: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Run the built-in five-event scenario
    Demo {
        #[command(flatten)]
        output: OutputArgs,

        /// Print the demo scenario JSON instead of running it
        #[arg(long)]
        print_scenario: bool,
    },
}

#[derive(clap::Args)]
struct OutputArgs {
    /// Print the full run report as JSON
    #[arg(long)]
    json: bool,

    /// List events that could never be processed
    #[arg(long)]
    show_blocked: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { scenario, output } => {
            info!(path = %scenario.display(), "Loading scenario");
            let config = ScenarioConfig::from_path(&scenario)?;
            run(config, &output)
        }
        Commands::Demo {
            output,
            print_scenario,
        } => {
            let config = ScenarioConfig::demo();
            if print_scenario {
                println!("{}", config.to_json_pretty()?);
                return Ok(());
            }
            run(config, &output)
        }
    }
}

fn run(config: ScenarioConfig, output: &OutputArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut orchestrator = Orchestrator::new(config)?;
    let report = orchestrator.run();

    if output.json {
        println!("{}", report.to_json_pretty()?);
    } else {
        print_report(&report, output.show_blocked);
    }
    Ok(())
}

fn print_report(report: &RunReport, show_blocked: bool) {
    println!("Processed Events Order:");
    for record in &report.processed {
        println!(
            "Event ID: {}, Priority: {}, Timestamp: {}, Duration: {}",
            record.id, record.priority, record.timestamp, record.duration
        );
    }

    if show_blocked && !report.blocked.is_empty() {
        println!("Blocked Events:");
        for blocked in &report.blocked {
            println!(
                "Event ID: {}, Missing: {:?}, Unresolved: {:?}",
                blocked.id, blocked.missing, blocked.unresolved
            );
        }
    }
}
