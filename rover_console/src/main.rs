//! # Rover Console
//!
//! Scenario player for the rover supervisory state machine. Loads a
//! scenario TOML (initial conditions + timed condition patches), then
//! drives the polling loop the way a deployment would: once per cycle
//! it renders the current state, applies any patches due this cycle,
//! and evaluates the transition with the fresh snapshot.
//!
//! All supervisory logic lives in `rover_supervisor`; this binary only
//! supplies snapshots and consumes state/diagnostic strings.

use clap::Parser;
use rover_common::config::load_scenario;
use rover_common::state::SupervisorState;
use rover_supervisor::diagnostics::{describe, fault_report};
use rover_supervisor::fsm::Supervisor;
use std::path::PathBuf;
use std::process;
use tracing::{Level, debug, error, info, warn};
use tracing_subscriber::EnvFilter;

/// Rover Console — supervisory scenario player
#[derive(Parser, Debug)]
#[command(name = "rover_console")]
#[command(author = "RTS007")]
#[command(version)]
#[command(about = "Replays condition scenarios through the rover supervisor")]
struct Args {
    /// Path to the scenario TOML.
    #[arg(default_value = "config/demo.toml")]
    scenario: PathBuf,

    /// Override the scenario's cycle count.
    #[arg(long)]
    cycles: Option<usize>,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format.
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    setup_tracing(&args);

    info!("Rover Console v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&args) {
        error!("FATAL: {e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut scenario = load_scenario(&args.scenario)?;
    if let Some(cycles) = args.cycles {
        scenario.cycles = cycles;
        scenario.validate()?;
    }
    info!(
        "Scenario OK: {} cycles, {} steps ({})",
        scenario.cycles,
        scenario.steps.len(),
        args.scenario.display()
    );

    // Explicit state threading: this loop owns the state and the
    // snapshot, the supervisor never retains either.
    let mut supervisor = Supervisor::new();
    let mut conditions = scenario.initial;

    for cycle in 0..scenario.cycles {
        let state = supervisor.state();
        info!("cycle {cycle:2}: {}", describe(state, &conditions));

        if state == SupervisorState::Safe {
            for entry in fault_report(state, &conditions) {
                warn!(
                    "  {:<14} {}",
                    entry.label,
                    if entry.ok { "ok" } else { "FAULT" }
                );
            }
        }

        for step in scenario.steps.iter().filter(|s| s.at == cycle) {
            debug!("applying patch at cycle {cycle}");
            step.patch.apply(&mut conditions);
        }

        supervisor.step(&conditions);
    }

    info!(
        "Scenario complete, final state: {}",
        describe(supervisor.state(), &conditions)
    );
    Ok(())
}

/// Setup tracing subscriber based on CLI arguments.
fn setup_tracing(args: &Args) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .init();
    }
}
