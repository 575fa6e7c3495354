//! Rover mission CLI
//!
//! Reads a command script from a file (or stdin) and prints one
//! `"<x> <y> <heading>"` line per rover.

use clap::{Parser, ValueEnum};
use rover_mission::{Mission, MissionConfig, TrailingRover};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Trailing {
    /// Fail when the last rover has no instruction line
    Reject,
    /// Run the last rover with no instructions
    Idle,
}

/// Drive rovers across a plateau from a command script
#[derive(Parser, Debug)]
#[command(name = "rover-mission")]
#[command(about = "Drive rovers across a plateau from a command script", long_about = None)]
struct Args {
    /// Script file to run (reads stdin when omitted)
    script: Option<PathBuf>,

    /// Emit per-rover JSON reports instead of plain lines
    #[arg(long)]
    json: bool,

    /// Skip the start-cell check for each rover
    #[arg(long)]
    no_validate_start: bool,

    /// Policy for a rover placement with no instruction line
    #[arg(long, value_enum, default_value = "reject")]
    trailing: Trailing,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn read_script(path: Option<&PathBuf>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut script = String::new();
            std::io::stdin().read_to_string(&mut script)?;
            Ok(script)
        }
    }
}

/// Log filter from `RUST_LOG`, falling back to `info` (or `debug` with `--verbose`).
fn log_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { "info" };
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(level))
}

fn main() -> ExitCode {
    let args = Args::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(rust_log.as_deref(), args.verbose))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    let script = match read_script(args.script.as_ref()) {
        Ok(script) => script,
        Err(e) => {
            error!("Failed to read script: {e}");
            return ExitCode::FAILURE;
        }
    };

    let config = MissionConfig {
        validate_start: !args.no_validate_start,
        trailing_rover: match args.trailing {
            Trailing::Reject => TrailingRover::Reject,
            Trailing::Idle => TrailingRover::Idle,
        },
        ..Default::default()
    };

    let mut mission = Mission::new(script).with_config(config);
    if let Err(e) = mission.start() {
        error!("Mission aborted: {e}");
        return ExitCode::FAILURE;
    }

    if args.json {
        match serde_json::to_string_pretty(mission.reports()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("Failed to serialize reports: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", mission.output());
    }

    ExitCode::SUCCESS
}
