//! pharmacy-sim — runs the pharmacy shelf forward day by day.
//!
//! Loads a batch of drugs (or uses the built-in shelf), advances it once per
//! simulated day with the standard rule table, and writes one JSON line per
//! day.

mod config;
mod simulation;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use pharmacy_core::constants::DEFAULT_SIMULATION_DAYS;
use pharmacy_engine::ShelfEngine;
use tracing::{error, info};

use crate::config::{LogFormat, SimConfig};

/// Pharmacy shelf simulator.
#[derive(Parser, Debug)]
#[command(
    name = "pharmacy-sim",
    version,
    about = "Advance a pharmacy shelf one day at a time and print each day's stock"
)]
struct Args {
    /// Number of days to simulate
    #[arg(long, default_value_t = DEFAULT_SIMULATION_DAYS)]
    days: u32,

    /// JSON file holding the starting batch (array of {name, expiresIn, benefit})
    #[arg(long)]
    input: Option<PathBuf>,

    /// File to write daily snapshots to (default: stdout)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

impl Args {
    fn into_config(self) -> SimConfig {
        SimConfig {
            days: self.days,
            input: self.input,
            output: self.output,
            log_level: self.log_level,
            log_format: self.log_format,
        }
    }
}

fn main() {
    let config = Args::parse().into_config();

    init_logging(&config.log_level, config.log_format);

    info!("pharmacy-sim v{}", env!("CARGO_PKG_VERSION"));
    info!("days: {}", config.days);
    info!("output: {}", config.output_label());

    if let Err(e) = run(&config) {
        error!("simulation failed: {e:#}");
        process::exit(1);
    }
}

fn run(config: &SimConfig) -> Result<()> {
    let items = match &config.input {
        Some(path) => simulation::load_batch(path)?,
        None => simulation::builtin_batch(),
    };

    let mut out: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("failed to create output {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let engine = ShelfEngine::standard();
    let last = simulation::run(&engine, items, config.days, &mut *out)?;
    info!(items = last.len(), "simulation complete");
    Ok(())
}

/// Initialize tracing subscriber with the given log level and output format.
///
/// Logs go to stderr so stdout carries only snapshots. `RUST_LOG` takes
/// precedence over `level_str`.
fn init_logging(level_str: &str, format: LogFormat) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_str));

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(io::stderr))
            .init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(io::stderr),
            )
            .init(),
    }
}
