//! Simulator configuration.
//!
//! Provides [`SimConfig`] with defaults for day count, batch source,
//! output target, and logging.

use std::path::PathBuf;

use pharmacy_core::constants::DEFAULT_SIMULATION_DAYS;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Configuration for one simulator run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of days to simulate.
    pub days: u32,
    /// JSON batch to start from. `None` uses the built-in shelf.
    pub input: Option<PathBuf>,
    /// Where to write daily snapshots. `None` writes to stdout.
    pub output: Option<PathBuf>,
    /// Log level filter string (e.g. "info", "pharmacy_engine=debug").
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_SIMULATION_DAYS,
            input: None,
            output: None,
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl SimConfig {
    /// Human-readable name of the output target.
    pub fn output_label(&self) -> String {
        match &self.output {
            Some(path) => path.display().to_string(),
            None => "<stdout>".to_string(),
        }
    }
}
