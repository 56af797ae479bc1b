//! Trapwise - sequence-aware camera trap statistics.
//!
//! Groups camera trap media into bursts and computes statistics that count
//! each burst once: species totals, weekly timeseries, per-location
//! heatmaps and hour-of-day activity. Also picks the species label for a
//! video from per-frame classifications.

#![warn(missing_docs)]

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod output;
pub mod sequence;
pub mod utils;
pub mod video;

use clap::Parser;
use cli::Cli;
use config::{OutputMode, load_default_config, validate_config};
use tracing::debug;

pub use error::{Error, Result};

/// Main entry point for the trapwise CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.global.verbose, cli.global.quiet);

    // Load configuration
    let config = load_default_config()?;
    validate_config(&config)?;

    let mode: OutputMode = cli
        .global
        .output_mode
        .unwrap_or(config.defaults.output_mode);
    debug!("Output mode: {mode}, default gap: {}", config.defaults.gap_threshold);

    cli::commands::execute(cli.command, &config, mode)
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    // Logs go to stderr so JSON results on stdout stay parseable.
    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
