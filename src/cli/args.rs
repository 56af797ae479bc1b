//! CLI argument definitions.

use crate::cli::validators::{parse_gap_threshold, parse_species_name};
use crate::config::OutputMode;
use crate::constants::env;
use crate::sequence::GapThreshold;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Sequence-aware grouping and statistics for camera trap observations.
#[derive(Debug, Parser)]
#[command(name = "trapwise")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Options shared by every command.
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Options shared by every command.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Output mode for results.
    #[arg(long, value_enum, global = true, env = env::OUTPUT_MODE)]
    pub output_mode: Option<OutputMode>,

    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Group media into sequences (bursts).
    Sequences(GroupingArgs),
    /// Count individuals per species.
    Species(GroupingArgs),
    /// Weekly species counts.
    Timeseries(GroupingArgs),
    /// Species counts per location.
    Heatmap(GroupingArgs),
    /// Hour-of-day activity for selected species.
    Activity(ActivityArgs),
    /// Pick the species label for a video from per-frame predictions.
    VideoWinner {
        /// CSV with `frame`, `scientificName` and `score` columns.
        predictions: PathBuf,
    },
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Input and grouping options.
#[derive(Debug, Args)]
pub struct GroupingArgs {
    /// Observation CSV export.
    pub input: PathBuf,

    /// Gap threshold in seconds, or `off` to group by event ID.
    #[arg(short, long, value_parser = parse_gap_threshold, env = env::GAP)]
    pub gap: Option<GapThreshold>,
}

/// Arguments for the activity command.
#[derive(Debug, Args)]
pub struct ActivityArgs {
    /// Input and grouping options.
    #[command(flatten)]
    pub grouping: GroupingArgs,

    /// Species to chart (comma-separated).
    #[arg(short, long, value_delimiter = ',', value_parser = parse_species_name)]
    pub species: Vec<String>,

    /// File listing species to chart, one per line.
    #[arg(long, conflicts_with = "species")]
    pub species_list: Option<PathBuf>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_sequences() {
        let cli = Cli::try_parse_from(["trapwise", "sequences", "obs.csv", "--gap", "120"]).unwrap();
        match cli.command {
            Command::Sequences(args) => {
                assert_eq!(args.input, PathBuf::from("obs.csv"));
                assert_eq!(args.gap, Some(GapThreshold::Seconds(120.0)));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_gap_off() {
        let cli = Cli::try_parse_from(["trapwise", "species", "obs.csv", "-g", "off"]).unwrap();
        match cli.command {
            Command::Species(args) => assert_eq!(args.gap, Some(GapThreshold::EventId)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_activity_species() {
        let cli = Cli::try_parse_from([
            "trapwise",
            "activity",
            "obs.csv",
            "--species",
            "Vulpes vulpes,Meles meles",
        ])
        .unwrap();
        match cli.command {
            Command::Activity(args) => {
                assert_eq!(args.species, vec!["Vulpes vulpes", "Meles meles"]);
                assert!(args.species_list.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "trapwise",
            "heatmap",
            "obs.csv",
            "--output-mode",
            "json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.global.output_mode, Some(OutputMode::Json));
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn test_cli_rejects_bad_gap() {
        assert!(Cli::try_parse_from(["trapwise", "species", "obs.csv", "--gap", "soon"]).is_err());
    }

    #[test]
    fn test_cli_parse_config_subcommand() {
        assert!(Cli::try_parse_from(["trapwise", "config", "show"]).is_ok());
    }
}
