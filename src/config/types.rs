//! Configuration type definitions.

use crate::constants::DEFAULT_GAP_THRESHOLD_SECONDS;
use crate::sequence::GapThreshold;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Default grouping and output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Gap threshold in seconds, or `"off"` for event-ID grouping.
    pub gap_threshold: GapThreshold,

    /// How results are printed.
    pub output_mode: OutputMode,

    /// Species list used by `activity` when `--species` is not given.
    pub species_list_file: Option<PathBuf>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            gap_threshold: GapThreshold::Seconds(DEFAULT_GAP_THRESHOLD_SECONDS),
            output_mode: OutputMode::default(),
            species_list_file: None,
        }
    }
}

/// Output mode for command results.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Plain text tables.
    #[default]
    Human,
    /// One JSON envelope per result.
    Json,
}

impl OutputMode {
    /// Whether results are machine-readable.
    pub fn is_structured(self) -> bool {
        matches!(self, Self::Json)
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}
