//! JSON envelope types for CLI output.
//!
//! Every JSON result is wrapped in the same envelope so a frontend can
//! consume trapwise output without knowing which command produced it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Envelope format version.
pub const SPEC_VERSION: &str = "1.0";

/// JSON envelope wrapping all CLI output events.
#[derive(Debug, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct JsonEnvelope<T> {
    /// Envelope format version.
    pub spec_version: String,
    /// Event timestamp.
    pub timestamp: DateTime<Utc>,
    /// Event type.
    pub event: EventType,
    /// Event-specific payload.
    pub payload: T,
}

impl<T: Serialize> JsonEnvelope<T> {
    /// Create a new envelope with the current timestamp.
    pub fn new(event: EventType, payload: T) -> Self {
        Self {
            spec_version: SPEC_VERSION.to_string(),
            timestamp: Utc::now(),
            event,
            payload,
        }
    }
}

/// Event types for JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Final result.
    Result,
}

/// Result type discriminator for result payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultType {
    /// Media grouped into sequences.
    Sequences,
    /// Species totals.
    SpeciesCounts,
    /// Weekly timeseries.
    Timeseries,
    /// Per-location counts.
    Heatmap,
    /// Hour-of-day activity.
    DailyActivity,
    /// Video classification winner.
    VideoWinner,
    /// Configuration display.
    Config,
}

/// A typed result payload.
#[derive(Debug, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct ResultPayload<T> {
    /// Kind of result.
    pub result_type: ResultType,
    /// Grouping policy the result was computed with, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub gap_threshold: Option<String>,
    /// Result data.
    pub data: T,
}
