//! CLI argument validators.
//!
//! Shared validation functions for CLI argument parsing.

use crate::sequence::GapThreshold;

/// Parse a gap threshold: seconds (`60`, `90s`) or `off`.
pub fn parse_gap_threshold(s: &str) -> Result<GapThreshold, String> {
    let threshold: GapThreshold = s.parse().map_err(|e: crate::Error| e.to_string())?;

    if let GapThreshold::Seconds(seconds) = threshold
        && seconds < 0.001
    {
        return Err(format!(
            "gap threshold must be at least 1 ms, got {seconds}s"
        ));
    }

    Ok(threshold)
}

/// Parse a species name, rejecting blanks.
pub fn parse_species_name(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("species name must not be empty".to_string());
    }
    Ok(trimmed.to_string())
}
