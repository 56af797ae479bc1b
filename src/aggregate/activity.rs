//! Hour-of-day activity histogram.

use std::collections::BTreeMap;

use serde::Serialize;

use super::ActivityObservation;
use super::reduce::sum_of_sequence_maxima;
use crate::constants::HOURS_PER_DAY;

/// Counts for the requested species within one hour of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourBucket {
    /// Hour of day, 0 to 23.
    pub hour: u8,
    /// Count per requested species.
    #[serde(flatten)]
    pub counts: BTreeMap<String, u64>,
}

/// Daily activity for `species_list`, one row per hour.
///
/// Always returns 24 rows, each with an entry for every requested species.
/// Species not in the list are ignored, as are observations whose hour is
/// missing or out of range.
pub fn calculate_sequence_aware_daily_activity<S: AsRef<str>>(
    observations: &[ActivityObservation],
    gap_threshold_seconds: f64,
    species_list: &[S],
) -> Vec<HourBucket> {
    let mut buckets: Vec<HourBucket> = (0..HOURS_PER_DAY)
        .map(|hour| HourBucket {
            hour,
            counts: species_list
                .iter()
                .map(|species| (species.as_ref().to_string(), 0))
                .collect(),
        })
        .collect();

    if observations.is_empty() || species_list.is_empty() {
        return buckets;
    }

    let entries = sum_of_sequence_maxima(observations, gap_threshold_seconds, |observation| {
        observation
            .dimension
            .map(|hour| hour.0)
            .filter(|hour| *hour < HOURS_PER_DAY)
    });

    for entry in entries {
        if let Some(count) = buckets[usize::from(entry.key)].counts.get_mut(&entry.species) {
            *count += entry.count;
        }
    }

    buckets
}
