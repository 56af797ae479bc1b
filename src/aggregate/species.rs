//! Species totals.

use serde::Serialize;

use super::Observation;
use super::reduce::sum_of_sequence_maxima;

/// Total individuals counted for one species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesCount {
    /// Species label.
    pub scientific_name: String,
    /// Sum over sequences of the per-sequence maximum count.
    pub count: u64,
}

/// Count individuals per species without double-counting bursts.
///
/// A burst of five frames each showing the same three deer counts as three.
/// Sorted by count, largest first; equal counts are ordered by name.
pub fn calculate_sequence_aware_species_counts<D>(
    observations: &[Observation<D>],
    gap_threshold_seconds: f64,
) -> Vec<SpeciesCount> {
    let mut counts: Vec<SpeciesCount> =
        sum_of_sequence_maxima(observations, gap_threshold_seconds, |_| Some(()))
            .into_iter()
            .map(|entry| SpeciesCount {
                scientific_name: entry.species,
                count: entry.count,
            })
            .collect();

    counts.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.scientific_name.cmp(&b.scientific_name))
    });
    counts
}
