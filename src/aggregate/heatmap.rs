//! Per-location species counts for map markers.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{HeatmapObservation, Location};
use super::reduce::sum_of_sequence_maxima;

/// Individuals of one species counted at one location.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationCount {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Site name, if known.
    pub location_name: Option<String>,
    /// Sum over sequences of the per-sequence maximum count.
    pub count: u64,
}

/// Hashable identity of a location; coordinates compared bit for bit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct LocationKey {
    latitude: u64,
    longitude: u64,
    location_name: Option<String>,
}

impl From<&Location> for LocationKey {
    fn from(location: &Location) -> Self {
        Self {
            latitude: location.latitude.to_bits(),
            longitude: location.longitude.to_bits(),
            location_name: location.location_name.clone(),
        }
    }
}

/// Species counts per location without double-counting bursts.
///
/// Observations without coordinates are skipped. Within each species,
/// locations are listed in the order they were first seen.
pub fn calculate_sequence_aware_heatmap(
    observations: &[HeatmapObservation],
    gap_threshold_seconds: f64,
) -> BTreeMap<String, Vec<LocationCount>> {
    let entries = sum_of_sequence_maxima(observations, gap_threshold_seconds, |observation| {
        observation.dimension.as_ref().map(LocationKey::from)
    });

    let mut heatmap: BTreeMap<String, Vec<LocationCount>> = BTreeMap::new();
    for entry in entries {
        heatmap.entry(entry.species).or_default().push(LocationCount {
            latitude: f64::from_bits(entry.key.latitude),
            longitude: f64::from_bits(entry.key.longitude),
            location_name: entry.key.location_name,
            count: entry.count,
        });
    }
    heatmap
}
