//! Observation records carrying a species count and a bucket dimension.

use crate::sequence::{MediaRecord, Sequenceable};

/// A species count attached to one media item.
///
/// `D` is the dimension a statistic buckets by: a week, a location, an
/// hour, or nothing for plain species totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation<D> {
    /// The media the observation was made on.
    pub media: MediaRecord,
    /// Species label; blank means an empty detection.
    pub scientific_name: Option<String>,
    /// Individuals seen on this media item.
    pub count: u32,
    /// Bucket dimension.
    pub dimension: D,
}

/// Observation for overall species totals.
pub type SpeciesObservation = Observation<()>;

/// Observation bucketed by week.
pub type TimeseriesObservation = Observation<Option<WeekStart>>;

/// Observation bucketed by location.
pub type HeatmapObservation = Observation<Option<Location>>;

/// Observation bucketed by hour of day.
pub type ActivityObservation = Observation<Option<HourOfDay>>;

/// Start date of the week an observation falls in (`YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeekStart(pub String);

/// Hour of day, 0 to 23.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HourOfDay(pub u8);

/// Where a deployment's camera stood.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Human-readable site name.
    pub location_name: Option<String>,
}

impl<D> Observation<D> {
    /// Create an observation.
    pub fn new(media: MediaRecord, scientific_name: Option<&str>, count: u32, dimension: D) -> Self {
        Self {
            media,
            scientific_name: scientific_name.map(str::to_string),
            count,
            dimension,
        }
    }

    /// Species label, or `None` for blank detections.
    pub fn species(&self) -> Option<&str> {
        self.scientific_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

impl<D> Sequenceable for Observation<D> {
    fn media(&self) -> &MediaRecord {
        &self.media
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_species_is_none() {
        let media = MediaRecord::new("m1", None);
        assert_eq!(SpeciesObservation::new(media.clone(), None, 1, ()).species(), None);
        assert_eq!(SpeciesObservation::new(media.clone(), Some(""), 1, ()).species(), None);
        assert_eq!(SpeciesObservation::new(media.clone(), Some("  "), 1, ()).species(), None);
        assert_eq!(
            SpeciesObservation::new(media, Some("Capreolus capreolus"), 1, ()).species(),
            Some("Capreolus capreolus")
        );
    }
}
