//! Observation CSV parsing.
//!
//! Reads a flat export with one row per observation. Only `mediaID` is
//! required; the remaining columns are optional and may appear in any
//! order. Uses the `csv` crate for robust parsing.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::Error;
use crate::aggregate::{
    ActivityObservation, HeatmapObservation, HourOfDay, Location, SpeciesObservation,
    TimeseriesObservation, WeekStart,
};
use crate::constants::DEFAULT_OBSERVATION_COUNT;
use crate::sequence::MediaRecord;
use crate::utils::date::{hour_of_day, week_start};

/// A row of an observation export.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ObservationRow {
    /// Media identifier.
    #[serde(rename = "mediaID")]
    pub media_id: String,
    /// Capture time.
    pub timestamp: Option<String>,
    /// Deployment identifier.
    #[serde(rename = "deploymentID")]
    pub deployment_id: Option<String>,
    /// Imported event identifier.
    #[serde(rename = "eventID")]
    pub event_id: Option<String>,
    /// MIME type.
    #[serde(rename = "fileMediatype")]
    pub file_mediatype: Option<String>,
    /// File path or name.
    #[serde(rename = "filePath")]
    pub file_path: Option<String>,
    /// Species label.
    #[serde(rename = "scientificName")]
    pub scientific_name: Option<String>,
    /// Individuals counted.
    pub count: Option<u32>,
    /// Precomputed week bucket.
    #[serde(rename = "weekStart")]
    pub week_start: Option<String>,
    /// Precomputed hour of day.
    pub hour: Option<u8>,
    /// Latitude in decimal degrees.
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees.
    pub longitude: Option<f64>,
    /// Site name.
    #[serde(rename = "locationName")]
    pub location_name: Option<String>,
}

impl ObservationRow {
    /// The media fields of this row.
    pub fn media(&self) -> MediaRecord {
        MediaRecord {
            media_id: self.media_id.clone(),
            timestamp: self.timestamp.clone(),
            deployment_id: self.deployment_id.clone(),
            event_id: self.event_id.clone(),
            file_mediatype: self.file_mediatype.clone(),
            file_path: self.file_path.clone(),
        }
    }

    fn count(&self) -> u32 {
        self.count.unwrap_or(DEFAULT_OBSERVATION_COUNT)
    }

    /// Observation for species totals.
    pub fn to_species_observation(&self) -> SpeciesObservation {
        SpeciesObservation::new(self.media(), self.scientific_name.as_deref(), self.count(), ())
    }

    /// Observation bucketed by week, deriving the week from the timestamp
    /// when the row has none.
    pub fn to_timeseries_observation(&self) -> TimeseriesObservation {
        let media = self.media();
        let week = self
            .week_start
            .clone()
            .filter(|week| !week.trim().is_empty())
            .or_else(|| media.parsed_timestamp().map(week_start))
            .map(WeekStart);
        TimeseriesObservation::new(media, self.scientific_name.as_deref(), self.count(), week)
    }

    /// Observation bucketed by location; rows without both coordinates
    /// get no location.
    pub fn to_heatmap_observation(&self) -> HeatmapObservation {
        let location = match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Location {
                latitude,
                longitude,
                location_name: self.location_name.clone(),
            }),
            _ => None,
        };
        HeatmapObservation::new(self.media(), self.scientific_name.as_deref(), self.count(), location)
    }

    /// Observation bucketed by hour, deriving the hour from the timestamp
    /// when the row has none.
    pub fn to_activity_observation(&self) -> ActivityObservation {
        let media = self.media();
        let hour = self
            .hour
            .or_else(|| media.parsed_timestamp().map(hour_of_day))
            .map(HourOfDay);
        ActivityObservation::new(media, self.scientific_name.as_deref(), self.count(), hour)
    }
}

/// Parse an observation export.
///
/// Handles UTF-8 BOM, quoted fields and surrounding whitespace.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The `mediaID` column is missing
/// - A value cannot be parsed
///
/// Returns `Ok(vec![])` if the file has no rows.
pub fn read_observations(path: &Path) -> Result<Vec<ObservationRow>, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| Error::InputOpen {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

    let mut rows = Vec::new();

    for (line_num, result) in reader.deserialize::<ObservationRow>().enumerate() {
        let row = result.map_err(|e| Error::InvalidInput {
            path: path.to_path_buf(),
            message: format!("line {}: {e}", line_num + 2),
        })?;

        if row.media_id.is_empty() {
            return Err(Error::InvalidInput {
                path: path.to_path_buf(),
                message: format!("line {}: mediaID must not be empty", line_num + 2),
            });
        }

        rows.push(row);
    }

    Ok(rows)
}

/// Media of the rows, one per media ID, in first-seen order.
pub fn distinct_media(rows: &[ObservationRow]) -> Vec<MediaRecord> {
    let mut seen = HashSet::new();
    rows.iter()
        .filter(|row| seen.insert(row.media_id.as_str()))
        .map(ObservationRow::media)
        .collect()
}
