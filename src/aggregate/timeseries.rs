//! Weekly species timeseries.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::TimeseriesObservation;
use super::reduce::sum_of_sequence_maxima;

/// Counts for every species in one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeseriesRow {
    /// Week start date.
    pub date: String,
    /// Count per species, zero when not seen that week.
    #[serde(flatten)]
    pub counts: BTreeMap<String, u64>,
}

/// Weekly rows plus the species they cover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeseriesResult {
    /// One row per week, oldest first.
    pub timeseries: Vec<TimeseriesRow>,
    /// Every species observed, alphabetically.
    pub all_species: Vec<String>,
}

/// Weekly species counts without double-counting bursts.
///
/// Each sequence contributes its maximum count per (week, species) pair.
/// Observations without a week bucket are left out of the rows, though
/// their species still appear in `all_species`.
pub fn calculate_sequence_aware_timeseries(
    observations: &[TimeseriesObservation],
    gap_threshold_seconds: f64,
) -> TimeseriesResult {
    let all_species: BTreeSet<&str> = observations
        .iter()
        .filter_map(TimeseriesObservation::species)
        .collect();

    let entries = sum_of_sequence_maxima(observations, gap_threshold_seconds, |observation| {
        observation.dimension.clone()
    });

    let mut rows: BTreeMap<String, BTreeMap<String, u64>> = BTreeMap::new();
    for entry in entries {
        let row = rows.entry(entry.key.0).or_insert_with(|| {
            all_species
                .iter()
                .map(|species| ((*species).to_string(), 0))
                .collect()
        });
        *row.entry(entry.species).or_insert(0) += entry.count;
    }

    TimeseriesResult {
        timeseries: rows
            .into_iter()
            .map(|(date, counts)| TimeseriesRow { date, counts })
            .collect(),
        all_species: all_species.into_iter().map(str::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::WeekStart;
    use crate::sequence::MediaRecord;

    fn obs(id: &str, timestamp: &str, week: Option<&str>, species: &str, count: u32) -> TimeseriesObservation {
        let media = MediaRecord::new(id, Some(timestamp)).with_deployment("dep1");
        TimeseriesObservation::new(
            media,
            Some(species),
            count,
            week.map(|w| WeekStart(w.to_string())),
        )
    }

    #[test]
    fn test_rows_sorted_and_zero_filled() {
        let observations = vec![
            obs("a", "2024-01-15T10:00:00Z", Some("2024-01-15"), "Fox", 1),
            obs("b", "2024-01-08T10:00:00Z", Some("2024-01-08"), "Deer", 2),
        ];

        let result = calculate_sequence_aware_timeseries(&observations, 60.0);

        assert_eq!(result.all_species, vec!["Deer", "Fox"]);
        assert_eq!(result.timeseries.len(), 2);
        assert_eq!(result.timeseries[0].date, "2024-01-08");
        assert_eq!(result.timeseries[0].counts["Deer"], 2);
        assert_eq!(result.timeseries[0].counts["Fox"], 0);
        assert_eq!(result.timeseries[1].counts["Fox"], 1);
        assert_eq!(result.timeseries[1].counts["Deer"], 0);
    }

    #[test]
    fn test_missing_week_excluded_from_rows() {
        let observations = vec![obs("a", "2024-01-15T10:00:00Z", None, "Fox", 1)];
        let result = calculate_sequence_aware_timeseries(&observations, 60.0);
        assert!(result.timeseries.is_empty());
        assert_eq!(result.all_species, vec!["Fox"]);
    }

    #[test]
    fn test_row_serializes_species_as_keys() {
        let row = TimeseriesRow {
            date: "2024-01-08".to_string(),
            counts: BTreeMap::from([("Deer".to_string(), 3)]),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json, serde_json::json!({ "date": "2024-01-08", "Deer": 3 }));
    }
}
