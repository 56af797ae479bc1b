//! The max-within-sequence, sum-across-sequences reduction.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use super::Observation;
use crate::sequence::{GapThreshold, group_media};

/// Count for one (bucket, species) pair.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BucketCount<K> {
    pub key: K,
    pub species: String,
    pub count: u64,
}

/// Counts keyed by (bucket, species), remembering first-seen order.
struct Tally<K> {
    slots: HashMap<(K, String), usize>,
    entries: Vec<BucketCount<K>>,
}

impl<K: Clone + Eq + Hash> Tally<K> {
    fn new() -> Self {
        Self {
            slots: HashMap::new(),
            entries: Vec::new(),
        }
    }

    fn slot(&mut self, key: K, species: &str) -> &mut u64 {
        let existing = self.slots.get(&(key.clone(), species.to_string())).copied();
        let index = match existing {
            Some(index) => index,
            None => {
                self.entries.push(BucketCount {
                    key: key.clone(),
                    species: species.to_string(),
                    count: 0,
                });
                let index = self.entries.len() - 1;
                self.slots.insert((key, species.to_string()), index);
                index
            }
        };
        &mut self.entries[index].count
    }

    fn raise(&mut self, key: K, species: &str, count: u64) {
        let slot = self.slot(key, species);
        *slot = (*slot).max(count);
    }

    fn add(&mut self, key: K, species: &str, count: u64) {
        *self.slot(key, species) += count;
    }
}

/// Sum of per-sequence maxima for every (bucket, species) pair.
///
/// Observations are grouped with the shared gallery policy. Within a
/// sequence, each (bucket, species) pair keeps its largest count; those
/// maxima are then summed over all sequences. Blank species and
/// observations without a bucket are skipped. Entries come back in
/// first-seen order.
pub(crate) fn sum_of_sequence_maxima<D, K, F>(
    observations: &[Observation<D>],
    gap_threshold_seconds: f64,
    bucket: F,
) -> Vec<BucketCount<K>>
where
    K: Clone + Eq + Hash,
    F: Fn(&Observation<D>) -> Option<K>,
{
    let sequences = group_media(observations, GapThreshold::from_seconds(gap_threshold_seconds));
    let mut totals = Tally::new();

    for sequence in &sequences {
        let mut maxima = Tally::new();
        for &observation in &sequence.items {
            let (Some(species), Some(key)) = (observation.species(), bucket(observation)) else {
                continue;
            };
            maxima.raise(key, species, u64::from(observation.count));
        }

        for entry in maxima.entries {
            totals.add(entry.key, &entry.species, entry.count);
        }
    }

    debug!(
        observations = observations.len(),
        sequences = sequences.len(),
        buckets = totals.entries.len(),
        "reduced observations per sequence"
    );

    totals.entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::SpeciesObservation;
    use crate::sequence::MediaRecord;

    fn obs(id: &str, seconds: u32, species: Option<&str>, count: u32) -> SpeciesObservation {
        let timestamp = format!("2024-01-15T10:00:{seconds:02}Z");
        let media = MediaRecord::new(id, Some(&timestamp)).with_deployment("dep1");
        SpeciesObservation::new(media, species, count, ())
    }

    #[test]
    fn test_tally_keeps_first_seen_order() {
        let mut tally = Tally::new();
        tally.add("b", "Deer", 1);
        tally.add("a", "Fox", 2);
        tally.add("b", "Deer", 3);
        let keys: Vec<_> = tally.entries.iter().map(|e| (e.key, e.count)).collect();
        assert_eq!(keys, vec![("b", 4), ("a", 2)]);
    }

    #[test]
    fn test_tally_raise_keeps_max() {
        let mut tally = Tally::new();
        tally.raise((), "Deer", 2);
        tally.raise((), "Deer", 5);
        tally.raise((), "Deer", 1);
        assert_eq!(tally.entries[0].count, 5);
    }

    #[test]
    fn test_blank_species_and_missing_bucket_skipped() {
        let observations = vec![
            obs("a", 0, None, 4),
            obs("b", 1, Some("Deer"), 2),
            obs("c", 2, Some("Fox"), 1),
        ];

        let entries = sum_of_sequence_maxima(&observations, 60.0, |o| {
            (o.media.media_id != "c").then_some(())
        });

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].species, "Deer");
        assert_eq!(entries[0].count, 2);
    }
}
