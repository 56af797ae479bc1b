//! Building per-species frame lists from sampled frame predictions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::SpeciesFrames;

/// One classifier prediction on one sampled video frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FramePrediction {
    /// Index of the sampled frame.
    pub frame: u32,
    /// Predicted species.
    pub scientific_name: String,
    /// Model confidence.
    pub score: f64,
}

/// Collect the frames claimed by each species.
///
/// A species is recorded at most once per frame, with its best score there.
/// Frames are listed in ascending order. Blank species names are skipped.
pub fn collect_species_frames(predictions: &[FramePrediction]) -> BTreeMap<String, SpeciesFrames> {
    let mut best_scores: BTreeMap<&str, BTreeMap<u32, f64>> = BTreeMap::new();

    for prediction in predictions {
        let species = prediction.scientific_name.trim();
        if species.is_empty() {
            continue;
        }
        best_scores
            .entry(species)
            .or_default()
            .entry(prediction.frame)
            .and_modify(|score| *score = score.max(prediction.score))
            .or_insert(prediction.score);
    }

    best_scores
        .into_iter()
        .map(|(species, by_frame)| {
            let first_frame = by_frame.keys().next().copied().unwrap_or_default();
            let last_frame = by_frame.keys().next_back().copied().unwrap_or_default();
            let (frames, scores) = by_frame.into_iter().unzip();
            (
                species.to_string(),
                SpeciesFrames {
                    frames,
                    scores,
                    first_frame,
                    last_frame,
                },
            )
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn prediction(frame: u32, species: &str, score: f64) -> FramePrediction {
        FramePrediction {
            frame,
            scientific_name: species.to_string(),
            score,
        }
    }

    #[test]
    fn test_frames_sorted_and_bounded() {
        let predictions = vec![
            prediction(4, "Deer", 0.7),
            prediction(1, "Deer", 0.9),
            prediction(2, "Fox", 0.4),
            prediction(3, "Deer", 0.8),
        ];

        let map = collect_species_frames(&predictions);

        let deer = &map["Deer"];
        assert_eq!(deer.frames, vec![1, 3, 4]);
        assert_eq!(deer.scores, vec![0.9, 0.8, 0.7]);
        assert_eq!(deer.first_frame, 1);
        assert_eq!(deer.last_frame, 4);
        assert_eq!(map["Fox"].frames, vec![2]);
    }

    #[test]
    fn test_duplicate_frame_keeps_best_score() {
        let predictions = vec![prediction(5, "Deer", 0.3), prediction(5, "Deer", 0.6)];
        let map = collect_species_frames(&predictions);
        assert_eq!(map["Deer"].frames, vec![5]);
        assert_eq!(map["Deer"].scores, vec![0.6]);
    }

    #[test]
    fn test_blank_species_skipped() {
        let predictions = vec![prediction(0, " ", 0.9)];
        assert!(collect_species_frames(&predictions).is_empty());
    }
}
