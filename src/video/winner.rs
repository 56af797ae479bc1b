//! Picking one species label for a whole video.

use serde::{Deserialize, Serialize};

/// Frames at which one species was detected in a video.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesFrames {
    /// Sampled frame numbers claiming this species.
    pub frames: Vec<u32>,
    /// Model confidence at each of those frames.
    pub scores: Vec<f64>,
    /// First frame the species was seen at.
    pub first_frame: u32,
    /// Last frame the species was seen at.
    pub last_frame: u32,
}

impl SpeciesFrames {
    /// Mean confidence, `0.0` when no scores were recorded.
    pub fn avg_confidence(&self) -> f64 {
        if self.scores.is_empty() {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let len = self.scores.len() as f64;
        self.scores.iter().sum::<f64>() / len
    }
}

/// Detail carried over from the winning species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinnerData {
    /// Unrounded mean of `scores`.
    pub avg_confidence: f64,
    /// Frames claiming the winning species.
    pub frames: Vec<u32>,
    /// Confidence at each frame.
    pub scores: Vec<f64>,
    /// First frame the winner was seen at.
    pub first_frame: u32,
    /// Last frame the winner was seen at.
    pub last_frame: u32,
}

/// Outcome of winner selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoClassificationWinner {
    /// Winning species, `None` when nothing was detected.
    pub winner: Option<String>,
    /// Detail for the winner.
    pub winner_data: Option<WinnerData>,
}

/// Choose the species claimed by the most frames.
///
/// Equal frame counts are decided by the higher mean confidence. When both
/// are equal the species met first keeps the win, so iterate a `BTreeMap`
/// for a deterministic answer. An empty map yields no winner.
pub fn select_video_classification_winner<'a, I, S>(species_frames: I) -> VideoClassificationWinner
where
    I: IntoIterator<Item = (S, &'a SpeciesFrames)>,
    S: AsRef<str>,
{
    let mut best: Option<(S, &'a SpeciesFrames, f64)> = None;

    for (species, frames) in species_frames {
        let avg = frames.avg_confidence();
        let beats = match &best {
            None => true,
            Some((_, leader, leader_avg)) => {
                frames.frames.len() > leader.frames.len()
                    || (frames.frames.len() == leader.frames.len() && avg > *leader_avg)
            }
        };
        if beats {
            best = Some((species, frames, avg));
        }
    }

    best.map_or_else(VideoClassificationWinner::default, |(species, frames, avg)| {
        VideoClassificationWinner {
            winner: Some(species.as_ref().to_string()),
            winner_data: Some(WinnerData {
                avg_confidence: avg,
                frames: frames.frames.clone(),
                scores: frames.scores.clone(),
                first_frame: frames.first_frame,
                last_frame: frames.last_frame,
            }),
        }
    })
}
