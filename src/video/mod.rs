//! Video classification.
//!
//! A classifier samples frames from a video and predicts a species for each.
//! These helpers collapse those per-frame predictions into one label.

mod frames;
mod winner;

pub use frames::{FramePrediction, collect_species_frames};
pub use winner::{SpeciesFrames, VideoClassificationWinner, WinnerData, select_video_classification_winner};
