//! CSV readers feeding the grouping and aggregation core.

mod observations;
mod predictions;

pub use observations::{ObservationRow, distinct_media, read_observations};
pub use predictions::read_frame_predictions;
