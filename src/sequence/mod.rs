//! Sequence (burst) grouping of camera trap media.
//!
//! Camera traps fire several shots per trigger. This module turns a flat,
//! arbitrarily ordered list of media into sequences that each represent one
//! animal visit, either by timestamp proximity within a deployment or by an
//! imported event ID.

mod grouper;
mod policy;
mod record;
mod timestamp;

pub use grouper::{Sequence, group_by_event_id, group_into_sequences};
pub use policy::{GapThreshold, group_media};
pub use record::{MediaRecord, Sequenceable};
pub use timestamp::parse_timestamp;
