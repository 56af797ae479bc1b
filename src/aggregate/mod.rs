//! Sequence-aware statistics.
//!
//! Every statistic here groups observations exactly like the gallery does,
//! keeps the largest count per species inside each sequence, and only then
//! sums across sequences. Repeated frames of the same animals therefore
//! count once.

mod activity;
mod heatmap;
mod observation;
mod reduce;
mod species;
mod timeseries;

pub use activity::{HourBucket, calculate_sequence_aware_daily_activity};
pub use heatmap::{LocationCount, calculate_sequence_aware_heatmap};
pub use observation::{
    ActivityObservation, HeatmapObservation, HourOfDay, Location, Observation, SpeciesObservation,
    TimeseriesObservation, WeekStart,
};
pub use species::{SpeciesCount, calculate_sequence_aware_species_counts};
pub use timeseries::{TimeseriesResult, TimeseriesRow, calculate_sequence_aware_timeseries};
