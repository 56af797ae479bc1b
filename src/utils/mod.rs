//! Small helpers shared by the command layer.

pub mod date;
pub mod species_list;
