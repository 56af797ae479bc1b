//! Result rendering for the command line.

pub mod human;
mod json;
pub mod json_envelope;

pub use json::{emit_json_result, write_json_result};
pub use json_envelope::{JsonEnvelope, ResultType};
