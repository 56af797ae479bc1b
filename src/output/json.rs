//! JSON result emission.

use std::io::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::output::json_envelope::{EventType, JsonEnvelope, ResultPayload, ResultType};
use crate::sequence::GapThreshold;

/// Write one result envelope as a single JSON line.
pub fn write_json_result<W: Write, T: Serialize>(
    writer: &mut W,
    result_type: ResultType,
    gap_threshold: Option<GapThreshold>,
    data: &T,
) -> Result<()> {
    let payload = ResultPayload {
        result_type,
        gap_threshold: gap_threshold.map(|gap| gap.to_string()),
        data,
    };
    let envelope = JsonEnvelope::new(EventType::Result, payload);

    serde_json::to_writer(&mut *writer, &envelope).map_err(|e| Error::JsonSerialize { source: e })?;
    writeln!(writer)?;
    Ok(())
}

/// Emit one result envelope on stdout.
pub fn emit_json_result<T: Serialize>(
    result_type: ResultType,
    gap_threshold: Option<GapThreshold>,
    data: &T,
) -> Result<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    write_json_result(&mut lock, result_type, gap_threshold, data)
}
