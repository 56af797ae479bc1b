//! Lenient ISO-8601 timestamp parsing.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::constants::timestamp::{DATE_FORMAT, NAIVE_DATETIME_FORMATS};

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339 (with `Z` or an offset), naive date-times which are
/// read as UTC, and bare dates which map to midnight UTC. Returns `None`
/// for anything else; callers treat such records as ungroupable.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
