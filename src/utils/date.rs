//! Calendar buckets derived from capture timestamps.

use chrono::{DateTime, Datelike, Duration, Timelike, Utc};

use crate::constants::timestamp::DATE_FORMAT;

/// Monday of the ISO week containing `time`, as `YYYY-MM-DD`.
pub fn week_start(time: DateTime<Utc>) -> String {
    let date = time.date_naive();
    let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
    monday.format(DATE_FORMAT).to_string()
}

/// Hour of day (0-23) of `time` in UTC.
#[allow(clippy::cast_possible_truncation)]
pub fn hour_of_day(time: DateTime<Utc>) -> u8 {
    // `hour()` is always below 24.
    time.hour() as u8
}
