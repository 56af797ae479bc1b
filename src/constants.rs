//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "trapwise";

/// Configuration file name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default gap threshold in seconds between consecutive media of one burst.
pub const DEFAULT_GAP_THRESHOLD_SECONDS: f64 = 60.0;

/// Keyword selecting event-ID grouping instead of a time gap.
pub const GAP_OFF_KEYWORD: &str = "off";

/// Number of hourly buckets in a daily activity histogram.
pub const HOURS_PER_DAY: u8 = 24;

/// Count assumed for an observation row that does not carry one.
pub const DEFAULT_OBSERVATION_COUNT: u32 = 1;

/// Media handling constants.
pub mod media {
    /// File extensions treated as video (lowercase, without the dot).
    pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "mov", "webm", "avi", "m4v"];

    /// MIME type prefix identifying video media.
    pub const VIDEO_MEDIATYPE_PREFIX: &str = "video/";
}

/// Timestamp formats accepted in addition to RFC 3339.
pub mod timestamp {
    /// Naive date-time layouts, interpreted as UTC.
    pub const NAIVE_DATETIME_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    /// Bare date layout, interpreted as midnight UTC.
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
}

/// Environment variable names.
pub mod env {
    /// Gap threshold override.
    pub const GAP: &str = "TRAPWISE_GAP";

    /// Output mode override.
    pub const OUTPUT_MODE: &str = "TRAPWISE_OUTPUT_MODE";

    /// Configuration file override.
    pub const CONFIG: &str = "TRAPWISE_CONFIG";
}
