//! Error types for trapwise.

/// Result type alias for trapwise operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for trapwise.
///
/// The grouping and aggregation core never fails; these variants cover the
/// configuration, input and output layers around it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Gap threshold could not be parsed.
    #[error("invalid gap threshold '{value}' (expected seconds or \"off\")")]
    InvalidGapThreshold {
        /// Offending value.
        value: String,
    },

    /// Failed to open an input file.
    #[error("failed to open input file '{path}'")]
    InputOpen {
        /// Path to the input file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Input file has a malformed row or header.
    #[error("invalid input in '{path}': {message}")]
    InvalidInput {
        /// Path to the input file.
        path: std::path::PathBuf,
        /// Description of the format error.
        message: String,
    },

    /// Failed to serialize a JSON result.
    #[error("failed to serialize JSON output")]
    JsonSerialize {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}
