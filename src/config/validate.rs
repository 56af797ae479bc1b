//! Configuration validation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::sequence::GapThreshold;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_defaults(config)?;
    Ok(())
}

/// Validate default settings.
fn validate_defaults(config: &Config) -> Result<()> {
    let defaults = &config.defaults;

    if let GapThreshold::Seconds(seconds) = defaults.gap_threshold
        && !seconds.is_finite()
    {
        return Err(Error::ConfigValidation {
            message: format!("gap_threshold must be a finite number of seconds, got {seconds}"),
        });
    }

    if let Some(ref path) = defaults.species_list_file
        && path.as_os_str().is_empty()
    {
        return Err(Error::ConfigValidation {
            message: "species_list_file must not be empty".to_string(),
        });
    }

    Ok(())
}
