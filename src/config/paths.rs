//! Platform-specific configuration paths.

use crate::constants::{APP_NAME, CONFIG_FILE_NAME, env};
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::ffi::OsString;
use std::path::PathBuf;

/// Get the configuration directory for the current platform.
///
/// - Linux: `~/.config/trapwise/`
/// - macOS: `~/Library/Application Support/trapwise/`
/// - Windows: `%APPDATA%\trapwise\`
pub fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(Error::ConfigDirNotFound)
}

/// Get the full path to the config file.
///
/// `TRAPWISE_CONFIG` points at a different file when set.
pub fn config_file_path() -> Result<PathBuf> {
    resolve_config_file(std::env::var_os(env::CONFIG))
}

fn resolve_config_file(override_path: Option<OsString>) -> Result<PathBuf> {
    match override_path.filter(|path| !path.is_empty()) {
        Some(path) => Ok(PathBuf::from(path)),
        None => Ok(config_dir()?.join(CONFIG_FILE_NAME)),
    }
}
