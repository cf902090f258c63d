//! Path helpers for configuration file locations.
//!
//! Responsibilities:
//! - Determine the platform-standard configuration file path.
//! - Use `directories` crate for platform-appropriate paths.
//!
//! Does NOT handle:
//! - File I/O operations.

use std::path::PathBuf;

use super::error::ConfigError;
use crate::constants::{APP_NAME, CONFIG_FILE_NAME};

/// Returns the default path to the configuration file.
///
/// - Linux: `~/.config/chatterm/config.json`
/// - macOS: `~/Library/Application Support/chatterm/config.json`
/// - Windows: `%AppData%\chatterm\config\config.json`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME).ok_or_else(|| {
        ConfigError::ConfigDirUnavailable("no home directory for the current user".to_string())
    })?;

    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}
