//! Centralized constants for the chatterm workspace.
//!
//! This module contains default values used across crates to avoid
//! magic string duplication.

// =============================================================================
// Config File Location
// =============================================================================

/// Application name used for the platform config directory.
pub const APP_NAME: &str = "chatterm";

/// File name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable that overrides the config file path.
pub const CONFIG_PATH_ENV_VAR: &str = "CHATTERM_CONFIG_PATH";

// =============================================================================
// Settings Defaults
// =============================================================================

/// Channel joined when the config lists none.
pub const DEFAULT_CHANNEL: &str = "town-square";

/// Display name used when the config does not set one.
pub const DEFAULT_USER_NAME: &str = "me";

/// Command used to open URLs when the config does not set one.
#[cfg(target_os = "macos")]
pub const DEFAULT_URL_OPENER: &str = "open";

/// Command used to open URLs when the config does not set one.
#[cfg(not(target_os = "macos"))]
pub const DEFAULT_URL_OPENER: &str = "xdg-open";

// =============================================================================
// Runtime
// =============================================================================

/// Capacity of the serial event channel feeding the UI loop.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Interval between UI redraw ticks, in milliseconds.
pub const DEFAULT_UI_TICK_MS: u64 = 250;

/// Base name of the rolling log file.
pub const LOG_FILE_NAME: &str = "chatterm.log";
