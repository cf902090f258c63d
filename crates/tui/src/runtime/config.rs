//! Configuration loading and the startup keybinding check.
//!
//! Invariants:
//! - Config path precedence: `--config-path` > `CHATTERM_CONFIG_PATH` > platform default.
//! - A failed keybinding check is fatal at startup; the caller decides how
//!   to report it.

use anyhow::{Context, Result};
use chatterm_config::{ConfigLoader, LoadedConfig, OverrideTable};

use crate::cli::Cli;
use crate::input::keymap::{ConflictReport, bindings, check};

/// Load configuration, honoring the CLI path over the environment.
pub fn load_config(cli: &Cli) -> Result<LoadedConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config_path
        && !path.as_os_str().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }
    loader
        .from_env()
        .load()
        .context("Failed to load configuration")
}

/// Run the consistency checker over every mode under `overrides`.
pub fn check_keybindings(overrides: &OverrideTable) -> Result<(), ConflictReport> {
    check(overrides, &bindings::registry())
}
