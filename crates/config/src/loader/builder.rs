//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` resolving the config file path.
//! - Read and parse the config file into `Config`.
//! - Convert the keybinding section into an immutable `OverrideTable`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Platform directory lookup (delegated to path.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - A missing file at the default location means "all defaults".
//! - A missing file at an explicitly requested path is an error.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::env::apply_env;
use super::error::ConfigError;
use super::path::default_config_path;
use crate::overrides::OverrideTable;
use crate::types::Config;

/// The result of a successful load.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The parsed config file (or defaults when no file exists)
    pub config: Config,
    /// Keybinding overrides parsed from `config.keybindings`
    pub overrides: OverrideTable,
    /// The file the config was read from, if any
    pub path: Option<PathBuf>,
}

/// Configuration loader that locates and reads the config file.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit config file path. The file must exist.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read configuration from environment variables.
    ///
    /// Only fills in values not already set on the builder.
    pub fn from_env(mut self) -> Self {
        apply_env(&mut self);
        self
    }

    pub fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(super) fn set_config_path(&mut self, path: Option<PathBuf>) {
        self.config_path = path;
    }

    /// Load the configuration file and parse its keybinding overrides.
    ///
    /// # Errors
    ///
    /// - `ConfigDirUnavailable` if no explicit path is set and the platform
    ///   config directory cannot be determined.
    /// - `ConfigFileRead` if the file cannot be read (or is missing at an
    ///   explicit path).
    /// - `ConfigFileParse` if the file is not valid config JSON, including
    ///   unknown logical event names.
    /// - `Keybinding` if an override contains an invalid key string.
    pub fn load(self) -> Result<LoadedConfig, ConfigError> {
        let (path, explicit) = match self.config_path {
            Some(path) => (path, true),
            None => (default_config_path()?, false),
        };

        let (config, path) = match read_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(ConfigError::ConfigFileRead { source, .. })
                if !explicit && source.kind() == ErrorKind::NotFound =>
            {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                (Config::default(), None)
            }
            Err(e) => return Err(e),
        };

        let overrides = OverrideTable::from_config(&config.keybindings)?;
        tracing::info!(
            overrides = overrides.len(),
            path = ?path,
            "Loaded configuration"
        );

        Ok(LoadedConfig {
            config,
            overrides,
            path,
        })
    }
}

fn read_config_file(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        source: e,
    })
}
