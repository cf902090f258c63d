//! Configuration loader for environment variables and files.
//!
//! Responsibilities:
//! - Locate and read the JSON config file.
//! - Provide a builder-pattern `ConfigLoader` with CLI > env > default path precedence.
//! - Parse keybinding overrides into an `OverrideTable` exactly once.
//!
//! Does NOT handle:
//! - Writing configuration back to disk.
//! - Checking bindings for conflicts (see TUI crate).

mod builder;
mod env;
mod error;
mod path;

pub use builder::{ConfigLoader, LoadedConfig};
pub use env::env_var_or_none;
pub use error::ConfigError;
pub use path::default_config_path;
