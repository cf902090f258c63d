//! Configuration management for chatterm.
//!
//! This crate provides the key chord type, the logical event catalog with its
//! default bindings, the user override table and binding resolver, and the
//! loader for the JSON configuration file.

pub mod constants;
pub mod keybind;
mod loader;
pub mod overrides;
pub mod types;

pub use keybind::{Binding, Key, KeybindError, Modifiers, parse_key};
pub use loader::{ConfigError, ConfigLoader, LoadedConfig, default_config_path, env_var_or_none};
pub use overrides::{Origin, OverrideEntry, OverrideTable};
pub use types::{Config, KeySpec, KeybindOverrides, LogicalEvent, Settings};
