//! Configuration type definitions for chatterm.
//!
//! Responsibilities:
//! - Define the top-level `Config` shape of the JSON config file.
//! - Define application `Settings` with their defaults.
//! - Define the logical event catalog and raw keybinding overrides.
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Keybinding parsing or resolution (see `keybind` and `overrides` modules).
//!
//! Invariants:
//! - Every section is optional in the file; missing sections take their defaults.

pub mod keybind;
mod settings;

use serde::{Deserialize, Serialize};

pub use keybind::{KeySpec, KeybindOverrides, LogicalEvent};
pub use settings::Settings;

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Raw keybinding overrides keyed by logical event name
    pub keybindings: KeybindOverrides,
    /// Application settings
    pub settings: Settings,
}
