//! Override table and binding resolution.
//!
//! Responsibilities:
//! - Convert the raw `keybindings` config section into a parsed, immutable
//!   `OverrideTable`.
//! - Resolve the effective bindings of a logical event against that table.
//!
//! Does NOT handle:
//! - Mode registration or dispatch (see TUI crate).
//!
//! Invariants:
//! - An explicit override replaces the defaults entirely; it never merges.
//! - `resolve` is total: every event has a defined result for every table.
//! - Every key string is validated once, at construction.

use std::collections::BTreeMap;
use std::fmt;

use crate::keybind::{Binding, KeybindError, parse_key};
use crate::types::keybind::{KeySpec, KeybindOverrides, LogicalEvent};

/// A parsed override for one logical event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverrideEntry {
    /// The event has no bindings.
    Unbound,
    /// The event is bound to exactly these bindings, in this order.
    Explicit(Vec<Binding>),
}

/// Where an effective binding came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Origin {
    Default,
    UserOverride,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::UserOverride => write!(f, "user override"),
        }
    }
}

/// Parsed keybinding overrides keyed by logical event.
///
/// Built once at startup and shared read-only by dispatch and checking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideTable {
    entries: BTreeMap<LogicalEvent, OverrideEntry>,
}

impl OverrideTable {
    /// A table with no overrides; every event resolves to its defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the raw config section.
    ///
    /// # Errors
    ///
    /// Returns `KeybindError::InvalidOverride` naming the first event whose
    /// key string fails to parse.
    pub fn from_config(raw: &KeybindOverrides) -> Result<Self, KeybindError> {
        let mut table = Self::new();
        for (&event, spec) in &raw.overrides {
            let entry = parse_spec(spec).map_err(|e| KeybindError::InvalidOverride {
                event: event.name().to_string(),
                source: Box::new(e),
            })?;
            table.entries.insert(event, entry);
        }
        Ok(table)
    }

    /// Builder-style insert, mainly for tests and programmatic setup.
    pub fn with(mut self, event: LogicalEvent, entry: OverrideEntry) -> Self {
        self.entries.insert(event, entry);
        self
    }

    pub fn get(&self, event: LogicalEvent) -> Option<&OverrideEntry> {
        self.entries.get(&event)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Effective bindings for `event`.
    pub fn resolve(&self, event: LogicalEvent) -> Vec<Binding> {
        match self.entries.get(&event) {
            Some(OverrideEntry::Unbound) => Vec::new(),
            Some(OverrideEntry::Explicit(bindings)) => bindings.clone(),
            None => event.default_bindings().to_vec(),
        }
    }

    /// Effective bindings for `event`, each tagged with its origin.
    pub fn resolve_with_origin(&self, event: LogicalEvent) -> Vec<(Binding, Origin)> {
        let origin = if self.entries.contains_key(&event) {
            Origin::UserOverride
        } else {
            Origin::Default
        };
        self.resolve(event)
            .into_iter()
            .map(|binding| (binding, origin))
            .collect()
    }
}

fn parse_spec(spec: &KeySpec) -> Result<OverrideEntry, KeybindError> {
    if spec.is_unbound() {
        return Ok(OverrideEntry::Unbound);
    }
    let bindings = match spec {
        KeySpec::One(key) => vec![parse_key(key)?],
        KeySpec::Many(keys) => keys
            .iter()
            .map(|key| parse_key(key))
            .collect::<Result<Vec<_>, _>>()?,
    };
    Ok(OverrideEntry::Explicit(bindings))
}
