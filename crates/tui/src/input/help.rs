//! Help screen text rendered from the mode registry.
//!
//! Invariants:
//! - Rendering order is registry order, then handler order within a mode.
//! - Keys shown are the effective keys under the given overrides.

use std::collections::BTreeSet;

use chatterm_config::{Binding, OverrideTable};

use crate::input::keymap::{KeyHandler, bindings, describe_bindings};

/// Render help for every mode under `overrides`.
pub fn help_text(overrides: &OverrideTable) -> String {
    let mut out = String::new();
    for keymap in bindings::registry() {
        let entries = entries(&keymap.handlers, overrides);
        if entries.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(keymap.mode.title());
        out.push('\n');
        let max_key_len = entries
            .iter()
            .map(|(keys, _)| keys.chars().count())
            .max()
            .unwrap_or(0);
        for (keys, description) in entries {
            let padding = max_key_len.saturating_sub(keys.chars().count()) + 2;
            out.push_str("  ");
            out.push_str(&keys);
            out.push_str(&" ".repeat(padding));
            out.push_str(description);
            out.push('\n');
        }
    }
    out
}

/// One `(keys, description)` row per handler, deduplicated.
pub(crate) fn entries<S>(
    handlers: &[KeyHandler<S>],
    overrides: &OverrideTable,
) -> Vec<(String, &'static str)> {
    let mut seen = BTreeSet::new();
    let mut rows = Vec::new();
    for handler in handlers {
        let keys: Vec<Binding> = handler
            .build(overrides)
            .into_iter()
            .filter_map(|kb| kb.binding)
            .collect();
        let row = (describe_bindings(&keys), handler.description());
        if seen.insert(row.clone()) {
            rows.push(row);
        }
    }
    rows
}
