//! Markdown rendering of the keybinding registry for `--print-keybindings`.
//!
//! Invariants:
//! - Output is deterministic for a given override table.

use std::fmt::Write as _;

use chatterm_config::{LogicalEvent, Origin, OverrideTable};

use crate::input::help::entries;
use crate::input::keymap::{bindings, describe_bindings};

/// Render the logical event table followed by per-mode keybindings.
pub fn render_markdown(overrides: &OverrideTable) -> String {
    let mut out = String::new();

    out.push_str("### Logical Events\n\n");
    out.push_str("| Event | Keys | Source | Description |\n");
    out.push_str("|---|---|---|---|\n");
    for &event in LogicalEvent::ALL {
        let keys = overrides.resolve(event);
        let source = if overrides.get(event).is_some() {
            Origin::UserOverride
        } else {
            Origin::Default
        };
        let _ = writeln!(
            out,
            "| `{}` | {} | {} | {} |",
            event.name(),
            describe_bindings(&keys),
            source,
            event.description()
        );
    }

    out.push_str("\n### Modes\n");
    for keymap in bindings::registry() {
        let _ = write!(out, "\n#### {}", keymap.mode.title());
        if keymap.text_entry {
            out.push_str(" (text entry)");
        }
        out.push_str("\n\n");
        for (keys, description) in entries(&keymap.handlers, overrides) {
            let _ = writeln!(out, "- `{keys}`: {description}");
        }
    }

    out.trim_end().to_string()
}
