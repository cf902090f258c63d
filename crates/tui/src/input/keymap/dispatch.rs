//! Mode dispatcher: the single entry point from raw input to state changes.
//!
//! Invariants:
//! - The first keybinding (in registration order) whose binding equals the
//!   event's binding wins.
//! - Non-key events never match and go straight to the fallback.
//! - Errors from actions and fallbacks propagate unchanged.

use chatterm_config::OverrideTable;

use super::{KeyHandler, build_keybindings};
use crate::event::InputEvent;

/// Outcome of a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// A keybinding matched and its action ran.
    Handled,
    /// Nothing matched; the fallback ran.
    Unhandled,
}

/// Dispatch `event` against one mode's handlers.
///
/// Builds the mode's keybinding set from `overrides`, runs the first matching
/// action against `state`, or runs `fallback` when nothing matches.
pub fn dispatch<S, F>(
    handlers: &[KeyHandler<S>],
    event: &InputEvent,
    overrides: &OverrideTable,
    state: &mut S,
    fallback: F,
) -> anyhow::Result<Dispatch>
where
    F: FnOnce(&mut S, &InputEvent) -> anyhow::Result<()>,
{
    if let InputEvent::Key(binding) = event {
        let matched = build_keybindings(handlers, overrides)
            .into_iter()
            .find(|kb| kb.binding.as_ref() == Some(binding));

        if let Some(keybinding) = matched {
            tracing::debug!(
                binding = %binding,
                event = ?keybinding.event,
                description = keybinding.description,
                "Dispatching keybinding"
            );
            (keybinding.action)(state)?;
            return Ok(Dispatch::Handled);
        }
        tracing::trace!(binding = %binding, "No keybinding matched");
    }

    fallback(state, event)?;
    Ok(Dispatch::Unhandled)
}
