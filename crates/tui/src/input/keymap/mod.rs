//! Mode-scoped keybinding registration and the keybinding set builder.
//!
//! Responsibilities:
//! - Define `KeyHandler`, one registration in a mode's handler list.
//! - Build a mode's ordered keybinding set from its handlers and the
//!   override table.
//! - Re-export the dispatcher and the consistency checker.
//!
//! Non-responsibilities:
//! - Parsing key strings or resolving overrides (see `chatterm_config`).
//! - Mutating application state (actions do that when dispatched).
//!
//! Invariants:
//! - Keybinding sets are rebuilt from the override table on every call,
//!   never cached.
//! - Registration order is dispatch priority.
//! - A logical handler whose event resolves to no bindings still yields one
//!   keybinding (with no binding) so it stays visible in help.

use std::fmt;

use chatterm_config::{Binding, LogicalEvent, OverrideTable};

pub mod bindings;
mod check;
mod dispatch;

pub use check::{
    BareKeyWarning, Conflict, ConflictReport, ConflictingEvent, StaticCollision, check,
};
pub use dispatch::{Dispatch, dispatch};

/// An operation run against the application state when its binding fires.
pub type Action<S> = fn(&mut S) -> anyhow::Result<()>;

/// One registration in a mode's handler list.
pub enum KeyHandler<S> {
    /// Bound through the logical event catalog and user overrides.
    Logical {
        event: LogicalEvent,
        description: &'static str,
        action: Action<S>,
    },
    /// Bound to a fixed chord; not overridable.
    Static {
        binding: Binding,
        description: &'static str,
        action: Action<S>,
    },
}

impl<S> KeyHandler<S> {
    /// Register `action` for `event`, described by the catalog description.
    pub fn on(event: LogicalEvent, action: Action<S>) -> Self {
        Self::Logical {
            event,
            description: event.description(),
            action,
        }
    }

    /// Register `action` for `event` with a mode-specific description.
    pub fn on_described(event: LogicalEvent, description: &'static str, action: Action<S>) -> Self {
        Self::Logical {
            event,
            description,
            action,
        }
    }

    /// Register `action` for a fixed chord.
    pub fn fixed(binding: Binding, description: &'static str, action: Action<S>) -> Self {
        Self::Static {
            binding,
            description,
            action,
        }
    }

    /// The logical event this handler is tied to, if any.
    pub fn event(&self) -> Option<LogicalEvent> {
        match self {
            Self::Logical { event, .. } => Some(*event),
            Self::Static { .. } => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Logical { description, .. } | Self::Static { description, .. } => description,
        }
    }

    /// Expand this handler into keybindings under `overrides`.
    pub fn build(&self, overrides: &OverrideTable) -> Vec<Keybinding<S>> {
        match *self {
            Self::Logical {
                event,
                description,
                action,
            } => {
                let bindings = overrides.resolve(event);
                if bindings.is_empty() {
                    return vec![Keybinding {
                        description,
                        binding: None,
                        action,
                        event: Some(event),
                    }];
                }
                bindings
                    .into_iter()
                    .map(|binding| Keybinding {
                        description,
                        binding: Some(binding),
                        action,
                        event: Some(event),
                    })
                    .collect()
            }
            Self::Static {
                binding,
                description,
                action,
            } => vec![Keybinding {
                description,
                binding: Some(binding),
                action,
                event: None,
            }],
        }
    }
}

impl<S> Clone for KeyHandler<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for KeyHandler<S> {}

impl<S> fmt::Debug for KeyHandler<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Logical {
                event, description, ..
            } => f
                .debug_struct("Logical")
                .field("event", event)
                .field("description", description)
                .finish_non_exhaustive(),
            Self::Static {
                binding,
                description,
                ..
            } => f
                .debug_struct("Static")
                .field("binding", binding)
                .field("description", description)
                .finish_non_exhaustive(),
        }
    }
}

/// A resolved (binding, action, description) unit.
pub struct Keybinding<S> {
    pub description: &'static str,
    /// `None` means the action is listed for discoverability but has no chord.
    pub binding: Option<Binding>,
    pub action: Action<S>,
    /// `None` for static handlers.
    pub event: Option<LogicalEvent>,
}

impl<S> Clone for Keybinding<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Keybinding<S> {}

impl<S> fmt::Debug for Keybinding<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keybinding")
            .field("description", &self.description)
            .field("binding", &self.binding)
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}

/// Build the ordered keybinding set for one mode's handlers.
pub fn build_keybindings<S>(
    handlers: &[KeyHandler<S>],
    overrides: &OverrideTable,
) -> Vec<Keybinding<S>> {
    handlers
        .iter()
        .flat_map(|handler| handler.build(overrides))
        .collect()
}

/// One mode's handler registration.
pub struct ModeKeymap<M, S> {
    pub mode: M,
    /// Unmatched printable input in this mode is treated as typed text.
    pub text_entry: bool,
    pub handlers: Vec<KeyHandler<S>>,
}

impl<M, S> ModeKeymap<M, S> {
    pub fn new(mode: M, handlers: Vec<KeyHandler<S>>) -> Self {
        Self {
            mode,
            text_entry: false,
            handlers,
        }
    }

    /// Mark this mode as a free-text-entry mode.
    pub fn text_entry(mut self) -> Self {
        self.text_entry = true;
        self
    }

    pub fn keybindings(&self, overrides: &OverrideTable) -> Vec<Keybinding<S>> {
        build_keybindings(&self.handlers, overrides)
    }

    /// Whether some handler in this mode is tied to `event`.
    pub fn reaches(&self, event: LogicalEvent) -> bool {
        self.handlers.iter().any(|h| h.event() == Some(event))
    }
}

impl<M: fmt::Debug, S> fmt::Debug for ModeKeymap<M, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModeKeymap")
            .field("mode", &self.mode)
            .field("text_entry", &self.text_entry)
            .field("handlers", &self.handlers)
            .finish()
    }
}

/// Render a binding list for display, e.g. `"Esc, Ctrl+c"`.
pub fn describe_bindings(bindings: &[Binding]) -> String {
    if bindings.is_empty() {
        return "(unbound)".to_string();
    }
    bindings
        .iter()
        .map(Binding::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatterm_config::{Key, OverrideEntry};

    #[derive(Default)]
    struct Counter(u32);

    fn bump(c: &mut Counter) -> anyhow::Result<()> {
        c.0 += 1;
        Ok(())
    }

    #[test]
    fn logical_handler_emits_one_keybinding_per_binding() {
        let handler = KeyHandler::<Counter>::on(LogicalEvent::Cancel, bump);
        let built = handler.build(&OverrideTable::new());

        assert_eq!(built.len(), 2);
        assert_eq!(built[0].binding, Some(Binding::plain(Key::Esc)));
        assert_eq!(built[1].binding, Some(Binding::ctrl('c')));
        assert!(built.iter().all(|kb| kb.event == Some(LogicalEvent::Cancel)));
        assert!(built.iter().all(|kb| kb.description == "Cancel the current operation"));
    }

    #[test]
    fn unbound_logical_handler_stays_discoverable() {
        let overrides = OverrideTable::new().with(LogicalEvent::Quit, OverrideEntry::Unbound);
        let built = KeyHandler::<Counter>::on(LogicalEvent::Quit, bump).build(&overrides);

        assert_eq!(built.len(), 1);
        assert_eq!(built[0].binding, None);
        assert_eq!(built[0].event, Some(LogicalEvent::Quit));
    }

    #[test]
    fn empty_explicit_list_behaves_like_unbound() {
        let overrides =
            OverrideTable::new().with(LogicalEvent::Quit, OverrideEntry::Explicit(vec![]));
        let built = KeyHandler::<Counter>::on(LogicalEvent::Quit, bump).build(&overrides);

        assert_eq!(built.len(), 1);
        assert_eq!(built[0].binding, None);
    }

    #[test]
    fn static_handler_ignores_overrides() {
        let overrides = OverrideTable::new().with(LogicalEvent::Quit, OverrideEntry::Unbound);
        let built =
            KeyHandler::<Counter>::fixed(Binding::char('y'), "Confirm", bump).build(&overrides);

        assert_eq!(built.len(), 1);
        assert_eq!(built[0].binding, Some(Binding::char('y')));
        assert_eq!(built[0].event, None);
    }

    #[test]
    fn build_keybindings_preserves_registration_order() {
        let handlers = vec![
            KeyHandler::<Counter>::on(LogicalEvent::Quit, bump),
            KeyHandler::fixed(Binding::char('y'), "Confirm", bump),
            KeyHandler::on(LogicalEvent::ShowHelp, bump),
        ];
        let built = build_keybindings(&handlers, &OverrideTable::new());
        let bindings: Vec<_> = built.iter().map(|kb| kb.binding).collect();

        assert_eq!(
            bindings,
            vec![
                Some(Binding::ctrl('q')),
                Some(Binding::char('y')),
                Some(Binding::plain(Key::F(1))),
            ]
        );
    }

    #[test]
    fn actions_are_callable_from_keybindings() {
        let built = KeyHandler::<Counter>::on(LogicalEvent::Quit, bump).build(&OverrideTable::new());
        let mut counter = Counter::default();
        (built[0].action)(&mut counter).unwrap();
        assert_eq!(counter.0, 1);
    }

    #[test]
    fn describe_bindings_joins_with_commas() {
        assert_eq!(
            describe_bindings(LogicalEvent::Cancel.default_bindings()),
            "Esc, Ctrl+c"
        );
        assert_eq!(describe_bindings(&[]), "(unbound)");
    }
}
