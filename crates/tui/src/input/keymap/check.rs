//! Consistency checker for the per-mode keybinding registry.
//!
//! Responsibilities:
//! - Detect bindings shared by two or more logical events that are reachable
//!   in the same mode.
//! - Detect logical bindings that collide with a mode's fixed chords.
//! - Detect bare printable-character bindings reachable in a text-entry mode.
//!
//! Does NOT handle:
//! - Deciding whether a failed check is fatal (the caller's policy).
//!
//! Invariants:
//! - Every failure is collected before returning; one run reports them all.
//! - Output order is deterministic: conflicts by binding, events in catalog
//!   order, modes in registry order.
//! - The checker never mutates anything.

use std::collections::BTreeMap;
use std::fmt;

use chatterm_config::{Binding, LogicalEvent, Origin, OverrideTable};

use super::{KeyHandler, ModeKeymap};

/// One logical event taking part in a conflict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictingEvent {
    pub event: LogicalEvent,
    pub origin: Origin,
}

/// A binding claimed by several logical events within at least one mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub binding: Binding,
    /// Events sharing the binding in some offending mode, in catalog order.
    pub events: Vec<ConflictingEvent>,
    /// Modes where two or more of `events` are reachable, in registry order.
    pub modes: Vec<String>,
}

/// A bare printable-character binding reachable in a text-entry mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BareKeyWarning {
    pub binding: Binding,
    pub mode: String,
    /// `None` when the binding comes from a static handler.
    pub event: Option<LogicalEvent>,
    pub description: &'static str,
}

/// A logical binding equal to a fixed chord registered in the same mode.
///
/// Whichever handler is registered first wins at dispatch, so the other one
/// can never fire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCollision {
    pub binding: Binding,
    pub mode: String,
    pub event: LogicalEvent,
    pub origin: Origin,
    /// Description of the fixed handler.
    pub fixed: &'static str,
}

/// Every failure found by one `check` run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictReport {
    pub conflicts: Vec<Conflict>,
    pub static_collisions: Vec<StaticCollision>,
    pub bare_keys: Vec<BareKeyWarning>,
}

impl ConflictReport {
    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty() && self.static_collisions.is_empty() && self.bare_keys.is_empty()
    }
}

impl fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for conflict in &self.conflicts {
            let events = conflict
                .events
                .iter()
                .map(|e| format!("{} ({})", e.event, e.origin))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                f,
                "Keybinding conflict: `{}` is bound to {} in mode(s): {}",
                conflict.binding,
                events,
                conflict.modes.join(", ")
            )?;
        }
        for collision in &self.static_collisions {
            writeln!(
                f,
                "Keybinding conflict: `{}` is bound to {} ({}) and to the fixed \"{}\" key in mode {}",
                collision.binding, collision.event, collision.origin, collision.fixed, collision.mode
            )?;
        }
        for warning in &self.bare_keys {
            let owner = match warning.event {
                Some(event) => event.name(),
                None => warning.description,
            };
            writeln!(
                f,
                "Usability warning: bare key `{}` is bound to {} in text-entry mode {}; \
                 typing `{}` would never reach the text buffer",
                warning.binding, owner, warning.mode, warning.binding
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConflictReport {}

/// Check `overrides` against every mode's registration.
///
/// Returns `Ok(())` when no binding is ambiguous in any mode and no bare
/// character is reachable in a text-entry mode; otherwise a report of every
/// failure.
pub fn check<M, S>(
    overrides: &OverrideTable,
    registry: &[ModeKeymap<M, S>],
) -> Result<(), ConflictReport>
where
    M: fmt::Display,
{
    let report = ConflictReport {
        conflicts: find_conflicts(overrides, registry),
        static_collisions: find_static_collisions(overrides, registry),
        bare_keys: find_bare_keys(overrides, registry),
    };

    if report.is_empty() {
        tracing::debug!(modes = registry.len(), "Keybinding check passed");
        Ok(())
    } else {
        tracing::warn!(
            conflicts = report.conflicts.len(),
            static_collisions = report.static_collisions.len(),
            bare_keys = report.bare_keys.len(),
            "Keybinding check failed"
        );
        Err(report)
    }
}

fn find_conflicts<M, S>(overrides: &OverrideTable, registry: &[ModeKeymap<M, S>]) -> Vec<Conflict>
where
    M: fmt::Display,
{
    let mut groups: BTreeMap<Binding, Vec<ConflictingEvent>> = BTreeMap::new();
    for &event in LogicalEvent::ALL {
        for (binding, origin) in overrides.resolve_with_origin(event) {
            let group = groups.entry(binding).or_default();
            // An event listing the same chord twice is not a conflict with itself.
            if !group.iter().any(|e| e.event == event) {
                group.push(ConflictingEvent { event, origin });
            }
        }
    }

    let mut conflicts = Vec::new();
    for (binding, candidates) in groups {
        if candidates.len() < 2 {
            continue;
        }

        let mut modes = Vec::new();
        let mut involved = vec![false; candidates.len()];
        for keymap in registry {
            let reachable: Vec<usize> = candidates
                .iter()
                .enumerate()
                .filter(|(_, c)| keymap.reaches(c.event))
                .map(|(i, _)| i)
                .collect();
            if reachable.len() >= 2 {
                modes.push(keymap.mode.to_string());
                for i in reachable {
                    involved[i] = true;
                }
            }
        }

        if !modes.is_empty() {
            let events = candidates
                .into_iter()
                .zip(involved)
                .filter_map(|(c, hit)| hit.then_some(c))
                .collect();
            conflicts.push(Conflict {
                binding,
                events,
                modes,
            });
        }
    }
    conflicts
}

fn find_static_collisions<M, S>(
    overrides: &OverrideTable,
    registry: &[ModeKeymap<M, S>],
) -> Vec<StaticCollision>
where
    M: fmt::Display,
{
    let mut collisions = Vec::new();
    for keymap in registry {
        let fixed: Vec<(Binding, &'static str)> = keymap
            .handlers
            .iter()
            .filter_map(|handler| match *handler {
                KeyHandler::Static {
                    binding,
                    description,
                    ..
                } => Some((binding, description)),
                KeyHandler::Logical { .. } => None,
            })
            .collect();
        if fixed.is_empty() {
            continue;
        }

        for handler in &keymap.handlers {
            let Some(event) = handler.event() else {
                continue;
            };
            for (binding, origin) in overrides.resolve_with_origin(event) {
                for &(chord, description) in &fixed {
                    if chord == binding {
                        collisions.push(StaticCollision {
                            binding,
                            mode: keymap.mode.to_string(),
                            event,
                            origin,
                            fixed: description,
                        });
                    }
                }
            }
        }
    }
    collisions
}

fn find_bare_keys<M, S>(
    overrides: &OverrideTable,
    registry: &[ModeKeymap<M, S>],
) -> Vec<BareKeyWarning>
where
    M: fmt::Display,
{
    let mut warnings = Vec::new();
    for keymap in registry.iter().filter(|k| k.text_entry) {
        for keybinding in keymap.keybindings(overrides) {
            let Some(binding) = keybinding.binding else {
                continue;
            };
            if binding.is_bare() {
                warnings.push(BareKeyWarning {
                    binding,
                    mode: keymap.mode.to_string(),
                    event: keybinding.event,
                    description: keybinding.description,
                });
            }
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatterm_config::{Key, Modifiers, OverrideEntry};

    struct State;

    fn noop(_: &mut State) -> anyhow::Result<()> {
        Ok(())
    }

    fn keymap(
        mode: &'static str,
        events: &[LogicalEvent],
    ) -> ModeKeymap<&'static str, State> {
        ModeKeymap::new(
            mode,
            events.iter().map(|&e| KeyHandler::on(e, noop)).collect(),
        )
    }

    #[test]
    fn disjoint_defaults_pass() {
        let registry = vec![keymap(
            "main",
            &[LogicalEvent::NextChannel, LogicalEvent::PrevChannel],
        )];
        assert_eq!(check(&OverrideTable::new(), &registry), Ok(()));
    }

    #[test]
    fn shared_default_in_one_mode_is_one_conflict() {
        // select-up and scroll-up share `k` and `Up` by default.
        let registry = vec![keymap(
            "main",
            &[LogicalEvent::ScrollUp, LogicalEvent::SelectUp],
        )];
        let report = check(&OverrideTable::new(), &registry).unwrap_err();

        let bindings: Vec<_> = report.conflicts.iter().map(|c| c.binding).collect();
        assert_eq!(bindings, vec![Binding::char('k'), Binding::plain(Key::Up)]);
        for conflict in &report.conflicts {
            assert_eq!(conflict.modes, vec!["main".to_string()]);
            assert_eq!(
                conflict.events,
                vec![
                    ConflictingEvent {
                        event: LogicalEvent::ScrollUp,
                        origin: Origin::Default
                    },
                    ConflictingEvent {
                        event: LogicalEvent::SelectUp,
                        origin: Origin::Default
                    },
                ]
            );
        }
    }

    #[test]
    fn shared_binding_in_disjoint_modes_passes() {
        let registry = vec![
            keymap("main", &[LogicalEvent::ScrollUp]),
            keymap("help", &[LogicalEvent::SelectUp]),
        ];
        assert_eq!(check(&OverrideTable::new(), &registry), Ok(()));
    }

    #[test]
    fn override_conflict_reports_origins() {
        let overrides = OverrideTable::new().with(
            LogicalEvent::ShowHelp,
            OverrideEntry::Explicit(vec![Binding::char('j')]),
        );
        let registry = vec![keymap(
            "main",
            &[LogicalEvent::ShowHelp, LogicalEvent::ScrollDown],
        )];
        let report = check(&overrides, &registry).unwrap_err();

        assert_eq!(report.conflicts.len(), 1);
        let conflict = &report.conflicts[0];
        assert_eq!(conflict.binding, Binding::char('j'));
        assert_eq!(conflict.modes, vec!["main".to_string()]);
        assert_eq!(
            conflict.events,
            vec![
                ConflictingEvent {
                    event: LogicalEvent::ShowHelp,
                    origin: Origin::UserOverride
                },
                ConflictingEvent {
                    event: LogicalEvent::ScrollDown,
                    origin: Origin::Default
                },
            ]
        );
    }

    #[test]
    fn only_offending_modes_are_listed() {
        let registry = vec![
            keymap("main", &[LogicalEvent::ScrollUp, LogicalEvent::SelectUp]),
            keymap("help", &[LogicalEvent::ScrollUp]),
            keymap("select", &[LogicalEvent::SelectUp, LogicalEvent::ScrollUp]),
        ];
        let report = check(&OverrideTable::new(), &registry).unwrap_err();
        for conflict in &report.conflicts {
            assert_eq!(conflict.modes, vec!["main".to_string(), "select".to_string()]);
        }
    }

    #[test]
    fn bare_static_key_in_text_entry_mode_warns() {
        let registry = vec![
            ModeKeymap::new(
                "main",
                vec![KeyHandler::fixed(Binding::char('e'), "Edit", noop)],
            )
            .text_entry(),
        ];
        let report = check(&OverrideTable::new(), &registry).unwrap_err();

        assert!(report.conflicts.is_empty());
        assert_eq!(
            report.bare_keys,
            vec![BareKeyWarning {
                binding: Binding::char('e'),
                mode: "main".to_string(),
                event: None,
                description: "Edit",
            }]
        );
    }

    #[test]
    fn bare_key_outside_text_entry_mode_passes() {
        let registry = vec![
            ModeKeymap::new("main", vec![]).text_entry(),
            ModeKeymap::new(
                "help",
                vec![KeyHandler::fixed(Binding::char('e'), "Edit", noop)],
            ),
        ];
        assert_eq!(check(&OverrideTable::new(), &registry), Ok(()));
    }

    #[test]
    fn bare_override_in_text_entry_mode_warns() {
        let overrides = OverrideTable::new().with(
            LogicalEvent::Quit,
            OverrideEntry::Explicit(vec![Binding::char('q')]),
        );
        let registry = vec![keymap("main", &[LogicalEvent::Quit]).text_entry()];
        let report = check(&overrides, &registry).unwrap_err();

        assert_eq!(report.bare_keys.len(), 1);
        assert_eq!(report.bare_keys[0].event, Some(LogicalEvent::Quit));
    }

    #[test]
    fn modified_keys_in_text_entry_mode_pass() {
        let registry = vec![keymap("main", &[LogicalEvent::Quit, LogicalEvent::Cancel]).text_entry()];
        assert_eq!(check(&OverrideTable::new(), &registry), Ok(()));
    }

    #[test]
    fn all_failures_are_collected() {
        let overrides = OverrideTable::new()
            .with(
                LogicalEvent::ShowHelp,
                OverrideEntry::Explicit(vec![Binding::char('j')]),
            )
            .with(
                LogicalEvent::Quit,
                OverrideEntry::Explicit(vec![Binding::plain(Key::F(2))]),
            );
        let registry = vec![
            keymap(
                "main",
                &[
                    LogicalEvent::ShowHelp,
                    LogicalEvent::ScrollDown,
                    LogicalEvent::Quit,
                    LogicalEvent::ToggleChannelList,
                ],
            )
            .text_entry(),
        ];
        let report = check(&overrides, &registry).unwrap_err();

        let bindings: Vec<_> = report.conflicts.iter().map(|c| c.binding).collect();
        assert_eq!(bindings, vec![Binding::char('j'), Binding::plain(Key::F(2))]);
        // `j` from both show-help and scroll-down.
        assert_eq!(report.bare_keys.len(), 2);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let overrides = OverrideTable::new().with(
            LogicalEvent::ShowHelp,
            OverrideEntry::Explicit(vec![Binding::char('j')]),
        );
        let registry = vec![
            keymap("main", &[LogicalEvent::ShowHelp, LogicalEvent::ScrollDown]).text_entry(),
        ];
        let first = check(&overrides, &registry);
        let second = check(&overrides, &registry);
        assert_eq!(first, second);
        assert_eq!(
            first.unwrap_err().to_string(),
            second.unwrap_err().to_string()
        );
    }

    #[test]
    fn report_display_names_everything() {
        let overrides = OverrideTable::new().with(
            LogicalEvent::ShowHelp,
            OverrideEntry::Explicit(vec![Binding::char('j')]),
        );
        let registry = vec![keymap(
            "main",
            &[LogicalEvent::ShowHelp, LogicalEvent::ScrollDown],
        )];
        let text = check(&overrides, &registry).unwrap_err().to_string();

        assert!(text.contains("`j`"));
        assert!(text.contains("show-help (user override)"));
        assert!(text.contains("scroll-down (default)"));
        assert!(text.contains("main"));
    }

    #[test]
    fn override_onto_a_fixed_chord_is_reported() {
        let send = Binding::new(Key::Enter, Modifiers::ALT);
        let overrides = OverrideTable::new().with(
            LogicalEvent::ShowHelp,
            OverrideEntry::Explicit(vec![send]),
        );
        let registry = vec![
            ModeKeymap::new(
                "main",
                vec![
                    KeyHandler::on(LogicalEvent::ShowHelp, noop),
                    KeyHandler::fixed(send, "Send the message", noop),
                ],
            )
            .text_entry(),
        ];
        let report = check(&overrides, &registry).unwrap_err();

        assert!(report.conflicts.is_empty());
        assert!(report.bare_keys.is_empty());
        assert_eq!(
            report.static_collisions,
            vec![StaticCollision {
                binding: send,
                mode: "main".to_string(),
                event: LogicalEvent::ShowHelp,
                origin: Origin::UserOverride,
                fixed: "Send the message",
            }]
        );
        let text = report.to_string();
        assert!(text.contains("show-help (user override)"));
        assert!(text.contains("Send the message"));
    }

    #[test]
    fn fixed_chord_in_another_mode_passes() {
        let overrides = OverrideTable::new().with(
            LogicalEvent::ShowHelp,
            OverrideEntry::Explicit(vec![Binding::ctrl('y')]),
        );
        let registry = vec![
            keymap("main", &[LogicalEvent::ShowHelp]),
            ModeKeymap::new(
                "confirm",
                vec![KeyHandler::fixed(Binding::ctrl('y'), "Confirm", noop)],
            ),
        ];
        assert_eq!(check(&overrides, &registry), Ok(()));
    }
}
