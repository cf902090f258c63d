//! Input entry point for the app.
//!
//! Responsibilities:
//! - Route each input event through the active mode's handlers.
//! - Provide the per-mode fallback for input no keybinding claims.
//!
//! Non-responsibilities:
//! - Choosing which keys do what (see `input::keymap::bindings`).
//!
//! Invariants:
//! - Keybindings are rebuilt from the override table for every event.
//! - Only text-entry modes turn unmatched printable keys into text.

use chatterm_config::{Binding, Key, OverrideTable};

use crate::app::actions::system;
use crate::app::{App, Mode};
use crate::event::InputEvent;
use crate::input::keymap::{Dispatch, bindings, dispatch};

impl App {
    /// Dispatch one input event in the current mode.
    pub fn handle_input(
        &mut self,
        event: &InputEvent,
        overrides: &OverrideTable,
    ) -> anyhow::Result<Dispatch> {
        if matches!(event, InputEvent::Key(_)) {
            self.status = None;
        }
        let handlers = bindings::handlers_for(self.mode);
        let mode = self.mode;
        dispatch(&handlers, event, overrides, self, |app, event| {
            app.fallback(mode, event)
        })
    }

    fn fallback(&mut self, mode: Mode, event: &InputEvent) -> anyhow::Result<()> {
        match mode {
            Mode::Main => self.compose_fallback(event),
            Mode::ChannelSelect => self.filter_fallback(event),
            Mode::DeleteMessageConfirm | Mode::LeaveChannelConfirm => {
                if matches!(event, InputEvent::Key(_)) {
                    system::cancel(self)?;
                }
            }
            Mode::ShowHelp
            | Mode::ViewMessage
            | Mode::UrlSelect
            | Mode::MessageSelect
            | Mode::FlaggedPosts => {}
        }
        Ok(())
    }

    fn compose_fallback(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Paste(text) => self.editor.insert_str(text),
            InputEvent::Key(binding) if binding.modifiers().is_empty() => match binding.key() {
                Key::Enter if self.multiline => self.editor.insert_char('\n'),
                Key::Enter => self.send_message(),
                Key::Backspace => self.editor.backspace(),
                _ => {
                    if let Some(c) = typed_char(binding) {
                        self.editor.insert_char(c);
                    }
                }
            },
            _ => {}
        }
    }

    fn filter_fallback(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Paste(text) => self.channel_filter.push_str(text.trim()),
            InputEvent::Key(binding) if binding.key() == Key::Backspace => {
                self.channel_filter.pop();
            }
            InputEvent::Key(binding) => match typed_char(binding) {
                Some(c) => self.channel_filter.push(c),
                None => return,
            },
            _ => return,
        }
        self.channel_selected = 0;
    }
}

/// The character an unmodified printable key types, if any.
fn typed_char(binding: &Binding) -> Option<char> {
    if !binding.is_bare() {
        return None;
    }
    match binding.key() {
        Key::Char(c) => Some(c),
        Key::Space => Some(' '),
        _ => None,
    }
}
