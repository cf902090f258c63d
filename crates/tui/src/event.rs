//! Event handling for the TUI.
//!
//! Responsibilities:
//! - Define the input events the dispatcher sees (`InputEvent`).
//! - Convert crossterm terminal events into `InputEvent`s.
//! - Define the loop events carried on the serial event channel.
//!
//! Invariants:
//! - Key releases never become key events.
//! - Keys with no `Binding` equivalent become `InputEvent::Other`.

use chatterm_config::{Binding, Key, Modifiers};
use crossterm::event::{Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A raw input event as seen by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key chord.
    Key(Binding),
    /// Bracketed-paste text.
    Paste(String),
    /// The terminal was resized.
    Resize(u16, u16),
    /// Anything else (focus changes, mouse events, unmapped keys).
    Other,
}

impl From<TermEvent> for InputEvent {
    fn from(event: TermEvent) -> Self {
        match event {
            TermEvent::Key(key) => key_to_input(key),
            TermEvent::Paste(text) => Self::Paste(text),
            TermEvent::Resize(width, height) => Self::Resize(width, height),
            _ => Self::Other,
        }
    }
}

fn key_to_input(key: KeyEvent) -> InputEvent {
    if key.kind == KeyEventKind::Release {
        return InputEvent::Other;
    }
    match key_code_to_key(key.code) {
        Some(code) => InputEvent::Key(Binding::new(code, modifiers(key.modifiers))),
        None => InputEvent::Other,
    }
}

fn key_code_to_key(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::F(n) if (1..=20).contains(&n) => Key::F(n),
        KeyCode::Esc => Key::Esc,
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Insert => Key::Insert,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        _ => return None,
    };
    Some(key)
}

fn modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.intersects(KeyModifiers::ALT | KeyModifiers::META),
        shift: mods.contains(KeyModifiers::SHIFT),
    }
}

/// Severity of a background notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// The result of background work, delivered back into the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// Events on the serial event channel.
#[derive(Debug, Clone)]
pub enum Event {
    Input(InputEvent),
    Notice(Notice),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> TermEvent {
        TermEvent::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn ctrl_char_maps_to_ctrl_binding() {
        assert_eq!(
            InputEvent::from(key(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            InputEvent::Key(Binding::ctrl('q'))
        );
    }

    #[test]
    fn meta_maps_to_alt() {
        assert_eq!(
            InputEvent::from(key(KeyCode::Char('f'), KeyModifiers::META)),
            InputEvent::Key(Binding::alt('f'))
        );
    }

    #[test]
    fn shifted_char_drops_shift() {
        assert_eq!(
            InputEvent::from(key(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            InputEvent::Key(Binding::char('G'))
        );
    }

    #[test]
    fn shift_space_is_plain_space() {
        assert_eq!(
            InputEvent::from(key(KeyCode::Char(' '), KeyModifiers::SHIFT)),
            InputEvent::Key(Binding::plain(Key::Space))
        );
    }

    #[test]
    fn shift_backtab_is_plain_backtab() {
        assert_eq!(
            InputEvent::from(key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            InputEvent::Key(Binding::plain(Key::BackTab))
        );
    }

    #[test]
    fn release_is_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(InputEvent::from(TermEvent::Key(release)), InputEvent::Other);
    }

    #[test]
    fn unmapped_keys_are_other() {
        assert_eq!(
            InputEvent::from(key(KeyCode::CapsLock, KeyModifiers::NONE)),
            InputEvent::Other
        );
        assert_eq!(
            InputEvent::from(key(KeyCode::F(24), KeyModifiers::NONE)),
            InputEvent::Other
        );
    }

    #[test]
    fn paste_and_resize_pass_through() {
        assert_eq!(
            InputEvent::from(TermEvent::Paste("hi".to_string())),
            InputEvent::Paste("hi".to_string())
        );
        assert_eq!(
            InputEvent::from(TermEvent::Resize(80, 24)),
            InputEvent::Resize(80, 24)
        );
    }
}
