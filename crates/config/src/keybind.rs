//! Key chord values and key-string parsing.
//!
//! Responsibilities:
//! - Define the `Binding` value type (key + modifier set) shared by every crate.
//! - Parse human-readable key strings (`"Ctrl+x"`, `"F1"`, `"j"`) into Bindings.
//! - Render Bindings back into the same syntax for help text and docs.
//!
//! Does NOT handle:
//! - Integration with crossterm (that's in the TUI crate).
//! - Deciding which logical event a Binding belongs to (see `overrides`).
//!
//! Invariants:
//! - Bindings are normalized on construction, so structural equality is chord equality.
//! - `parse_key(&binding.to_string())` returns the same Binding.

use std::fmt;

use thiserror::Error;

/// Errors that can occur when parsing keybindings.
#[derive(Debug, Error, PartialEq)]
pub enum KeybindError {
    /// Invalid key syntax
    #[error("Invalid key syntax: '{key}'. Expected format like 'j', 'Ctrl+x', 'Alt+Enter', 'F1'")]
    InvalidSyntax {
        /// The invalid key string
        key: String,
    },

    /// Unknown key name
    #[error("Unknown key name: '{name}'")]
    UnknownKey {
        /// The unknown key name
        name: String,
    },

    /// A key string inside an override entry failed to parse
    #[error("Invalid keybinding for '{event}': {source}")]
    InvalidOverride {
        /// Name of the logical event the override belongs to
        event: String,
        /// The underlying parse failure
        #[source]
        source: Box<KeybindError>,
    },
}

/// Key symbols a Binding can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// A character key (e.g., 'a', '1', '?'); case-sensitive
    Char(char),
    /// Function key F1-F20
    F(u8),
    /// Escape key
    Esc,
    /// Enter/Return key
    Enter,
    /// Space key
    Space,
    /// Tab key
    Tab,
    /// BackTab (Shift+Tab) key
    BackTab,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Insert key
    Insert,
    /// Home key
    Home,
    /// End key
    End,
    /// Page Up key
    PageUp,
    /// Page Down key
    PageDown,
    /// Up arrow key
    Up,
    /// Down arrow key
    Down,
    /// Left arrow key
    Left,
    /// Right arrow key
    Right,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{}", c),
            Self::F(n) => write!(f, "F{}", n),
            Self::Esc => write!(f, "Esc"),
            Self::Enter => write!(f, "Enter"),
            Self::Space => write!(f, "Space"),
            Self::Tab => write!(f, "Tab"),
            Self::BackTab => write!(f, "BackTab"),
            Self::Backspace => write!(f, "Backspace"),
            Self::Delete => write!(f, "Delete"),
            Self::Insert => write!(f, "Insert"),
            Self::Home => write!(f, "Home"),
            Self::End => write!(f, "End"),
            Self::PageUp => write!(f, "PageUp"),
            Self::PageDown => write!(f, "PageDown"),
            Self::Up => write!(f, "Up"),
            Self::Down => write!(f, "Down"),
            Self::Left => write!(f, "Left"),
            Self::Right => write!(f, "Right"),
        }
    }
}

/// Modifier set for key chords.
///
/// Stored as independent flags, so two sets compare equal regardless of the
/// order the modifiers were written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, PartialOrd, Ord)]
pub struct Modifiers {
    /// Control key pressed
    pub ctrl: bool,
    /// Alt/Meta/Option key pressed
    pub alt: bool,
    /// Shift key pressed
    pub shift: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
    };

    /// Control only.
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        alt: false,
        shift: false,
    };

    /// Alt only.
    pub const ALT: Modifiers = Modifiers {
        ctrl: false,
        alt: true,
        shift: false,
    };

    /// Returns true if no modifier is held.
    pub const fn is_empty(self) -> bool {
        !self.ctrl && !self.alt && !self.shift
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.alt {
            parts.push("Alt");
        }
        if self.shift {
            parts.push("Shift");
        }
        if parts.is_empty() {
            write!(f, "None")
        } else {
            write!(f, "{}", parts.join("+"))
        }
    }
}

/// A normalized physical key chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Binding {
    key: Key,
    modifiers: Modifiers,
}

impl Binding {
    /// Build a Binding, normalizing equivalent spellings of the same chord.
    ///
    /// - `Char(' ')` becomes `Space`, and Shift on `Space` is dropped.
    /// - Shift on a character key is folded into the character itself
    ///   (`Shift+g` becomes `G`), since terminals report the shifted glyph.
    /// - `Shift+Tab` becomes `BackTab`, and the shift terminals report
    ///   alongside `BackTab` is dropped.
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        match key {
            Key::Char(' ') | Key::Space => Self {
                key: Key::Space,
                modifiers: Modifiers {
                    shift: false,
                    ..modifiers
                },
            },
            Key::Char(c) if modifiers.shift => Self {
                key: Key::Char(c.to_ascii_uppercase()),
                modifiers: Modifiers {
                    shift: false,
                    ..modifiers
                },
            },
            Key::Tab | Key::BackTab if modifiers.shift => Self {
                key: Key::BackTab,
                modifiers: Modifiers {
                    shift: false,
                    ..modifiers
                },
            },
            _ => Self { key, modifiers },
        }
    }

    /// An unmodified key.
    pub const fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    /// An unmodified character key.
    pub const fn char(c: char) -> Self {
        Self::new(Key::Char(c), Modifiers::NONE)
    }

    /// `Ctrl+<c>`.
    pub const fn ctrl(c: char) -> Self {
        Self::new(Key::Char(c), Modifiers::CTRL)
    }

    /// `Alt+<c>`.
    pub const fn alt(c: char) -> Self {
        Self::new(Key::Char(c), Modifiers::ALT)
    }

    pub const fn key(&self) -> Key {
        self.key
    }

    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// True for an unmodified printable character (including space).
    ///
    /// Such a binding competes with ordinary typing in text-entry modes.
    pub fn is_bare(&self) -> bool {
        if !self.modifiers.is_empty() {
            return false;
        }
        match self.key {
            Key::Char(c) => !c.is_control(),
            Key::Space => true,
            _ => false,
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.modifiers, self.key)
        }
    }
}

/// Parse a key string like "Ctrl+x", "F1", "Shift+Tab" into a Binding.
///
/// # Examples
///
/// ```
/// use chatterm_config::keybind::{Binding, Key, parse_key};
///
/// let key = parse_key("Ctrl+x").unwrap();
/// assert_eq!(key, Binding::ctrl('x'));
///
/// let key = parse_key("F1").unwrap();
/// assert_eq!(key.key(), Key::F(1));
/// ```
pub fn parse_key(key_str: &str) -> Result<Binding, KeybindError> {
    let key_str = key_str.trim();

    if key_str.is_empty() {
        return Err(KeybindError::InvalidSyntax {
            key: key_str.to_string(),
        });
    }

    // A lone "+" names the plus key; "Ctrl++" names Ctrl and plus.
    let (prefix, key_name) = match key_str.strip_suffix("++") {
        Some(rest) => (rest, "+"),
        None if key_str == "+" => ("", "+"),
        None => match key_str.rsplit_once('+') {
            Some((rest, last)) => (rest, last.trim()),
            None => ("", key_str),
        },
    };

    let mut modifiers = Modifiers::NONE;
    if !prefix.is_empty() {
        for part in prefix.split('+').map(str::trim) {
            match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => modifiers.ctrl = true,
                "alt" | "meta" => modifiers.alt = true,
                "shift" => modifiers.shift = true,
                _ => {
                    return Err(KeybindError::InvalidSyntax {
                        key: key_str.to_string(),
                    });
                }
            }
        }
    }

    if key_name.is_empty() || is_modifier_name(key_name) {
        return Err(KeybindError::InvalidSyntax {
            key: key_str.to_string(),
        });
    }

    let code = parse_key_code(key_name)?;
    Ok(Binding::new(code, modifiers))
}

fn is_modifier_name(name: &str) -> bool {
    matches!(
        name.to_ascii_lowercase().as_str(),
        "ctrl" | "control" | "alt" | "meta" | "shift"
    )
}

/// Parse a key code name (without modifiers).
fn parse_key_code(name: &str) -> Result<Key, KeybindError> {
    let name_lower = name.to_ascii_lowercase();

    match name_lower.as_str() {
        "esc" | "escape" => return Ok(Key::Esc),
        "enter" | "return" => return Ok(Key::Enter),
        "space" => return Ok(Key::Space),
        "tab" => return Ok(Key::Tab),
        "backtab" => return Ok(Key::BackTab),
        "backspace" => return Ok(Key::Backspace),
        "delete" | "del" => return Ok(Key::Delete),
        "insert" | "ins" => return Ok(Key::Insert),
        "home" => return Ok(Key::Home),
        "end" => return Ok(Key::End),
        "pageup" | "page_up" | "pgup" => return Ok(Key::PageUp),
        "pagedown" | "page_down" | "pgdn" => return Ok(Key::PageDown),
        "up" => return Ok(Key::Up),
        "down" => return Ok(Key::Down),
        "left" => return Ok(Key::Left),
        "right" => return Ok(Key::Right),
        _ => {}
    }

    // Function keys (F1-F20)
    if let Some(num_str) = name_lower.strip_prefix('f')
        && let Ok(num) = num_str.parse::<u8>()
        && (1..=20).contains(&num)
    {
        return Ok(Key::F(num));
    }

    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(Key::Char(c));
    }

    Err(KeybindError::UnknownKey {
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_char() {
        let key = parse_key("q").unwrap();
        assert_eq!(key.key(), Key::Char('q'));
        assert!(key.modifiers().is_empty());
    }

    #[test]
    fn test_parse_ctrl_combo() {
        let key = parse_key("Ctrl+x").unwrap();
        assert_eq!(key, Binding::ctrl('x'));
    }

    #[test]
    fn test_parse_meta_is_alt() {
        assert_eq!(parse_key("Meta+f").unwrap(), parse_key("Alt+f").unwrap());
    }

    #[test]
    fn test_modifier_order_is_irrelevant() {
        assert_eq!(
            parse_key("Ctrl+Alt+x").unwrap(),
            parse_key("Alt+Ctrl+x").unwrap()
        );
    }

    #[test]
    fn test_parse_function_key() {
        assert_eq!(parse_key("F1").unwrap().key(), Key::F(1));
        assert_eq!(parse_key("f12").unwrap().key(), Key::F(12));
        assert!(parse_key("F0").is_err());
        assert!(parse_key("F21").is_err());
    }

    #[test]
    fn test_parse_special_keys() {
        assert_eq!(parse_key("Esc").unwrap().key(), Key::Esc);
        assert_eq!(parse_key("escape").unwrap().key(), Key::Esc);
        assert_eq!(parse_key("Return").unwrap().key(), Key::Enter);
        assert_eq!(parse_key("pgdn").unwrap().key(), Key::PageDown);
        assert_eq!(parse_key("del").unwrap().key(), Key::Delete);
    }

    #[test]
    fn test_shift_folds_into_char() {
        let key = parse_key("Shift+g").unwrap();
        assert_eq!(key, Binding::char('G'));
        assert!(key.modifiers().is_empty());
    }

    #[test]
    fn test_shift_space_is_plain_space() {
        let shift = Modifiers {
            shift: true,
            ..Modifiers::NONE
        };
        assert_eq!(Binding::new(Key::Space, shift), Binding::plain(Key::Space));
        assert_eq!(Binding::new(Key::Char(' '), shift), Binding::plain(Key::Space));
        assert_eq!(parse_key("Shift+Space").unwrap(), Binding::plain(Key::Space));
        assert!(Binding::new(Key::Space, shift).is_bare());
    }

    #[test]
    fn test_shift_tab_is_backtab() {
        assert_eq!(parse_key("Shift+Tab").unwrap(), Binding::plain(Key::BackTab));
        assert_eq!(
            Binding::new(
                Key::BackTab,
                Modifiers {
                    shift: true,
                    ..Modifiers::NONE
                }
            ),
            Binding::plain(Key::BackTab)
        );
    }

    #[test]
    fn test_space_char_is_space_key() {
        assert_eq!(Binding::char(' '), Binding::plain(Key::Space));
        assert_eq!(parse_key("Space").unwrap(), Binding::plain(Key::Space));
    }

    #[test]
    fn test_plus_key() {
        assert_eq!(parse_key("+").unwrap(), Binding::char('+'));
        assert_eq!(
            parse_key("Ctrl++").unwrap(),
            Binding::new(Key::Char('+'), Modifiers::CTRL)
        );
    }

    #[test]
    fn test_parse_with_spaces() {
        assert_eq!(parse_key("Ctrl + x").unwrap(), Binding::ctrl('x'));
    }

    #[test]
    fn test_invalid_syntax() {
        assert!(matches!(
            parse_key(""),
            Err(KeybindError::InvalidSyntax { .. })
        ));
        assert!(matches!(
            parse_key("Ctrl+Shift"),
            Err(KeybindError::InvalidSyntax { .. })
        ));
        assert!(matches!(
            parse_key("Hyper+x"),
            Err(KeybindError::InvalidSyntax { .. })
        ));
    }

    #[test]
    fn test_unknown_key() {
        assert!(matches!(
            parse_key("Ctrl+Unknown"),
            Err(KeybindError::UnknownKey { .. })
        ));
    }

    #[test]
    fn test_case_sensitive_char_keys() {
        assert_ne!(parse_key("x").unwrap(), parse_key("X").unwrap());
    }

    #[test]
    fn test_bare_bindings() {
        assert!(Binding::char('e').is_bare());
        assert!(Binding::char('G').is_bare());
        assert!(Binding::plain(Key::Space).is_bare());
        assert!(!Binding::ctrl('e').is_bare());
        assert!(!Binding::plain(Key::Enter).is_bare());
        assert!(!Binding::plain(Key::F(1)).is_bare());
    }

    #[test]
    fn test_display_round_trips() {
        for text in ["Ctrl+q", "Alt+8", "F1", "j", "G", "Esc", "BackTab", "Ctrl+Alt+x"] {
            let binding = parse_key(text).unwrap();
            assert_eq!(parse_key(&binding.to_string()).unwrap(), binding);
        }
        assert_eq!(Binding::ctrl('q').to_string(), "Ctrl+q");
        assert_eq!(Binding::char('j').to_string(), "j");
    }
}
