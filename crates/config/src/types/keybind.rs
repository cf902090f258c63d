//! Logical event catalog and raw keybinding override types.
//!
//! Responsibilities:
//! - Define the closed set of logical events (`LogicalEvent`) with their
//!   stable names, descriptions, and built-in default bindings.
//! - Provide the name <-> event lookup used by config parsing and help views.
//! - Define `KeybindOverrides`, the raw (unparsed) override section of the
//!   config file.
//!
//! Does NOT handle:
//! - Parsing key strings (see `keybind` module at crate root).
//! - Resolving effective bindings (see `overrides` module).
//!
//! Invariants:
//! - Every `LogicalEvent` has at least one default binding.
//! - Serde names are kebab-case and identical to `LogicalEvent::name()`.
//! - `KeybindOverrides` uses `BTreeMap` for deterministic serialization.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::keybind::{Binding, Key, Modifiers};

/// A named, user-overridable intent.
///
/// Ordering follows declaration order, which is also catalog order in help
/// output and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum LogicalEvent {
    Quit,
    VtyRefresh,
    ClearUnread,
    Cancel,
    ToggleMessagePreview,
    ToggleMultiline,
    EnterFastSelect,
    NextChannel,
    PrevChannel,
    NextUnreadChannel,
    LastChannel,
    EnterUrlOpen,
    EnterSelectMode,
    ReplyRecent,
    ShowHelp,
    EnterFlaggedPosts,
    ToggleChannelList,
    LeaveChannel,
    EditorKillToEol,
    EditorKillToBol,
    EditorBol,
    EditorEol,
    EditorPrevChar,
    EditorNextChar,
    EditorPrevWord,
    EditorNextWord,
    EditorDeletePrevWord,
    EditorDeleteChar,
    EditorTransposeChars,
    EditorYank,
    PageUp,
    PageDown,
    ScrollUp,
    ScrollDown,
    ScrollTop,
    ScrollBottom,
    SelectUp,
    SelectDown,
    SearchSelectUp,
    SearchSelectDown,
    ActivateListItem,
    FlagMessage,
    YankMessage,
    DeleteMessage,
    EditMessage,
    ReplyMessage,
    OpenMessageUrl,
    ViewMessage,
}

const fn key(k: Key) -> Binding {
    Binding::plain(k)
}

const fn ctrl(c: char) -> Binding {
    Binding::ctrl(c)
}

const fn alt(c: char) -> Binding {
    Binding::alt(c)
}

const fn ch(c: char) -> Binding {
    Binding::char(c)
}

impl LogicalEvent {
    /// Every event, in catalog order.
    pub const ALL: &'static [LogicalEvent] = &[
        Self::Quit,
        Self::VtyRefresh,
        Self::ClearUnread,
        Self::Cancel,
        Self::ToggleMessagePreview,
        Self::ToggleMultiline,
        Self::EnterFastSelect,
        Self::NextChannel,
        Self::PrevChannel,
        Self::NextUnreadChannel,
        Self::LastChannel,
        Self::EnterUrlOpen,
        Self::EnterSelectMode,
        Self::ReplyRecent,
        Self::ShowHelp,
        Self::EnterFlaggedPosts,
        Self::ToggleChannelList,
        Self::LeaveChannel,
        Self::EditorKillToEol,
        Self::EditorKillToBol,
        Self::EditorBol,
        Self::EditorEol,
        Self::EditorPrevChar,
        Self::EditorNextChar,
        Self::EditorPrevWord,
        Self::EditorNextWord,
        Self::EditorDeletePrevWord,
        Self::EditorDeleteChar,
        Self::EditorTransposeChars,
        Self::EditorYank,
        Self::PageUp,
        Self::PageDown,
        Self::ScrollUp,
        Self::ScrollDown,
        Self::ScrollTop,
        Self::ScrollBottom,
        Self::SelectUp,
        Self::SelectDown,
        Self::SearchSelectUp,
        Self::SearchSelectDown,
        Self::ActivateListItem,
        Self::FlagMessage,
        Self::YankMessage,
        Self::DeleteMessage,
        Self::EditMessage,
        Self::ReplyMessage,
        Self::OpenMessageUrl,
        Self::ViewMessage,
    ];

    /// Stable name used in config files and help output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Quit => "quit",
            Self::VtyRefresh => "vty-refresh",
            Self::ClearUnread => "clear-unread",
            Self::Cancel => "cancel",
            Self::ToggleMessagePreview => "toggle-message-preview",
            Self::ToggleMultiline => "toggle-multiline",
            Self::EnterFastSelect => "enter-fast-select",
            Self::NextChannel => "next-channel",
            Self::PrevChannel => "prev-channel",
            Self::NextUnreadChannel => "next-unread-channel",
            Self::LastChannel => "last-channel",
            Self::EnterUrlOpen => "enter-url-open",
            Self::EnterSelectMode => "enter-select-mode",
            Self::ReplyRecent => "reply-recent",
            Self::ShowHelp => "show-help",
            Self::EnterFlaggedPosts => "enter-flagged-posts",
            Self::ToggleChannelList => "toggle-channel-list",
            Self::LeaveChannel => "leave-channel",
            Self::EditorKillToEol => "editor-kill-to-eol",
            Self::EditorKillToBol => "editor-kill-to-bol",
            Self::EditorBol => "editor-bol",
            Self::EditorEol => "editor-eol",
            Self::EditorPrevChar => "editor-prev-char",
            Self::EditorNextChar => "editor-next-char",
            Self::EditorPrevWord => "editor-prev-word",
            Self::EditorNextWord => "editor-next-word",
            Self::EditorDeletePrevWord => "editor-delete-prev-word",
            Self::EditorDeleteChar => "editor-delete-char",
            Self::EditorTransposeChars => "editor-transpose-chars",
            Self::EditorYank => "editor-yank",
            Self::PageUp => "page-up",
            Self::PageDown => "page-down",
            Self::ScrollUp => "scroll-up",
            Self::ScrollDown => "scroll-down",
            Self::ScrollTop => "scroll-top",
            Self::ScrollBottom => "scroll-bottom",
            Self::SelectUp => "select-up",
            Self::SelectDown => "select-down",
            Self::SearchSelectUp => "search-select-up",
            Self::SearchSelectDown => "search-select-down",
            Self::ActivateListItem => "activate-list-item",
            Self::FlagMessage => "flag-message",
            Self::YankMessage => "yank-message",
            Self::DeleteMessage => "delete-message",
            Self::EditMessage => "edit-message",
            Self::ReplyMessage => "reply-message",
            Self::OpenMessageUrl => "open-message-url",
            Self::ViewMessage => "view-message",
        }
    }

    /// Look up an event by its stable name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|event| event.name() == name)
    }

    /// Human-readable description for help output.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Quit => "Quit",
            Self::VtyRefresh => "Redraw the screen",
            Self::ClearUnread => "Clear unread indicators for all channels",
            Self::Cancel => "Cancel the current operation",
            Self::ToggleMessagePreview => "Toggle the message preview",
            Self::ToggleMultiline => "Toggle multi-line message editing",
            Self::EnterFastSelect => "Filter channels by name",
            Self::NextChannel => "Go to the next channel",
            Self::PrevChannel => "Go to the previous channel",
            Self::NextUnreadChannel => "Go to the next channel with unread messages",
            Self::LastChannel => "Go to the most recently visited channel",
            Self::EnterUrlOpen => "Select and open a URL from the channel",
            Self::EnterSelectMode => "Select a message",
            Self::ReplyRecent => "Reply to the most recent message",
            Self::ShowHelp => "Show this help screen",
            Self::EnterFlaggedPosts => "View flagged posts",
            Self::ToggleChannelList => "Toggle the channel list",
            Self::LeaveChannel => "Leave the current channel",
            Self::EditorKillToEol => "Delete to the end of the line",
            Self::EditorKillToBol => "Delete to the beginning of the line",
            Self::EditorBol => "Move cursor to the beginning of the line",
            Self::EditorEol => "Move cursor to the end of the line",
            Self::EditorPrevChar => "Move cursor one character left",
            Self::EditorNextChar => "Move cursor one character right",
            Self::EditorPrevWord => "Move cursor one word left",
            Self::EditorNextWord => "Move cursor one word right",
            Self::EditorDeletePrevWord => "Delete the previous word",
            Self::EditorDeleteChar => "Delete the character under the cursor",
            Self::EditorTransposeChars => "Transpose the characters around the cursor",
            Self::EditorYank => "Paste the most recently deleted text",
            Self::PageUp => "Page up",
            Self::PageDown => "Page down",
            Self::ScrollUp => "Scroll up",
            Self::ScrollDown => "Scroll down",
            Self::ScrollTop => "Scroll to the top",
            Self::ScrollBottom => "Scroll to the bottom",
            Self::SelectUp => "Select the previous item",
            Self::SelectDown => "Select the next item",
            Self::SearchSelectUp => "Select the previous match",
            Self::SearchSelectDown => "Select the next match",
            Self::ActivateListItem => "Activate the selected item",
            Self::FlagMessage => "Flag or unflag the selected message",
            Self::YankMessage => "Copy the selected message to the clipboard",
            Self::DeleteMessage => "Delete the selected message",
            Self::EditMessage => "Edit the selected message",
            Self::ReplyMessage => "Reply to the selected message",
            Self::OpenMessageUrl => "Open the first URL in the selected message",
            Self::ViewMessage => "View the selected message",
        }
    }

    /// Built-in default bindings, in display priority order.
    pub fn default_bindings(self) -> &'static [Binding] {
        match self {
            Self::Quit => const { &[ctrl('q')] },
            Self::VtyRefresh => const { &[ctrl('l')] },
            Self::ClearUnread => const { &[alt('l')] },
            Self::Cancel => const { &[key(Key::Esc), ctrl('c')] },
            Self::ToggleMessagePreview => const { &[alt('p')] },
            Self::ToggleMultiline => const { &[alt('e')] },
            Self::EnterFastSelect => const { &[ctrl('g')] },
            Self::NextChannel => const { &[ctrl('n')] },
            Self::PrevChannel => const { &[ctrl('p')] },
            Self::NextUnreadChannel => const { &[alt('a')] },
            Self::LastChannel => const { &[alt('s')] },
            Self::EnterUrlOpen => const { &[ctrl('o')] },
            Self::EnterSelectMode => const { &[ctrl('s')] },
            Self::ReplyRecent => const { &[ctrl('r')] },
            Self::ShowHelp => const { &[key(Key::F(1))] },
            Self::EnterFlaggedPosts => const { &[alt('8')] },
            Self::ToggleChannelList => const { &[key(Key::F(2))] },
            Self::LeaveChannel => const { &[alt('x')] },
            Self::EditorKillToEol => const { &[ctrl('k')] },
            Self::EditorKillToBol => const { &[ctrl('u')] },
            Self::EditorBol => const { &[ctrl('a'), key(Key::Home)] },
            Self::EditorEol => const { &[ctrl('e'), key(Key::End)] },
            Self::EditorPrevChar => const { &[key(Key::Left), ctrl('b')] },
            Self::EditorNextChar => const { &[key(Key::Right), ctrl('f')] },
            Self::EditorPrevWord => const { &[alt('b')] },
            Self::EditorNextWord => const { &[alt('f')] },
            Self::EditorDeletePrevWord => const { &[ctrl('w')] },
            Self::EditorDeleteChar => const { &[key(Key::Delete), ctrl('d')] },
            Self::EditorTransposeChars => const { &[ctrl('t')] },
            Self::EditorYank => const { &[ctrl('y')] },
            Self::PageUp => const { &[key(Key::PageUp)] },
            Self::PageDown => const { &[key(Key::PageDown)] },
            Self::ScrollUp => const { &[key(Key::Up), ch('k')] },
            Self::ScrollDown => const { &[key(Key::Down), ch('j')] },
            Self::ScrollTop => const { &[key(Key::Home), ch('g')] },
            Self::ScrollBottom => const { &[key(Key::End), ch('G')] },
            Self::SelectUp => const { &[ch('k'), key(Key::Up)] },
            Self::SelectDown => const { &[ch('j'), key(Key::Down)] },
            Self::SearchSelectUp => const { &[ctrl('p'), key(Key::Up)] },
            Self::SearchSelectDown => const { &[ctrl('n'), key(Key::Down)] },
            Self::ActivateListItem => const { &[key(Key::Enter)] },
            Self::FlagMessage => const { &[ch('f')] },
            Self::YankMessage => const { &[ch('y')] },
            Self::DeleteMessage => const { &[ch('d')] },
            Self::EditMessage => const { &[ch('e')] },
            Self::ReplyMessage => const { &[ch('r')] },
            Self::OpenMessageUrl => const { &[ch('o')] },
            Self::ViewMessage => const { &[ch('v')] },
        }
    }
}

impl fmt::Display for LogicalEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The right-hand side of a keybinding override as written in the config file.
///
/// Either a single key string (`"Ctrl+x"` or `"unbound"`) or a list of key
/// strings (`["Ctrl+x", "F10"]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeySpec {
    One(String),
    Many(Vec<String>),
}

impl KeySpec {
    /// Marker string that removes every binding for an event.
    pub const UNBOUND: &'static str = "unbound";

    /// Returns true if this spec is the `"unbound"` marker (case-insensitive).
    pub fn is_unbound(&self) -> bool {
        matches!(self, Self::One(s) if s.trim().eq_ignore_ascii_case(Self::UNBOUND))
    }
}

/// User-defined keybinding overrides, as read from the config file.
///
/// Only events explicitly listed here override the defaults; all others use
/// built-in bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeybindOverrides {
    /// Map of event -> key spec.
    pub overrides: BTreeMap<LogicalEvent, KeySpec>,
}

impl KeybindOverrides {
    /// Returns true if there are no overrides configured.
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Get the override for a specific event, if any.
    pub fn get(&self, event: LogicalEvent) -> Option<&KeySpec> {
        self.overrides.get(&event)
    }
}
