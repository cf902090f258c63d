//! Application state for the chat front-end.
//!
//! Responsibilities:
//! - Own all mutable UI state (mode, channels, editor, selections).
//! - Queue side effects for the runtime to execute.
//!
//! Does NOT handle:
//! - Key resolution (see `input::keymap`).
//! - Performing I/O (see `runtime::side_effects`).
//!
//! Invariants:
//! - There is always at least one channel, and `current` indexes into `channels`.
//! - Only actions and mode fallbacks mutate `App`; the event loop owns it exclusively.

pub mod actions;
pub mod editor;
mod input;
pub mod mode;
pub mod model;

use chatterm_config::constants::DEFAULT_CHANNEL;
use chatterm_config::{OverrideTable, Settings};

use crate::event::Notice;
use crate::input::help::help_text;

pub use editor::Editor;
pub use mode::Mode;
pub use model::{Channel, Message};

/// Author name used for messages the client generates itself.
pub const SYSTEM_AUTHOR: &str = "chatterm";

/// Work an action asks the runtime to perform outside the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    CopyToClipboard(String),
    OpenUrl(String),
}

#[derive(Debug)]
pub struct App {
    pub mode: Mode,
    pub channels: Vec<Channel>,
    pub current: usize,
    pub last_channel: Option<usize>,
    pub editor: Editor,
    pub multiline: bool,
    pub show_message_preview: bool,
    pub show_channel_list: bool,
    pub user_name: String,
    /// Lines scrolled back from the newest message in the message pane.
    pub message_scroll: u16,
    /// Scroll offset of the help and message-view overlays.
    pub overlay_scroll: u16,
    /// Message selected in message-select mode and its follow-up modes.
    pub selected_message: Option<u64>,
    pub urls: Vec<String>,
    pub url_selected: usize,
    pub flagged_selected: usize,
    pub channel_filter: String,
    pub channel_selected: usize,
    pub reply_to: Option<u64>,
    pub editing: Option<u64>,
    pub status: Option<Notice>,
    pub quit_requested: bool,
    pub redraw_requested: bool,
    help_lines: Vec<String>,
    side_effects: Vec<SideEffect>,
    next_message_id: u64,
}

impl App {
    /// Create the application state seeded from settings.
    ///
    /// `overrides` is only used to render the help screen.
    pub fn new(settings: &Settings, overrides: &OverrideTable) -> Self {
        let mut names: Vec<String> = settings.channels.clone();
        if names.is_empty() {
            names.push(DEFAULT_CHANNEL.to_string());
        }

        let mut next_message_id = 1;
        let channels = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                let mut channel = Channel::new(name);
                channel.messages.push(Message {
                    id: next_message_id,
                    author: SYSTEM_AUTHOR.to_string(),
                    text: format!(
                        "Welcome to ~{}. Docs live at https://github.com/chatterm/chatterm",
                        channel.name
                    ),
                    flagged: false,
                    reply_to: None,
                });
                next_message_id += 1;
                if i > 0 {
                    channel.unread = channel.messages.len();
                }
                channel
            })
            .collect();

        Self {
            mode: Mode::Main,
            channels,
            current: 0,
            last_channel: None,
            editor: Editor::new(),
            multiline: false,
            show_message_preview: settings.show_message_preview,
            show_channel_list: settings.show_channel_list,
            user_name: settings.user_name.clone(),
            message_scroll: 0,
            overlay_scroll: 0,
            selected_message: None,
            urls: Vec::new(),
            url_selected: 0,
            flagged_selected: 0,
            channel_filter: String::new(),
            channel_selected: 0,
            reply_to: None,
            editing: None,
            status: None,
            quit_requested: false,
            redraw_requested: false,
            help_lines: help_text(overrides).lines().map(str::to_string).collect(),
            side_effects: Vec::new(),
            next_message_id,
        }
    }

    pub fn current_channel(&self) -> &Channel {
        &self.channels[self.current]
    }

    pub fn current_channel_mut(&mut self) -> &mut Channel {
        &mut self.channels[self.current]
    }

    pub fn help_lines(&self) -> &[String] {
        &self.help_lines
    }

    /// Switch to channel `index`, remembering the previous one.
    pub fn switch_channel(&mut self, index: usize) {
        if index >= self.channels.len() || index == self.current {
            return;
        }
        self.last_channel = Some(self.current);
        self.current = index;
        self.channels[index].unread = 0;
        self.message_scroll = 0;
        tracing::debug!(channel = %self.channels[index].name, "Switched channel");
    }

    /// Append a message to channel `index` as if it arrived from `author`.
    ///
    /// Marks the channel unread unless it is the current one.
    pub fn receive_message(&mut self, index: usize, author: &str, text: &str) -> Option<u64> {
        let id = self.allocate_message_id();
        let current = self.current;
        let channel = self.channels.get_mut(index)?;
        channel.messages.push(Message {
            id,
            author: author.to_string(),
            text: text.to_string(),
            flagged: false,
            reply_to: None,
        });
        if index != current {
            channel.unread += 1;
        }
        Some(id)
    }

    /// Send (or finish editing) the message in the editor.
    pub fn send_message(&mut self) {
        let text = self.editor.take();
        if text.trim().is_empty() {
            return;
        }

        if let Some(id) = self.editing.take() {
            if let Some(message) = self.current_channel_mut().message_mut(id) {
                message.text = text;
            }
            return;
        }

        let id = self.allocate_message_id();
        let message = Message {
            id,
            author: self.user_name.clone(),
            text,
            flagged: false,
            reply_to: self.reply_to.take(),
        };
        self.current_channel_mut().messages.push(message);
        self.message_scroll = 0;
    }

    fn allocate_message_id(&mut self) -> u64 {
        let id = self.next_message_id;
        self.next_message_id += 1;
        id
    }

    pub fn selected_message(&self) -> Option<&Message> {
        self.selected_message
            .and_then(|id| self.current_channel().message(id))
    }

    /// Indices of channels whose name contains the filter (case-insensitive).
    pub fn channel_matches(&self) -> Vec<usize> {
        let filter = self.channel_filter.to_lowercase();
        self.channels
            .iter()
            .enumerate()
            .filter(|(_, c)| c.name.to_lowercase().contains(&filter))
            .map(|(i, _)| i)
            .collect()
    }

    /// Flagged messages across all channels as (channel index, message id).
    pub fn flagged_posts(&self) -> Vec<(usize, u64)> {
        self.channels
            .iter()
            .enumerate()
            .flat_map(|(i, c)| {
                c.messages
                    .iter()
                    .filter(|m| m.flagged)
                    .map(move |m| (i, m.id))
            })
            .collect()
    }

    pub fn set_status(&mut self, notice: Notice) {
        self.status = Some(notice);
    }

    pub fn push_side_effect(&mut self, effect: SideEffect) {
        self.side_effects.push(effect);
    }

    /// Drain queued side effects in the order they were requested.
    pub fn take_side_effects(&mut self) -> Vec<SideEffect> {
        std::mem::take(&mut self.side_effects)
    }
}
