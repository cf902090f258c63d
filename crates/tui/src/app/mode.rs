//! UI modes.
//!
//! Exactly one mode is active at a time. Only actions change it.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Mode {
    /// Composing messages in the current channel.
    #[default]
    Main,
    ShowHelp,
    /// Filtering channels by name.
    ChannelSelect,
    UrlSelect,
    MessageSelect,
    DeleteMessageConfirm,
    LeaveChannelConfirm,
    ViewMessage,
    FlaggedPosts,
}

impl Mode {
    /// Every mode, in registry order.
    pub const ALL: &'static [Mode] = &[
        Self::Main,
        Self::ShowHelp,
        Self::ChannelSelect,
        Self::UrlSelect,
        Self::MessageSelect,
        Self::DeleteMessageConfirm,
        Self::LeaveChannelConfirm,
        Self::ViewMessage,
        Self::FlaggedPosts,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::ShowHelp => "help",
            Self::ChannelSelect => "channel-select",
            Self::UrlSelect => "url-select",
            Self::MessageSelect => "message-select",
            Self::DeleteMessageConfirm => "delete-message-confirm",
            Self::LeaveChannelConfirm => "leave-channel-confirm",
            Self::ViewMessage => "view-message",
            Self::FlaggedPosts => "flagged-posts",
        }
    }

    /// Title used in help and documentation headings.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Main => "Main",
            Self::ShowHelp => "Help",
            Self::ChannelSelect => "Channel Select",
            Self::UrlSelect => "URL Select",
            Self::MessageSelect => "Message Select",
            Self::DeleteMessageConfirm => "Delete Message Confirmation",
            Self::LeaveChannelConfirm => "Leave Channel Confirmation",
            Self::ViewMessage => "View Message",
            Self::FlaggedPosts => "Flagged Posts",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
