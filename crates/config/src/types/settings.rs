//! Application settings section of the config file.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CHANNEL, DEFAULT_URL_OPENER, DEFAULT_USER_NAME};

/// Free-form application settings.
///
/// Not interpreted by keybinding resolution; consumed by the TUI when seeding
/// its in-memory state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Name shown as the author of sent messages
    pub user_name: String,
    /// Channels to seed the channel list with, in display order
    pub channels: Vec<String>,
    /// Whether the editor preview pane starts visible
    pub show_message_preview: bool,
    /// Whether the channel list starts visible
    pub show_channel_list: bool,
    /// Command invoked with a URL as its only argument
    pub url_opener: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_name: DEFAULT_USER_NAME.to_string(),
            channels: vec![DEFAULT_CHANNEL.to_string()],
            show_message_preview: false,
            show_channel_list: true,
            url_opener: DEFAULT_URL_OPENER.to_string(),
        }
    }
}
