//! Per-mode handler lists for the chat client.
//!
//! Responsibilities:
//! - Provide each mode's ordered handler list.
//! - Provide the full mode registry for the consistency checker.
//!
//! Does NOT handle:
//! - Resolving overrides (the builder does that per dispatch).
//! - Unmatched input (see the per-mode fallbacks in `app::input`).
//!
//! Invariants:
//! - Handler order is dispatch priority and help order.
//! - Text-entry modes never register a bare printable chord by default.

mod confirm;
mod lists;
mod main_view;
mod overlays;

use super::{KeyHandler, ModeKeymap};
use crate::app::{App, Mode};

/// The ordered handler list for `mode`.
pub fn handlers_for(mode: Mode) -> Vec<KeyHandler<App>> {
    match mode {
        Mode::Main => main_view::handlers(),
        Mode::ShowHelp => overlays::help_handlers(),
        Mode::ViewMessage => overlays::view_message_handlers(),
        Mode::ChannelSelect => lists::channel_select_handlers(),
        Mode::UrlSelect => lists::url_select_handlers(),
        Mode::MessageSelect => lists::message_select_handlers(),
        Mode::FlaggedPosts => lists::flagged_posts_handlers(),
        Mode::DeleteMessageConfirm => confirm::delete_message_handlers(),
        Mode::LeaveChannelConfirm => confirm::leave_channel_handlers(),
    }
}

/// Whether unmatched printable input in `mode` is typed text.
pub const fn is_text_entry(mode: Mode) -> bool {
    matches!(mode, Mode::Main | Mode::ChannelSelect)
}

/// Every mode's keymap, in registry order.
pub fn registry() -> Vec<ModeKeymap<Mode, App>> {
    Mode::ALL
        .iter()
        .map(|&mode| {
            let keymap = ModeKeymap::new(mode, handlers_for(mode));
            if is_text_entry(mode) {
                keymap.text_entry()
            } else {
                keymap
            }
        })
        .collect()
}
