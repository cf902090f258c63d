//! Main view: composing messages and switching channels.

use chatterm_config::{Binding, Key, LogicalEvent as E, Modifiers};

use crate::app::App;
use crate::app::actions::{channels, editor, messages, scroll, system, urls};
use crate::input::keymap::KeyHandler;

pub(super) fn handlers() -> Vec<KeyHandler<App>> {
    vec![
        KeyHandler::on(E::Quit, system::quit),
        KeyHandler::on(E::VtyRefresh, system::vty_refresh),
        KeyHandler::on_described(E::Cancel, "Cancel the reply or edit in progress", system::cancel_compose),
        KeyHandler::on(E::ShowHelp, system::show_help),
        KeyHandler::on(E::ToggleMessagePreview, system::toggle_message_preview),
        KeyHandler::on(E::ToggleMultiline, system::toggle_multiline),
        KeyHandler::on(E::ToggleChannelList, system::toggle_channel_list),
        KeyHandler::fixed(
            Binding::new(Key::Enter, Modifiers::ALT),
            "Send the message",
            system::send_message,
        ),
        // Channels
        KeyHandler::on(E::EnterFastSelect, channels::enter_fast_select),
        KeyHandler::on(E::NextChannel, channels::next_channel),
        KeyHandler::on(E::PrevChannel, channels::prev_channel),
        KeyHandler::on(E::NextUnreadChannel, channels::next_unread_channel),
        KeyHandler::on(E::LastChannel, channels::last_channel),
        KeyHandler::on(E::ClearUnread, channels::clear_unread),
        KeyHandler::on(E::LeaveChannel, channels::leave_channel),
        // Messages
        KeyHandler::on(E::EnterSelectMode, messages::enter_select_mode),
        KeyHandler::on(E::ReplyRecent, messages::reply_recent),
        KeyHandler::on(E::EnterFlaggedPosts, messages::enter_flagged_posts),
        KeyHandler::on(E::EnterUrlOpen, urls::enter_url_open),
        KeyHandler::on_described(E::PageUp, "Scroll the message history up", scroll::page_up),
        KeyHandler::on_described(E::PageDown, "Scroll the message history down", scroll::page_down),
        // Editor
        KeyHandler::on(E::EditorKillToEol, editor::kill_to_eol),
        KeyHandler::on(E::EditorKillToBol, editor::kill_to_bol),
        KeyHandler::on(E::EditorBol, editor::bol),
        KeyHandler::on(E::EditorEol, editor::eol),
        KeyHandler::on(E::EditorPrevChar, editor::prev_char),
        KeyHandler::on(E::EditorNextChar, editor::next_char),
        KeyHandler::on(E::EditorPrevWord, editor::prev_word),
        KeyHandler::on(E::EditorNextWord, editor::next_word),
        KeyHandler::on(E::EditorDeletePrevWord, editor::delete_prev_word),
        KeyHandler::on(E::EditorDeleteChar, editor::delete_char),
        KeyHandler::on(E::EditorTransposeChars, editor::transpose_chars),
        KeyHandler::on(E::EditorYank, editor::yank),
    ]
}
