//! Selection lists: channel fast-select, URLs, messages, and flagged posts.

use chatterm_config::LogicalEvent as E;

use crate::app::App;
use crate::app::actions::{channels, messages, system, urls};
use crate::input::keymap::KeyHandler;

pub(super) fn channel_select_handlers() -> Vec<KeyHandler<App>> {
    vec![
        KeyHandler::on(E::SearchSelectUp, channels::fast_select_up),
        KeyHandler::on(E::SearchSelectDown, channels::fast_select_down),
        KeyHandler::on_described(E::ActivateListItem, "Switch to the selected channel", channels::activate_fast_select),
        KeyHandler::on(E::Cancel, system::cancel),
    ]
}

pub(super) fn url_select_handlers() -> Vec<KeyHandler<App>> {
    vec![
        KeyHandler::on(E::SelectUp, urls::url_up),
        KeyHandler::on(E::SelectDown, urls::url_down),
        KeyHandler::on_described(E::ActivateListItem, "Open the selected URL", urls::open_selected_url),
        KeyHandler::on(E::Cancel, system::cancel),
    ]
}

pub(super) fn message_select_handlers() -> Vec<KeyHandler<App>> {
    vec![
        KeyHandler::on(E::SelectUp, messages::select_up),
        KeyHandler::on(E::SelectDown, messages::select_down),
        KeyHandler::on(E::FlagMessage, messages::flag_message),
        KeyHandler::on(E::YankMessage, messages::yank_message),
        KeyHandler::on(E::DeleteMessage, messages::delete_message),
        KeyHandler::on(E::EditMessage, messages::edit_message),
        KeyHandler::on(E::ReplyMessage, messages::reply_message),
        KeyHandler::on(E::OpenMessageUrl, messages::open_message_url),
        KeyHandler::on(E::ViewMessage, messages::view_message),
        KeyHandler::on(E::Cancel, system::cancel),
    ]
}

pub(super) fn flagged_posts_handlers() -> Vec<KeyHandler<App>> {
    vec![
        KeyHandler::on(E::SelectUp, messages::flagged_up),
        KeyHandler::on(E::SelectDown, messages::flagged_down),
        KeyHandler::on_described(E::ActivateListItem, "Jump to the selected post", messages::activate_flagged),
        KeyHandler::on(E::Cancel, system::cancel),
    ]
}
