//! Yes/no confirmation modes.
//!
//! `y` confirms through a fixed chord; any other key cancels (see the
//! confirm fallback in `app::input`).

use chatterm_config::{Binding, LogicalEvent as E};

use crate::app::App;
use crate::app::actions::{channels, messages, system};
use crate::input::keymap::KeyHandler;

pub(super) fn delete_message_handlers() -> Vec<KeyHandler<App>> {
    vec![
        KeyHandler::fixed(Binding::char('y'), "Delete the message", messages::confirm_delete_message),
        KeyHandler::on_described(E::Cancel, "Keep the message", system::cancel),
    ]
}

pub(super) fn leave_channel_handlers() -> Vec<KeyHandler<App>> {
    vec![
        KeyHandler::fixed(Binding::char('y'), "Leave the channel", channels::confirm_leave_channel),
        KeyHandler::on_described(E::Cancel, "Stay in the channel", system::cancel),
    ]
}
