//! Scrollable overlays: the help screen and the message viewer.

use chatterm_config::LogicalEvent as E;

use crate::app::App;
use crate::app::actions::{scroll, system};
use crate::input::keymap::KeyHandler;

fn scrolling() -> Vec<KeyHandler<App>> {
    vec![
        KeyHandler::on(E::ScrollUp, scroll::scroll_up),
        KeyHandler::on(E::ScrollDown, scroll::scroll_down),
        KeyHandler::on(E::ScrollTop, scroll::scroll_top),
        KeyHandler::on(E::ScrollBottom, scroll::scroll_bottom),
        KeyHandler::on(E::PageUp, scroll::page_up),
        KeyHandler::on(E::PageDown, scroll::page_down),
    ]
}

pub(super) fn help_handlers() -> Vec<KeyHandler<App>> {
    let mut handlers = scrolling();
    handlers.push(KeyHandler::on_described(E::Cancel, "Close help", system::cancel));
    handlers.push(KeyHandler::on(E::Quit, system::quit));
    handlers
}

pub(super) fn view_message_handlers() -> Vec<KeyHandler<App>> {
    let mut handlers = scrolling();
    handlers.push(KeyHandler::on_described(E::Cancel, "Close the message", system::cancel));
    handlers.push(KeyHandler::on(E::Quit, system::quit));
    handlers
}
