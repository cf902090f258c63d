//! Message selection and the actions applied to a selected message.

use crate::app::{App, Mode, SideEffect};
use crate::event::Notice;

/// Enter message-select mode with the newest message selected.
pub fn enter_select_mode(app: &mut App) -> anyhow::Result<()> {
    let Some(last) = app.current_channel().messages.last().map(|m| m.id) else {
        app.set_status(Notice::info("No messages to select"));
        return Ok(());
    };
    app.selected_message = Some(last);
    app.mode = Mode::MessageSelect;
    Ok(())
}

/// Start a reply to the newest message in the channel.
pub fn reply_recent(app: &mut App) -> anyhow::Result<()> {
    match app.current_channel().messages.last().map(|m| m.id) {
        Some(id) => app.reply_to = Some(id),
        None => app.set_status(Notice::info("No message to reply to")),
    }
    Ok(())
}

pub fn select_up(app: &mut App) -> anyhow::Result<()> {
    move_selection(app, -1);
    Ok(())
}

pub fn select_down(app: &mut App) -> anyhow::Result<()> {
    move_selection(app, 1);
    Ok(())
}

fn move_selection(app: &mut App, delta: isize) {
    let messages = &app.current_channel().messages;
    let Some(pos) = app
        .selected_message
        .and_then(|id| messages.iter().position(|m| m.id == id))
    else {
        return;
    };
    let target = pos.saturating_add_signed(delta).min(messages.len() - 1);
    let id = messages[target].id;
    app.selected_message = Some(id);
}

pub fn flag_message(app: &mut App) -> anyhow::Result<()> {
    let Some(id) = app.selected_message else {
        return Ok(());
    };
    if let Some(message) = app.current_channel_mut().message_mut(id) {
        message.flagged = !message.flagged;
        let text = if message.flagged { "Flagged" } else { "Unflagged" };
        app.set_status(Notice::info(text));
    }
    Ok(())
}

/// Copy the selected message to the clipboard and leave select mode.
pub fn yank_message(app: &mut App) -> anyhow::Result<()> {
    if let Some(text) = app.selected_message().map(|m| m.text.clone()) {
        app.push_side_effect(SideEffect::CopyToClipboard(text));
    }
    app.selected_message = None;
    app.mode = Mode::Main;
    Ok(())
}

pub fn delete_message(app: &mut App) -> anyhow::Result<()> {
    if require_own_message(app, "delete") {
        app.mode = Mode::DeleteMessageConfirm;
    }
    Ok(())
}

pub fn confirm_delete_message(app: &mut App) -> anyhow::Result<()> {
    if let Some(id) = app.selected_message.take() {
        app.current_channel_mut().messages.retain(|m| m.id != id);
        tracing::debug!(id, "Deleted message");
        app.set_status(Notice::info("Message deleted"));
    }
    app.mode = Mode::Main;
    Ok(())
}

/// Load the selected message into the editor for editing.
pub fn edit_message(app: &mut App) -> anyhow::Result<()> {
    if !require_own_message(app, "edit") {
        return Ok(());
    }
    if let Some(message) = app.selected_message().cloned() {
        app.editor.set_value(message.text);
        app.editing = Some(message.id);
        app.reply_to = None;
    }
    app.selected_message = None;
    app.mode = Mode::Main;
    Ok(())
}

pub fn reply_message(app: &mut App) -> anyhow::Result<()> {
    app.reply_to = app.selected_message.take();
    app.mode = Mode::Main;
    Ok(())
}

pub fn open_message_url(app: &mut App) -> anyhow::Result<()> {
    let urls = app.selected_message().map(|m| m.urls()).unwrap_or_default();
    let Some(url) = urls.into_iter().next() else {
        app.set_status(Notice::info("No URL in the selected message"));
        return Ok(());
    };
    app.push_side_effect(SideEffect::OpenUrl(url));
    app.selected_message = None;
    app.mode = Mode::Main;
    Ok(())
}

pub fn view_message(app: &mut App) -> anyhow::Result<()> {
    if app.selected_message().is_some() {
        app.overlay_scroll = 0;
        app.mode = Mode::ViewMessage;
    }
    Ok(())
}

pub fn enter_flagged_posts(app: &mut App) -> anyhow::Result<()> {
    if app.flagged_posts().is_empty() {
        app.set_status(Notice::info("No flagged posts"));
        return Ok(());
    }
    app.flagged_selected = 0;
    app.mode = Mode::FlaggedPosts;
    Ok(())
}

pub fn flagged_up(app: &mut App) -> anyhow::Result<()> {
    app.flagged_selected = app.flagged_selected.saturating_sub(1);
    Ok(())
}

pub fn flagged_down(app: &mut App) -> anyhow::Result<()> {
    if app.flagged_selected + 1 < app.flagged_posts().len() {
        app.flagged_selected += 1;
    }
    Ok(())
}

/// Jump to the highlighted flagged post and select it.
pub fn activate_flagged(app: &mut App) -> anyhow::Result<()> {
    let Some(&(channel, id)) = app.flagged_posts().get(app.flagged_selected) else {
        app.mode = Mode::Main;
        return Ok(());
    };
    app.switch_channel(channel);
    app.selected_message = Some(id);
    app.mode = Mode::MessageSelect;
    Ok(())
}

/// True when the selected message belongs to the local user; sets a status otherwise.
fn require_own_message(app: &mut App, verb: &str) -> bool {
    let own = app
        .selected_message()
        .is_some_and(|m| m.author == app.user_name);
    if !own {
        app.set_status(Notice::error(format!(
            "You can only {verb} your own messages"
        )));
    }
    own
}
