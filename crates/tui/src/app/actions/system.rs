//! Application-level actions: quitting, toggles, help, and mode exits.

use crate::app::{App, Mode};

pub fn quit(app: &mut App) -> anyhow::Result<()> {
    tracing::info!("Quit requested");
    app.quit_requested = true;
    Ok(())
}

pub fn vty_refresh(app: &mut App) -> anyhow::Result<()> {
    app.redraw_requested = true;
    Ok(())
}

pub fn show_help(app: &mut App) -> anyhow::Result<()> {
    app.overlay_scroll = 0;
    app.mode = Mode::ShowHelp;
    Ok(())
}

pub fn toggle_message_preview(app: &mut App) -> anyhow::Result<()> {
    app.show_message_preview = !app.show_message_preview;
    Ok(())
}

pub fn toggle_multiline(app: &mut App) -> anyhow::Result<()> {
    app.multiline = !app.multiline;
    Ok(())
}

pub fn toggle_channel_list(app: &mut App) -> anyhow::Result<()> {
    app.show_channel_list = !app.show_channel_list;
    Ok(())
}

/// Leave any overlay or selection mode and return to the main view.
pub fn cancel(app: &mut App) -> anyhow::Result<()> {
    app.mode = Mode::Main;
    app.selected_message = None;
    app.urls.clear();
    app.channel_filter.clear();
    app.overlay_scroll = 0;
    Ok(())
}

/// Abandon a pending reply or edit in the main view.
pub fn cancel_compose(app: &mut App) -> anyhow::Result<()> {
    app.reply_to = None;
    if app.editing.take().is_some() {
        app.editor.take();
    }
    app.status = None;
    Ok(())
}

pub fn send_message(app: &mut App) -> anyhow::Result<()> {
    app.send_message();
    Ok(())
}
