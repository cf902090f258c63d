//! URL selection in the current channel.

use crate::app::{App, Mode, SideEffect};
use crate::event::Notice;

/// Collect URLs from the current channel, newest first, and open the picker.
pub fn enter_url_open(app: &mut App) -> anyhow::Result<()> {
    let mut urls: Vec<String> = Vec::new();
    for message in app.current_channel().messages.iter().rev() {
        for url in message.urls() {
            if !urls.contains(&url) {
                urls.push(url);
            }
        }
    }
    if urls.is_empty() {
        app.set_status(Notice::info("No URLs in this channel"));
        return Ok(());
    }
    app.urls = urls;
    app.url_selected = 0;
    app.mode = Mode::UrlSelect;
    Ok(())
}

pub fn url_up(app: &mut App) -> anyhow::Result<()> {
    app.url_selected = app.url_selected.saturating_sub(1);
    Ok(())
}

pub fn url_down(app: &mut App) -> anyhow::Result<()> {
    if app.url_selected + 1 < app.urls.len() {
        app.url_selected += 1;
    }
    Ok(())
}

pub fn open_selected_url(app: &mut App) -> anyhow::Result<()> {
    if let Some(url) = app.urls.get(app.url_selected).cloned() {
        app.push_side_effect(SideEffect::OpenUrl(url));
    }
    app.urls.clear();
    app.mode = Mode::Main;
    Ok(())
}
