//! Channel navigation, fast select, and leaving channels.

use crate::app::{App, Mode};
use crate::event::Notice;

pub fn next_channel(app: &mut App) -> anyhow::Result<()> {
    let next = (app.current + 1) % app.channels.len();
    app.switch_channel(next);
    Ok(())
}

pub fn prev_channel(app: &mut App) -> anyhow::Result<()> {
    let len = app.channels.len();
    let prev = (app.current + len - 1) % len;
    app.switch_channel(prev);
    Ok(())
}

/// Switch to the next channel (cyclically) with unread messages.
pub fn next_unread_channel(app: &mut App) -> anyhow::Result<()> {
    let len = app.channels.len();
    let target = (1..len)
        .map(|offset| (app.current + offset) % len)
        .find(|&i| app.channels[i].unread > 0);
    match target {
        Some(index) => app.switch_channel(index),
        None => app.set_status(Notice::info("No unread channels")),
    }
    Ok(())
}

pub fn last_channel(app: &mut App) -> anyhow::Result<()> {
    if let Some(index) = app.last_channel {
        app.switch_channel(index);
    }
    Ok(())
}

pub fn clear_unread(app: &mut App) -> anyhow::Result<()> {
    for channel in &mut app.channels {
        channel.unread = 0;
    }
    Ok(())
}

pub fn enter_fast_select(app: &mut App) -> anyhow::Result<()> {
    app.channel_filter.clear();
    app.channel_selected = 0;
    app.mode = Mode::ChannelSelect;
    Ok(())
}

pub fn fast_select_up(app: &mut App) -> anyhow::Result<()> {
    app.channel_selected = app.channel_selected.saturating_sub(1);
    Ok(())
}

pub fn fast_select_down(app: &mut App) -> anyhow::Result<()> {
    let matches = app.channel_matches().len();
    if app.channel_selected + 1 < matches {
        app.channel_selected += 1;
    }
    Ok(())
}

/// Switch to the highlighted channel in the fast-select list.
pub fn activate_fast_select(app: &mut App) -> anyhow::Result<()> {
    let Some(&index) = app.channel_matches().get(app.channel_selected) else {
        app.set_status(Notice::error("No matching channel"));
        return Ok(());
    };
    app.switch_channel(index);
    app.channel_filter.clear();
    app.mode = Mode::Main;
    Ok(())
}

/// Ask for confirmation before leaving the current channel.
pub fn leave_channel(app: &mut App) -> anyhow::Result<()> {
    if app.channels.len() <= 1 {
        app.set_status(Notice::error("Cannot leave the only channel"));
        return Ok(());
    }
    app.mode = Mode::LeaveChannelConfirm;
    Ok(())
}

pub fn confirm_leave_channel(app: &mut App) -> anyhow::Result<()> {
    app.mode = Mode::Main;
    if app.channels.len() <= 1 {
        return Ok(());
    }
    let left = app.channels.remove(app.current);
    app.current = app.current.min(app.channels.len() - 1);
    app.last_channel = None;
    app.current_channel_mut().unread = 0;
    app.message_scroll = 0;
    tracing::info!(channel = %left.name, "Left channel");
    app.set_status(Notice::info(format!("Left ~{}", left.name)));
    Ok(())
}
