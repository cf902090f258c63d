//! Scrolling for the message pane and the help/message-view overlays.

use crate::app::{App, Mode};

/// Lines moved by a page-up or page-down.
pub const PAGE_LINES: u16 = 10;

pub fn scroll_up(app: &mut App) -> anyhow::Result<()> {
    app.overlay_scroll = app.overlay_scroll.saturating_sub(1);
    Ok(())
}

pub fn scroll_down(app: &mut App) -> anyhow::Result<()> {
    app.overlay_scroll = app.overlay_scroll.saturating_add(1).min(max_overlay_scroll(app));
    Ok(())
}

pub fn scroll_top(app: &mut App) -> anyhow::Result<()> {
    app.overlay_scroll = 0;
    Ok(())
}

pub fn scroll_bottom(app: &mut App) -> anyhow::Result<()> {
    app.overlay_scroll = max_overlay_scroll(app);
    Ok(())
}

/// In the main view pages the message history; in overlays pages the overlay.
pub fn page_up(app: &mut App) -> anyhow::Result<()> {
    if app.mode == Mode::Main {
        app.message_scroll = app.message_scroll.saturating_add(PAGE_LINES);
    } else {
        app.overlay_scroll = app.overlay_scroll.saturating_sub(PAGE_LINES);
    }
    Ok(())
}

pub fn page_down(app: &mut App) -> anyhow::Result<()> {
    if app.mode == Mode::Main {
        app.message_scroll = app.message_scroll.saturating_sub(PAGE_LINES);
    } else {
        app.overlay_scroll = app
            .overlay_scroll
            .saturating_add(PAGE_LINES)
            .min(max_overlay_scroll(app));
    }
    Ok(())
}

fn max_overlay_scroll(app: &App) -> u16 {
    let lines = match app.mode {
        Mode::ShowHelp => app.help_lines().len(),
        Mode::ViewMessage => app
            .selected_message()
            .map_or(0, |m| m.text.lines().count()),
        _ => 0,
    };
    u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX)
}
