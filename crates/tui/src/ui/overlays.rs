//! Modal overlays drawn on top of the main view.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::app::{App, Mode};

pub(super) fn render(f: &mut Frame, app: &App) {
    match app.mode {
        Mode::Main | Mode::MessageSelect => {}
        Mode::ShowHelp => {
            let text = app.help_lines().join("\n");
            render_scrolled(f, "Help", text, app.overlay_scroll);
        }
        Mode::ViewMessage => {
            if let Some(message) = app.selected_message() {
                let title = format!("Message from {}", message.author);
                render_scrolled(f, &title, message.text.clone(), app.overlay_scroll);
            }
        }
        Mode::ChannelSelect => {
            let names: Vec<String> = app
                .channel_matches()
                .into_iter()
                .map(|i| format!("~{}", app.channels[i].name))
                .collect();
            let title = format!("Channel: {}", app.channel_filter);
            render_list(f, &title, names, app.channel_selected);
        }
        Mode::UrlSelect => render_list(f, "Open URL", app.urls.clone(), app.url_selected),
        Mode::FlaggedPosts => {
            let posts: Vec<String> = app
                .flagged_posts()
                .into_iter()
                .filter_map(|(channel, id)| {
                    let channel = &app.channels[channel];
                    let message = channel.message(id)?;
                    Some(format!("~{} {}: {}", channel.name, message.author, message.text))
                })
                .collect();
            render_list(f, "Flagged Posts", posts, app.flagged_selected);
        }
        Mode::DeleteMessageConfirm => render_confirm(f, "Confirm Delete", "Delete this message? (y/n)"),
        Mode::LeaveChannelConfirm => {
            let prompt = format!("Leave ~{}? (y/n)", app.current_channel().name);
            render_confirm(f, "Confirm Leave", &prompt);
        }
    }
}

fn render_scrolled(f: &mut Frame, title: &str, text: String, scroll: u16) {
    let area = centered_rect(80, 80, f.area());
    f.render_widget(Clear, area);
    let p = Paragraph::new(text)
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Cyan)),
        )
        .scroll((scroll, 0));
    f.render_widget(p, area);
}

fn render_list(f: &mut Frame, title: &str, items: Vec<String>, selected: usize) {
    let area = centered_rect(60, 50, f.area());
    f.render_widget(Clear, area);
    let list = List::new(items.into_iter().map(ListItem::new).collect::<Vec<_>>())
        .block(Block::default().title(title.to_string()).borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default();
    state.select(Some(selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_confirm(f: &mut Frame, title: &str, prompt: &str) {
    let area = centered_rect(50, 20, f.area());
    f.render_widget(Clear, area);
    let p = Paragraph::new(prompt.to_string())
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Red)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(p, area);
}

/// Create a centered rectangle with the given percentage of the screen size.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
