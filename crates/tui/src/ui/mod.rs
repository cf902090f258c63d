//! Rendering for the chat client.
//!
//! Rendering is a pure function of `App`; it never mutates state.

mod overlays;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::app::{App, Message, Mode};
use crate::event::NoticeLevel;

const CHANNEL_LIST_WIDTH: u16 = 24;

/// Draw the whole screen.
pub fn render(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(editor_height(app)),
            Constraint::Length(1),
        ])
        .split(f.area());

    let body = if app.show_channel_list {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CHANNEL_LIST_WIDTH), Constraint::Min(10)])
            .split(rows[0]);
        render_channel_list(f, app, cols[0]);
        cols[1]
    } else {
        rows[0]
    };

    render_messages(f, app, body);
    render_editor(f, app, rows[1]);
    render_status(f, app, rows[2]);
    overlays::render(f, app);
}

fn editor_height(app: &App) -> u16 {
    if app.multiline { 6 } else { 3 }
}

fn render_channel_list(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .channels
        .iter()
        .enumerate()
        .map(|(i, channel)| {
            let mut style = Style::default();
            if i == app.current {
                style = style.add_modifier(Modifier::REVERSED);
            } else if channel.unread > 0 {
                style = style.add_modifier(Modifier::BOLD);
            }
            let label = if channel.unread > 0 && i != app.current {
                format!("~{} ({})", channel.name, channel.unread)
            } else {
                format!("~{}", channel.name)
            };
            ListItem::new(label).style(style)
        })
        .collect();
    let list = List::new(items).block(Block::default().title("Channels").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn message_lines<'a>(app: &'a App, message: &'a Message) -> Vec<Line<'a>> {
    let selected = app.mode == Mode::MessageSelect && app.selected_message == Some(message.id);
    let mut header = vec![Span::styled(
        format!("{}: ", message.author),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];
    if message.flagged {
        header.insert(0, Span::styled("[!] ", Style::default().fg(Color::Yellow)));
    }
    if let Some(parent) = message.reply_to {
        header.push(Span::styled(
            format!("(re #{parent}) "),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let mut lines: Vec<Line> = Vec::new();
    for (i, text) in message.text.lines().enumerate() {
        if i == 0 {
            let mut spans = header.clone();
            spans.push(Span::raw(text));
            lines.push(Line::from(spans));
        } else {
            lines.push(Line::from(format!("  {text}")));
        }
    }
    if lines.is_empty() {
        lines.push(Line::from(header));
    }
    if selected {
        for line in &mut lines {
            *line = line.clone().style(Style::default().add_modifier(Modifier::REVERSED));
        }
    }
    lines
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let channel = app.current_channel();
    let lines: Vec<Line> = channel
        .messages
        .iter()
        .flat_map(|m| message_lines(app, m))
        .collect();

    let visible = area.height.saturating_sub(2);
    let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let top = total
        .saturating_sub(visible)
        .saturating_sub(app.message_scroll);

    let title = format!("~{}", channel.name);
    let p = Paragraph::new(lines)
        .block(Block::default().title(title).borders(Borders::ALL))
        .scroll((top, 0));
    f.render_widget(p, area);
}

fn render_editor(f: &mut Frame, app: &App, area: Rect) {
    let title = match (app.editing, app.reply_to) {
        (Some(id), _) => format!("Editing #{id}"),
        (None, Some(id)) => format!("Replying to #{id}"),
        (None, None) if app.multiline => "Message (multi-line)".to_string(),
        (None, None) => "Message".to_string(),
    };
    let p = Paragraph::new(app.editor.value())
        .block(Block::default().title(title).borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(p, area);

    if app.mode == Mode::Main {
        let width = area.width.saturating_sub(2);
        let cursor = u16::try_from(app.editor.inner().visual_cursor()).unwrap_or(u16::MAX);
        f.set_cursor_position((area.x + 1 + cursor.min(width), area.y + 1));
    }
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status {
        Some(notice) => {
            let color = match notice.level {
                NoticeLevel::Info => Color::Green,
                NoticeLevel::Error => Color::Red,
            };
            Line::from(Span::styled(notice.text.as_str(), Style::default().fg(color)))
        }
        None => Line::from(Span::styled(
            format!("{} | {}", app.mode.title(), app.user_name),
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}
