//! chatterm - terminal chat client with remappable keybindings.
//!
//! Responsibilities:
//! - Orchestrate startup and shutdown.
//! - Initialize logging, configuration, and the terminal.
//! - Run the serial event loop.
//!
//! Invariants:
//! - Keybinding problems are reported before the terminal is touched.
//! - Exactly one event is processed at a time; `quit_requested` is checked
//!   after each one.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::EventStream;
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::channel;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use chatterm_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS, LOG_FILE_NAME};
use chatterm_tui::cli::Cli;
use chatterm_tui::event::{Event, InputEvent, Notice};
use chatterm_tui::input::docs::render_markdown;
use chatterm_tui::runtime::{
    config::{check_keybindings, load_config},
    side_effects::handle_side_effects,
    terminal::TerminalGuard,
};
use chatterm_tui::{App, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, LOG_FILE_NAME);
    // _guard must live for all of main() so buffered logs are flushed.
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    let loaded = load_config(&cli)?;
    let overrides = loaded.overrides;
    let settings = loaded.config.settings;

    if let Err(report) = check_keybindings(&overrides) {
        tracing::error!(%report, "Keybinding check failed");
        return Err(anyhow::Error::new(report)).context("Invalid keybinding configuration");
    }
    if cli.check_keybindings {
        println!("Keybindings OK ({} override(s))", overrides.len());
        return Ok(());
    }
    if cli.print_keybindings {
        println!("{}", render_markdown(&overrides));
        return Ok(());
    }

    let _terminal_guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let (tx, mut rx) = channel::<Event>(DEFAULT_CHANNEL_CAPACITY);

    let tx_input = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(result) = reader.next().await {
            match result {
                Ok(event) => {
                    if tx_input.send(Event::Input(InputEvent::from(event))).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "Terminal event stream failed");
                    break;
                }
            }
        }
    });

    let mut app = App::new(&settings, &overrides);
    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(DEFAULT_UI_TICK_MS));

    tracing::info!(overrides = overrides.len(), "Starting event loop");
    loop {
        if app.redraw_requested {
            terminal.clear()?;
            app.redraw_requested = false;
        }
        terminal.draw(|f| ui::render(f, &app))?;

        tokio::select! {
            Some(event) = rx.recv() => match event {
                Event::Input(input) => {
                    if let Err(e) = app.handle_input(&input, &overrides) {
                        tracing::error!(error = %e, mode = %app.mode, "Action failed");
                        app.set_status(Notice::error(format!("{e:#}")));
                    }
                }
                Event::Notice(notice) => app.set_status(notice),
            },
            _ = tick_interval.tick() => {}
        }

        handle_side_effects(app.take_side_effects(), &settings.url_opener, &tx);
        if app.quit_requested {
            break;
        }
    }

    tracing::info!("Shutting down");
    Ok(())
}
