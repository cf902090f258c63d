//! Side effects requested by actions, executed off the event loop.
//!
//! Responsibilities:
//! - Copy text to the system clipboard (arboard).
//! - Launch the configured URL opener.
//! - Report each outcome back on the event channel as a `Notice`.
//!
//! Does NOT handle:
//! - Deciding what to copy or open (actions do that).
//!
//! Invariants:
//! - Every effect is spawned as its own task; the loop never waits on one.
//! - Every effect produces exactly one notice.

use std::process::Stdio;

use thiserror::Error;
use tokio::sync::mpsc::Sender;

use crate::app::SideEffect;
use crate::event::{Event, Notice};

#[derive(Debug, Error)]
pub enum SideEffectError {
    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("Failed to launch '{command}': {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with {status}")]
    Exit {
        command: String,
        status: std::process::ExitStatus,
    },
}

/// Spawn one task per effect.
pub fn handle_side_effects(effects: Vec<SideEffect>, url_opener: &str, tx: &Sender<Event>) {
    for effect in effects {
        let tx = tx.clone();
        let opener = url_opener.to_string();
        tokio::spawn(async move {
            let notice = run(effect, &opener).await;
            let _ = tx.send(Event::Notice(notice)).await;
        });
    }
}

async fn run(effect: SideEffect, url_opener: &str) -> Notice {
    match effect {
        SideEffect::CopyToClipboard(text) => {
            let result = tokio::task::spawn_blocking(move || copy_to_clipboard(text))
                .await
                .unwrap_or_else(|e| Err(SideEffectError::Clipboard(e.to_string())));
            match result {
                Ok(()) => Notice::info("Copied to clipboard"),
                Err(e) => {
                    tracing::warn!(error = %e, "Clipboard copy failed");
                    Notice::error(e.to_string())
                }
            }
        }
        SideEffect::OpenUrl(url) => match open_url(url_opener, &url).await {
            Ok(()) => Notice::info(format!("Opened {url}")),
            Err(e) => {
                tracing::warn!(error = %e, url = %url, "Opening URL failed");
                Notice::error(e.to_string())
            }
        },
    }
}

fn copy_to_clipboard(text: String) -> Result<(), SideEffectError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| SideEffectError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| SideEffectError::Clipboard(e.to_string()))
}

async fn open_url(opener: &str, url: &str) -> Result<(), SideEffectError> {
    tracing::debug!(opener, url, "Opening URL");
    let status = tokio::process::Command::new(opener)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map_err(|source| SideEffectError::Launch {
            command: opener.to_string(),
            source,
        })?;
    if status.success() {
        Ok(())
    } else {
        Err(SideEffectError::Exit {
            command: opener.to_string(),
            status,
        })
    }
}
