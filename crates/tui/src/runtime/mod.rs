//! Runtime components for the chat client.
//!
//! - Terminal management (`TerminalGuard`)
//! - Configuration loading and the startup keybinding check
//! - Side effects executed outside the event loop
//!
//! Does NOT handle:
//! - Input dispatch or rendering (see `app`, `input`, and `ui`).

pub mod config;
pub mod side_effects;
pub mod terminal;
