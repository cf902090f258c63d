//! Terminal state management and cleanup.
//!
//! Invariants:
//! - Must be created after terminal setup is complete and live for the
//!   whole session.
//! - Drop must not panic.

use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

/// Guard that restores the terminal on drop, including during unwinding.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Enter raw mode, the alternate screen, and bracketed paste.
    pub fn enter() -> std::io::Result<Self> {
        enable_raw_mode()?;
        // Constructed before the remaining setup so a failure still restores raw mode.
        let guard = Self { _private: () };
        execute!(std::io::stdout(), EnterAlternateScreen, EnableBracketedPaste)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    }
}
