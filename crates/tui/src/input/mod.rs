//! Keybinding registration, dispatch, and the views derived from it.
//!
//! Responsibilities:
//! - Own the per-mode keybinding registry, dispatcher, and consistency checker.
//! - Render help and Markdown documentation from the same registry.
//!
//! Non-responsibilities:
//! - Performing I/O (the runtime prints or writes rendered output).
//!
//! Invariants:
//! - The registry is the single source of truth for dispatch, help, and docs.

pub mod docs;
pub mod help;
pub mod keymap;
