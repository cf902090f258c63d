//! chatterm library.
//!
//! Application state, keybinding registration and dispatch, rendering, and
//! the runtime pieces the `chatterm` binary wires together.
//!
//! # Example
//!
//! ```rust
//! use chatterm_config::{Binding, OverrideTable, Settings};
//! use chatterm_tui::{App, InputEvent};
//!
//! let overrides = OverrideTable::new();
//! let mut app = App::new(&Settings::default(), &overrides);
//! app.handle_input(&InputEvent::Key(Binding::ctrl('q')), &overrides).unwrap();
//! assert!(app.quit_requested);
//! ```

pub mod app;
pub mod cli;
pub mod event;
pub mod input;
pub mod runtime;
pub mod ui;

pub use app::{App, Mode};
pub use event::{Event, InputEvent, Notice};
pub use input::keymap::{ConflictReport, Dispatch};
