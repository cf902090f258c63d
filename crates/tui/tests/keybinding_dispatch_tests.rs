//! Integration tests for mode-scoped dispatch through the app registry.

use chatterm_config::{
    Binding, ConfigLoader, Key, KeybindOverrides, LogicalEvent, OverrideEntry, OverrideTable,
    Settings,
};
use chatterm_tui::input::help::help_text;
use chatterm_tui::input::keymap::{Dispatch, KeyHandler, bindings, dispatch};
use chatterm_tui::{App, InputEvent, Mode};

fn app(overrides: &OverrideTable) -> App {
    App::new(&Settings::default(), overrides)
}

fn key(binding: Binding) -> InputEvent {
    InputEvent::Key(binding)
}

#[test]
fn ctrl_q_quits_in_main_by_default() {
    let overrides = OverrideTable::new();
    let mut app = app(&overrides);

    let outcome = app
        .handle_input(&key(Binding::ctrl('q')), &overrides)
        .unwrap();

    assert_eq!(outcome, Dispatch::Handled);
    assert!(app.quit_requested);
}

#[test]
fn replaced_default_falls_through_to_fallback() {
    let overrides = OverrideTable::new().with(
        LogicalEvent::Quit,
        OverrideEntry::Explicit(vec![Binding::ctrl('x')]),
    );
    let mut app = app(&overrides);

    let outcome = app
        .handle_input(&key(Binding::ctrl('q')), &overrides)
        .unwrap();
    assert_eq!(outcome, Dispatch::Unhandled);
    assert!(!app.quit_requested);

    let outcome = app
        .handle_input(&key(Binding::ctrl('x')), &overrides)
        .unwrap();
    assert_eq!(outcome, Dispatch::Handled);
    assert!(app.quit_requested);
}

#[test]
fn unbound_quit_is_listed_but_never_dispatches() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), r#"{"keybindings": {"quit": "unbound"}}"#).unwrap();
    let loaded = ConfigLoader::new()
        .with_config_path(file.path().to_path_buf())
        .load()
        .unwrap();
    let overrides = loaded.overrides;

    let help = help_text(&overrides);
    let quit_row = help
        .lines()
        .find(|line| line.trim_end().ends_with("Quit"))
        .unwrap();
    assert!(quit_row.contains("(unbound)"));
    assert!(!help.contains("Ctrl+q"));

    let mut app = app(&overrides);
    app.handle_input(&key(Binding::ctrl('q')), &overrides)
        .unwrap();
    assert!(!app.quit_requested);
}

#[test]
fn same_chord_means_different_things_per_mode() {
    let overrides = OverrideTable::new();
    let mut app = app(&overrides);

    // Typed text in the editor.
    app.handle_input(&key(Binding::char('j')), &overrides)
        .unwrap();
    assert_eq!(app.editor.value(), "j");

    // Scrolling in help.
    app.handle_input(&key(Binding::plain(Key::F(1))), &overrides)
        .unwrap();
    assert_eq!(app.mode, Mode::ShowHelp);
    let outcome = app
        .handle_input(&key(Binding::char('j')), &overrides)
        .unwrap();
    assert_eq!(outcome, Dispatch::Handled);
    assert_eq!(app.overlay_scroll, 1);
    assert_eq!(app.editor.value(), "j");
}

#[test]
fn confirmation_accepts_y_and_cancels_on_anything_else() {
    let overrides = OverrideTable::new();
    let mut app = app(&overrides);
    app.editor.set_value("mine");
    app.send_message();
    let mine = app.current_channel().messages.last().unwrap().id;

    app.handle_input(&key(Binding::ctrl('s')), &overrides)
        .unwrap();
    assert_eq!(app.mode, Mode::MessageSelect);
    app.handle_input(&key(Binding::char('d')), &overrides)
        .unwrap();
    assert_eq!(app.mode, Mode::DeleteMessageConfirm);

    app.handle_input(&key(Binding::char('n')), &overrides)
        .unwrap();
    assert_eq!(app.mode, Mode::Main);
    assert!(app.current_channel().message(mine).is_some());

    app.handle_input(&key(Binding::ctrl('s')), &overrides)
        .unwrap();
    app.handle_input(&key(Binding::char('d')), &overrides)
        .unwrap();
    app.handle_input(&key(Binding::char('y')), &overrides)
        .unwrap();
    assert_eq!(app.mode, Mode::Main);
    assert!(app.current_channel().message(mine).is_none());
}

#[test]
fn static_confirm_chord_ignores_overrides() {
    let overrides = OverrideTable::new().with(LogicalEvent::Cancel, OverrideEntry::Unbound);
    let mut app = App::new(
        &Settings {
            channels: vec!["a".to_string(), "b".to_string()],
            ..Settings::default()
        },
        &overrides,
    );

    app.handle_input(&key(Binding::alt('x')), &overrides)
        .unwrap();
    assert_eq!(app.mode, Mode::LeaveChannelConfirm);
    app.handle_input(&key(Binding::char('y')), &overrides)
        .unwrap();
    assert_eq!(app.channels.len(), 1);
}

#[test]
fn overrides_from_config_file_drive_dispatch() {
    let raw: KeybindOverrides =
        serde_json::from_str(r#"{"show-help": ["F10", "Ctrl+h"]}"#).unwrap();
    let overrides = OverrideTable::from_config(&raw).unwrap();
    let mut app = app(&overrides);

    app.handle_input(&key(Binding::plain(Key::F(1))), &overrides)
        .unwrap();
    assert_eq!(app.mode, Mode::Main);
    app.handle_input(&key(Binding::ctrl('h')), &overrides)
        .unwrap();
    assert_eq!(app.mode, Mode::ShowHelp);
}

#[test]
fn non_key_events_reach_the_fallback() {
    let overrides = OverrideTable::new();
    let mut app = app(&overrides);

    let outcome = app
        .handle_input(&InputEvent::Paste("pasted".to_string()), &overrides)
        .unwrap();

    assert_eq!(outcome, Dispatch::Unhandled);
    assert_eq!(app.editor.value(), "pasted");
}

fn failing(_: &mut App) -> anyhow::Result<()> {
    anyhow::bail!("backend unavailable")
}

#[test]
fn action_errors_propagate_unchanged() {
    let overrides = OverrideTable::new();
    let mut app = app(&overrides);
    let mut handlers = vec![KeyHandler::on(LogicalEvent::Quit, failing)];
    handlers.extend(bindings::handlers_for(Mode::Main));

    let err = dispatch(
        &handlers,
        &key(Binding::ctrl('q')),
        &overrides,
        &mut app,
        |_, _| Ok(()),
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "backend unavailable");
    assert!(!app.quit_requested);
}
