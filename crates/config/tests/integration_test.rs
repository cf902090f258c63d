//! Integration tests for configuration loading.
//!
//! These tests verify end-to-end config loading behavior through the public
//! API, including path precedence between builder methods and the
//! environment.

use std::io::Write;
use std::path::PathBuf;

use chatterm_config::constants::CONFIG_PATH_ENV_VAR;
use chatterm_config::{Binding, ConfigError, ConfigLoader, LogicalEvent, env_var_or_none};
use serial_test::serial;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

/// Test that the env var path is used when no builder path is set.
#[test]
#[serial]
fn test_env_config_path_is_loaded() {
    let file = write_config(r#"{"keybindings": {"quit": "Ctrl+x"}}"#);
    let path = file.path().to_string_lossy().to_string();

    temp_env::with_vars([(CONFIG_PATH_ENV_VAR, Some(path.as_str()))], || {
        let loaded = ConfigLoader::new().from_env().load().expect("load from env path");
        assert_eq!(
            loaded.overrides.resolve(LogicalEvent::Quit),
            vec![Binding::ctrl('x')]
        );
    });
}

/// Test that builder paths (simulating CLI args) take precedence over env vars.
#[test]
#[serial]
fn test_builder_path_beats_env() {
    let cli_file = write_config(r#"{"settings": {"user_name": "from-cli"}}"#);
    let env_file = write_config(r#"{"settings": {"user_name": "from-env"}}"#);
    let env_path = env_file.path().to_string_lossy().to_string();

    temp_env::with_vars([(CONFIG_PATH_ENV_VAR, Some(env_path.as_str()))], || {
        let loaded = ConfigLoader::new()
            .with_config_path(cli_file.path().to_path_buf())
            .from_env()
            .load()
            .expect("load from cli path");
        assert_eq!(loaded.config.settings.user_name, "from-cli");
    });
}

/// Test that a missing env-supplied path is an error, not a silent default.
#[test]
#[serial]
fn test_missing_env_path_is_error() {
    temp_env::with_vars(
        [(CONFIG_PATH_ENV_VAR, Some("/nonexistent/chatterm/config.json"))],
        || {
            let result = ConfigLoader::new().from_env().load();
            assert!(matches!(result, Err(ConfigError::ConfigFileRead { .. })));
        },
    );
}

/// Test that env_var_or_none is exported and works correctly
#[test]
#[serial]
fn test_env_var_or_none_exported() {
    temp_env::with_vars([(CONFIG_PATH_ENV_VAR, None::<&str>)], || {
        assert_eq!(env_var_or_none(CONFIG_PATH_ENV_VAR), None);
    });
}

/// Errors carry the offending path in their message.
#[test]
fn test_error_messages_name_the_path() {
    let path = PathBuf::from("/nonexistent/config.json");
    let err = ConfigLoader::new()
        .with_config_path(path.clone())
        .load()
        .unwrap_err();
    assert!(err.to_string().contains(&path.display().to_string()));
}
