//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read environment variables with empty/whitespace filtering.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Builder values set before `from_env()` are never overwritten.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).

use std::path::PathBuf;

use super::builder::ConfigLoader;
use crate::constants::CONFIG_PATH_ENV_VAR;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub(super) fn apply_env(loader: &mut ConfigLoader) {
    if loader.config_path().is_none()
        && let Some(path) = env_var_or_none(CONFIG_PATH_ENV_VAR)
    {
        tracing::debug!(path = %path, "Using config path from {}", CONFIG_PATH_ENV_VAR);
        loader.set_config_path(Some(PathBuf::from(path)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_empty_and_whitespace_strings() {
        let key1 = "_CHATTERM_TEST_UNSET_VAR";
        assert!(env_var_or_none(key1).is_none(), "Unset env var should return None");

        temp_env::with_vars([(key1, Some(""))], || {
            assert!(env_var_or_none(key1).is_none(), "Empty string env var should return None");
        });

        temp_env::with_vars([(key1, Some("   "))], || {
            assert!(
                env_var_or_none(key1).is_none(),
                "Whitespace-only env var should return None"
            );
        });

        let key2 = "_CHATTERM_TEST_SET_VAR";
        temp_env::with_vars([(key2, Some(" test-value "))], || {
            assert_eq!(env_var_or_none(key2), Some("test-value".to_string()));
        });
    }

    #[test]
    #[serial]
    fn test_env_does_not_override_explicit_path() {
        temp_env::with_vars([(CONFIG_PATH_ENV_VAR, Some("/from/env.json"))], || {
            let loader = ConfigLoader::new()
                .with_config_path(PathBuf::from("/from/cli.json"))
                .from_env();
            assert_eq!(loader.config_path(), Some(&PathBuf::from("/from/cli.json")));
        });
    }

    #[test]
    #[serial]
    fn test_env_sets_path_when_unset() {
        temp_env::with_vars([(CONFIG_PATH_ENV_VAR, Some("/from/env.json"))], || {
            let loader = ConfigLoader::new().from_env();
            assert_eq!(loader.config_path(), Some(&PathBuf::from("/from/env.json")));
        });
    }
}
