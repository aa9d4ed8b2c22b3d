//! Environment variable expansion for configuration strings.

use std::borrow::Cow;

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the config field and is only used in error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_literal() {
        assert_eq!(
            expand_env("https://wiki.example.com", "f").unwrap(),
            "https://wiki.example.com"
        );
    }

    #[test]
    fn test_expand_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("CFA_EXPAND_UNSET_TEST");
        }
        assert_eq!(
            expand_env("${CFA_EXPAND_UNSET_TEST:-fallback}", "f").unwrap(),
            "fallback"
        );
    }

    #[test]
    fn test_expand_missing_var_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("CFA_EXPAND_MISSING_TEST");
        }
        let err = expand_env("${CFA_EXPAND_MISSING_TEST}", "confluence.email").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("CFA_EXPAND_MISSING_TEST"), "{msg}");
        assert!(msg.contains("confluence.email"), "{msg}");
    }
}
