// ABOUTME: Helpers for reading environment variables with defaults
// ABOUTME: Blank values are treated the same as unset ones

use std::env;
use std::str::FromStr;

/// Returns the variable's value, or `default` when it is unset or blank.
pub fn env_or_default(name: &str, default: &str) -> String {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => default.to_string(),
    }
}

/// Parses the variable, falling back to `default` when unset, blank or unparseable.
pub fn parse_env_or_default<T: FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => match value.trim().parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::warn!("Ignoring invalid value for {}: {:?}", name, value);
                default
            }
        },
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VAR: &str = "TASKDECK_CONFIG_TEST_VAR";

    #[test]
    #[serial]
    fn test_env_or_default_uses_value() {
        env::set_var(VAR, " http://example.test ");
        assert_eq!(env_or_default(VAR, "fallback"), "http://example.test");
        env::remove_var(VAR);
    }

    #[test]
    #[serial]
    fn test_env_or_default_blank_falls_back() {
        env::set_var(VAR, "   ");
        assert_eq!(env_or_default(VAR, "fallback"), "fallback");
        env::remove_var(VAR);
        assert_eq!(env_or_default(VAR, "fallback"), "fallback");
    }

    #[test]
    #[serial]
    fn test_parse_env_or_default() {
        env::set_var(VAR, "250");
        assert_eq!(parse_env_or_default::<u64>(VAR, 10), 250);
        env::set_var(VAR, "abc");
        assert_eq!(parse_env_or_default::<u64>(VAR, 10), 10);
        env::remove_var(VAR);
    }
}
