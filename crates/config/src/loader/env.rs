//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read the `FLYWAY_PGSQL_*` variables.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide a helper for reading env vars that passes values through untouched.
//!
//! Does NOT handle:
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//! - Building the final FlywayConfig (see builder.rs).
//!
//! Invariants:
//! - Only an unset (or non-UTF-8) variable is `None`.
//! - Values are passed through literally: no trimming, no blank filtering,
//!   no validation. The port stays text.
//! - Values already set on the loader (builder overrides) are not replaced.

use secrecy::SecretString;

use super::builder::ConfigLoader;
use crate::constants::{
    ENV_PGSQL_DATABASE, ENV_PGSQL_HOST, ENV_PGSQL_PASSWORD, ENV_PGSQL_PORT, ENV_PGSQL_USERNAME,
};

/// Read an environment variable, returning None only if it is unset.
///
/// Empty and whitespace-padded values are returned exactly as set.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Apply environment variable configuration to the loader.
///
/// Builder overrides set before this call take precedence.
pub fn apply_env(loader: &mut ConfigLoader) {
    if loader.host().is_none() {
        loader.set_host(env_var_or_none(ENV_PGSQL_HOST));
    }
    if loader.port().is_none() {
        loader.set_port(env_var_or_none(ENV_PGSQL_PORT));
    }
    if loader.database().is_none() {
        loader.set_database(env_var_or_none(ENV_PGSQL_DATABASE));
    }
    if loader.username().is_none() {
        loader.set_username(env_var_or_none(ENV_PGSQL_USERNAME));
    }
    if !loader.has_password() {
        loader.set_password(
            env_var_or_none(ENV_PGSQL_PASSWORD).map(|p| SecretString::new(p.into())),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_returns_values_literally() {
        let key1 = "_FLYWAY_TEST_UNSET_VAR";
        assert!(env_var_or_none(key1).is_none(), "Unset env var should return None");

        temp_env::with_vars([(key1, Some(""))], || {
            assert_eq!(env_var_or_none(key1), Some(String::new()));
        });

        let key2 = "_FLYWAY_TEST_SET_VAR";
        temp_env::with_vars([(key2, Some(" db.local "))], || {
            assert_eq!(env_var_or_none(key2), Some(" db.local ".to_string()));
        });
    }

    #[test]
    #[serial]
    fn test_apply_env_does_not_replace_overrides() {
        temp_env::with_vars(
            [
                (ENV_PGSQL_HOST, Some("env-host")),
                (ENV_PGSQL_PORT, Some("6543")),
                (ENV_PGSQL_DATABASE, Some("env-db")),
                (ENV_PGSQL_USERNAME, None::<&str>),
                (ENV_PGSQL_PASSWORD, None::<&str>),
            ],
            || {
                let mut loader = ConfigLoader::new().with_host("cli-host".to_string());
                apply_env(&mut loader);
                assert_eq!(loader.host().map(String::as_str), Some("cli-host"));
                assert_eq!(loader.port().map(String::as_str), Some("6543"));
                assert_eq!(loader.database().map(String::as_str), Some("env-db"));
                assert!(loader.username().is_none());
                assert!(!loader.has_password());
            },
        );
    }
}
