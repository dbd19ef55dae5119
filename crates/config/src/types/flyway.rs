//! Migration-runner argument types.
//!
//! Responsibilities:
//! - Define `FlywayArgs` (connection URL, credentials, locations, baseline, table).
//! - Define the top-level `FlywayConfig` combining runner args and download options.
//!
//! Does NOT handle:
//! - Building the JDBC URL from parts (see `jdbc` module).
//! - Validating values; missing pieces flow through as empty strings or `None`.
//!
//! Invariants:
//! - `password` is a `SecretString`; it is exposed only by serialization and
//!   the renderers, never by `Debug`.
//! - `user` and `password` are omitted from serialized output when absent.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use super::downloads::DownloadOptions;

/// Module for serializing `Option<SecretString>` as an optional string.
mod option_secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(secret: &Option<SecretString>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match secret {
            Some(value) => serializer.serialize_some(value.expose_secret()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.map(|s| SecretString::new(s.into())))
    }
}

/// Arguments handed to the Flyway executable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlywayArgs {
    /// JDBC connection URL (`jdbc:postgresql://host:port/database`).
    pub url: String,
    /// Location pattern for migration scripts.
    pub locations: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "option_secret_string"
    )]
    pub password: Option<SecretString>,
    /// File suffix filter for SQL migrations.
    pub sql_migration_suffixes: String,
    /// Baseline a pre-existing schema automatically on first migrate.
    pub baseline_on_migrate: bool,
    pub baseline_version: String,
    /// Schema-history table name.
    pub table: String,
}

/// Complete configuration consumed by the Flyway invocation wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlywayConfig {
    /// Migration-runner arguments.
    pub flyway_args: FlywayArgs,
    /// Flyway binary download options.
    pub downloads: DownloadOptions,
}
