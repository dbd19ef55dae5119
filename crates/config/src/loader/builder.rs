//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layering `.env`, environment, and overrides.
//! - Build the final `FlywayConfig` from loaded values.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Rendering the configuration (see render.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - A missing `.env` file is silently ignored.
//! - The `DOTENV_DISABLED` variable is checked before any `.env` file is read.
//! - `build()` never fails: absent values become empty URL parts or `None`.

use secrecy::SecretString;
use std::path::PathBuf;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_BASELINE_ON_MIGRATE, DEFAULT_BASELINE_VERSION, DEFAULT_LOCATIONS,
    DEFAULT_SCHEMA_HISTORY_TABLE, DEFAULT_SQL_MIGRATION_SUFFIXES, ENV_DOTENV_DISABLED,
};
use crate::jdbc::jdbc_url;
use crate::types::{CacheExpiry, DownloadOptions, FlywayArgs, FlywayConfig};

/// Configuration loader that builds a `FlywayConfig` from the environment.
#[derive(Default)]
pub struct ConfigLoader {
    dotenv_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<String>,
    database: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    locations: Option<String>,
    table: Option<String>,
    baseline_version: Option<String>,
    baseline_on_migrate: Option<bool>,
    storage_directory: Option<PathBuf>,
    expiration: Option<CacheExpiry>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Read `.env` from an explicit path instead of searching the working directory.
    pub fn with_dotenv_path(mut self, path: PathBuf) -> Self {
        self.dotenv_path = Some(path);
        self
    }

    /// Load environment variables from a .env file if present.
    ///
    /// Variables already present in the process environment are not overridden.
    /// If `DOTENV_DISABLED` is set to "true" or "1", nothing is loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            tracing::debug!("dotenv loading disabled");
            return Ok(self);
        }

        let result = match self.dotenv_path {
            Some(ref path) => dotenvy::from_path(path).map(|()| path.clone()),
            None => dotenvy::dotenv(),
        };

        match result {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => {
                tracing::debug!("no .env file found, using process environment only");
                Ok(self)
            }
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read connection values from `FLYWAY_PGSQL_*` environment variables.
    pub fn from_env(mut self) -> Self {
        apply_env(&mut self);
        self
    }

    /// Set the database host.
    pub fn with_host(mut self, host: String) -> Self {
        self.host = Some(host);
        self
    }

    /// Set the database port.
    pub fn with_port(mut self, port: String) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the database name.
    pub fn with_database(mut self, database: String) -> Self {
        self.database = Some(database);
        self
    }

    /// Set the database user.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Set the database password.
    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Set the migration script location pattern.
    pub fn with_locations(mut self, locations: String) -> Self {
        self.locations = Some(locations);
        self
    }

    /// Set the schema-history table name.
    pub fn with_table(mut self, table: String) -> Self {
        self.table = Some(table);
        self
    }

    pub fn with_baseline_version(mut self, version: String) -> Self {
        self.baseline_version = Some(version);
        self
    }

    pub fn with_baseline_on_migrate(mut self, enabled: bool) -> Self {
        self.baseline_on_migrate = Some(enabled);
        self
    }

    /// Set the directory the Flyway binary is cached in.
    pub fn with_storage_directory(mut self, dir: PathBuf) -> Self {
        self.storage_directory = Some(dir);
        self
    }

    /// Set the cache expiry for the downloaded Flyway binary.
    pub fn with_expiration(mut self, expiration: CacheExpiry) -> Self {
        self.expiration = Some(expiration);
        self
    }

    /// Build the final configuration.
    ///
    /// This never fails. Missing host, port, or database interpolate as empty
    /// strings; the resulting malformed URL is reported by Flyway on connect.
    pub fn build(self) -> FlywayConfig {
        let host = self.host.unwrap_or_default();
        let port = self.port.unwrap_or_default();
        let database = self.database.unwrap_or_default();

        if host.is_empty() || port.is_empty() || database.is_empty() {
            tracing::debug!(
                host_set = !host.is_empty(),
                port_set = !port.is_empty(),
                database_set = !database.is_empty(),
                "connection URL is incomplete"
            );
        }

        let url = jdbc_url(&host, &port, &database);
        tracing::debug!(%host, %database, "assembled Flyway configuration");

        let default_downloads = DownloadOptions::default();

        FlywayConfig {
            flyway_args: FlywayArgs {
                url,
                locations: self
                    .locations
                    .unwrap_or_else(|| DEFAULT_LOCATIONS.to_string()),
                user: self.username,
                password: self.password,
                sql_migration_suffixes: DEFAULT_SQL_MIGRATION_SUFFIXES.to_string(),
                baseline_on_migrate: self
                    .baseline_on_migrate
                    .unwrap_or(DEFAULT_BASELINE_ON_MIGRATE),
                baseline_version: self
                    .baseline_version
                    .unwrap_or_else(|| DEFAULT_BASELINE_VERSION.to_string()),
                table: self
                    .table
                    .unwrap_or_else(|| DEFAULT_SCHEMA_HISTORY_TABLE.to_string()),
            },
            downloads: DownloadOptions {
                storage_directory: self
                    .storage_directory
                    .unwrap_or(default_downloads.storage_directory),
                expiration: self.expiration.unwrap_or(default_downloads.expiration),
            },
        }
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn host(&self) -> Option<&String> {
        self.host.as_ref()
    }

    pub(crate) fn port(&self) -> Option<&String> {
        self.port.as_ref()
    }

    pub(crate) fn database(&self) -> Option<&String> {
        self.database.as_ref()
    }

    pub(crate) fn username(&self) -> Option<&String> {
        self.username.as_ref()
    }

    pub(crate) fn has_password(&self) -> bool {
        self.password.is_some()
    }

    pub(crate) fn set_host(&mut self, host: Option<String>) {
        self.host = host;
    }

    pub(crate) fn set_port(&mut self, port: Option<String>) {
        self.port = port;
    }

    pub(crate) fn set_database(&mut self, database: Option<String>) {
        self.database = database;
    }

    pub(crate) fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub(crate) fn set_password(&mut self, password: Option<SecretString>) {
        self.password = password;
    }
}
