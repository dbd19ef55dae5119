//! Rendering the configuration into forms Flyway understands.
//!
//! Responsibilities:
//! - Serialize to the JSON/YAML shape consumed by an invocation wrapper.
//! - Render a Flyway properties file (`flyway.conf`) and TOML file (`flyway.toml`).
//! - Render `-key=value` command-line arguments for the Flyway executable.
//! - Produce a redacted copy for display.
//!
//! Does NOT handle:
//! - Writing files or choosing paths (see the CLI crate).
//!
//! Invariants:
//! - Absent credentials are omitted from every rendering.
//! - Argument order is stable: url, user, password, locations, suffixes,
//!   baseline flag, baseline version, table.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::constants::REDACTED_PLACEHOLDER;
use crate::loader::ConfigError;
use crate::types::FlywayConfig;

/// Environment name used in rendered `flyway.toml` files.
const TOML_ENVIRONMENT: &str = "default";

#[derive(Serialize)]
struct TomlDocument<'a> {
    environments: BTreeMap<&'static str, TomlEnvironment<'a>>,
    flyway: TomlFlyway<'a>,
}

#[derive(Serialize)]
struct TomlEnvironment<'a> {
    url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TomlFlyway<'a> {
    environment: &'static str,
    locations: Vec<&'a str>,
    sql_migration_suffixes: Vec<&'a str>,
    baseline_on_migrate: bool,
    baseline_version: &'a str,
    table: &'a str,
}

/// Split a Flyway comma-separated list into trimmed, non-empty items.
fn split_list(value: &str) -> Vec<&str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

/// Escape a value for a Java properties file.
///
/// `Properties.load` strips leading whitespace from values, so a leading
/// space is written as `\ ` to survive the round trip.
fn escape_property_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for (i, c) in value.chars().enumerate() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\x0c' => escaped.push_str("\\f"),
            ' ' if i == 0 => escaped.push_str("\\ "),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl FlywayConfig {
    /// Ordered `(key, value)` pairs shared by the properties and argument renderers.
    fn flyway_pairs(&self) -> Vec<(&'static str, String)> {
        let args = &self.flyway_args;
        let mut pairs = vec![("url", args.url.clone())];
        if let Some(ref user) = args.user {
            pairs.push(("user", user.clone()));
        }
        if let Some(ref password) = args.password {
            pairs.push(("password", password.expose_secret().to_string()));
        }
        pairs.push(("locations", args.locations.clone()));
        pairs.push(("sqlMigrationSuffixes", args.sql_migration_suffixes.clone()));
        pairs.push(("baselineOnMigrate", args.baseline_on_migrate.to_string()));
        pairs.push(("baselineVersion", args.baseline_version.clone()));
        pairs.push(("table", args.table.clone()));
        pairs
    }

    /// Pretty JSON in the shape the invocation wrapper consumes.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Render {
            format: "json",
            message: e.to_string(),
        })
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Render {
            format: "yaml",
            message: e.to_string(),
        })
    }

    /// Render a `flyway.conf` properties file.
    pub fn to_conf(&self) -> String {
        self.flyway_pairs()
            .into_iter()
            .map(|(key, value)| format!("flyway.{key}={}\n", escape_property_value(&value)))
            .collect()
    }

    /// Render a `flyway.toml` file with the connection in a `default` environment.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        let args = &self.flyway_args;
        let mut environments = BTreeMap::new();
        environments.insert(
            TOML_ENVIRONMENT,
            TomlEnvironment {
                url: &args.url,
                user: args.user.as_deref(),
                password: args.password.as_ref().map(|p| p.expose_secret()),
            },
        );

        let document = TomlDocument {
            environments,
            flyway: TomlFlyway {
                environment: TOML_ENVIRONMENT,
                locations: split_list(&args.locations),
                sql_migration_suffixes: split_list(&args.sql_migration_suffixes),
                baseline_on_migrate: args.baseline_on_migrate,
                baseline_version: &args.baseline_version,
                table: &args.table,
            },
        };

        toml::to_string(&document).map_err(|e| ConfigError::Render {
            format: "toml",
            message: e.to_string(),
        })
    }

    /// Render `-key=value` arguments for the Flyway executable.
    pub fn command_args(&self) -> Vec<String> {
        self.flyway_pairs()
            .into_iter()
            .map(|(key, value)| format!("-{key}={value}"))
            .collect()
    }

    /// Copy of this configuration with the password masked.
    pub fn redacted(&self) -> FlywayConfig {
        let mut copy = self.clone();
        if copy.flyway_args.password.is_some() {
            copy.flyway_args.password =
                Some(SecretString::new(REDACTED_PLACEHOLDER.to_string().into()));
        }
        copy
    }
}
