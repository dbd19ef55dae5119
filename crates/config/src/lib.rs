//! Flyway configuration for PostgreSQL migrations.
//!
//! This crate loads connection parameters from `.env` files and environment
//! variables and assembles the configuration handed to the Flyway
//! migration tool: JDBC URL, credentials, migration locations, baseline
//! settings, schema-history table, and binary download cache options.

mod cache;
pub mod constants;
mod global;
mod jdbc;
mod loader;
mod render;
pub mod types;

pub use global::{flyway_config, load_from_env};
pub use jdbc::jdbc_url;
pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{CacheExpiry, DownloadOptions, FlywayArgs, FlywayConfig};
