//! Command implementations.

pub mod cache_status;
pub mod show;
pub mod write;

use clap::ValueEnum;

/// Formats accepted by `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON in the shape an invocation wrapper consumes
    Json,
    Yaml,
    /// Flyway properties file (flyway.conf)
    Conf,
    /// Flyway TOML file (flyway.toml)
    Toml,
    /// Command-line arguments, one per line
    Args,
}

/// Formats accepted by `write`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WriteFormat {
    Conf,
    Toml,
}
