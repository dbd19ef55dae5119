//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Apply connection overrides to a `ConfigLoader`.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::{Parser, Subcommand};
use flyway_config::ConfigLoader;
use std::path::PathBuf;

use crate::commands::{OutputFormat, WriteFormat};

#[derive(Parser)]
#[command(name = "flyway-config")]
#[command(about = "Render Flyway configuration from environment variables", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  flyway-config show\n  flyway-config show --format conf\n  flyway-config --env-file deploy/.env url\n  flyway-config write flyway.conf --force\n  flyway-config cache-status\n"
)]
pub struct Cli {
    /// Path to a .env file (defaults to .env in the current directory)
    #[arg(long, global = true, env = "FLYWAY_ENV_FILE", value_name = "FILE")]
    pub env_file: Option<PathBuf>,

    /// Database host (overrides FLYWAY_PGSQL_HOST)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Database port (overrides FLYWAY_PGSQL_PORT)
    #[arg(long, global = true)]
    pub port: Option<String>,

    /// Database name (overrides FLYWAY_PGSQL_DATABASE)
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// Database user (overrides FLYWAY_PGSQL_USERNAME)
    #[arg(short, long, global = true)]
    pub username: Option<String>,

    /// Database password (overrides FLYWAY_PGSQL_PASSWORD)
    #[arg(short, long, global = true)]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Apply CLI connection overrides on top of the loader.
    pub fn apply_overrides(&self, mut loader: ConfigLoader) -> ConfigLoader {
        if let Some(ref host) = self.host {
            loader = loader.with_host(host.clone());
        }
        if let Some(ref port) = self.port {
            loader = loader.with_port(port.clone());
        }
        if let Some(ref database) = self.database {
            loader = loader.with_database(database.clone());
        }
        if let Some(ref username) = self.username {
            loader = loader.with_username(username.clone());
        }
        if let Some(ref password) = self.password {
            loader = loader.with_password(password.clone());
        }
        loader
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the assembled configuration
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Print the password instead of a mask
        #[arg(long)]
        show_secrets: bool,
    },

    /// Print the JDBC connection URL
    Url,

    /// Write a Flyway configuration file
    Write {
        /// Destination file
        path: PathBuf,

        /// File format
        #[arg(short, long, value_enum, default_value_t = WriteFormat::Conf)]
        format: WriteFormat,

        /// Overwrite the file if it already exists
        #[arg(long)]
        force: bool,
    },

    /// Report whether the cached Flyway binary has expired
    CacheStatus {
        /// Artifact name inside the storage directory
        #[arg(long, default_value = "flyway")]
        artifact: PathBuf,
    },
}
