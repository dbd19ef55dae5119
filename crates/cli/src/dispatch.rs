//! Command dispatch.
//!
//! Routes a parsed subcommand to its implementation with the assembled
//! configuration.

use anyhow::Result;
use flyway_config::FlywayConfig;

use crate::args::Commands;
use crate::commands;

pub fn run_command(command: Commands, config: &FlywayConfig) -> Result<()> {
    match command {
        Commands::Show {
            format,
            show_secrets,
        } => commands::show::run(config, format, show_secrets),
        Commands::Url => commands::show::run_url(config),
        Commands::Write {
            path,
            format,
            force,
        } => commands::write::run(config, &path, format, force),
        Commands::CacheStatus { artifact } => commands::cache_status::run(config, &artifact),
    }
}
