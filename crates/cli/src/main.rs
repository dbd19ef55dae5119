//! Flyway config CLI - render the Flyway configuration for migration runs.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Load `.env` and environment variables into a `FlywayConfig`.
//! - Print or write the configuration in the form a Flyway invocation needs.
//!
//! Does NOT handle:
//! - Running Flyway or downloading its binary.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap defaults
//!   (including `FLYWAY_ENV_FILE`).
//! - The `--env-file` file is loaded after parsing and only fills variables that
//!   are still unset, so it never overrides `.env` or the process environment.
//! - Logs go to stderr; stdout carries only rendered output.
//! - CLI overrides take precedence over environment values.

mod args;
mod commands;
mod dispatch;
mod error;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use flyway_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(anyhow::Error::from(e).exit_code().as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut loader = ConfigLoader::new();
    if let Some(ref path) = cli.env_file {
        loader = match loader.with_dotenv_path(path.clone()).load_dotenv() {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Failed to load {}: {}", path.display(), e);
                std::process::exit(anyhow::Error::from(e).exit_code().as_i32());
            }
        };
    }

    let config = cli.apply_overrides(loader.from_env()).build();

    let exit_code = match run_command(cli.command, &config) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
