//! Process-wide Flyway configuration.
//!
//! The configuration is assembled once, on first access, from `.env` and
//! the process environment, then shared for the life of the process.

use std::sync::OnceLock;

use crate::loader::ConfigLoader;
use crate::types::FlywayConfig;

static FLYWAY_CONFIG: OnceLock<FlywayConfig> = OnceLock::new();

/// Load `.env` (best effort) and assemble a configuration from the environment.
///
/// A malformed `.env` is logged and skipped; assembly always proceeds.
pub fn load_from_env() -> FlywayConfig {
    let loader = match ConfigLoader::new().load_dotenv() {
        Ok(loader) => loader,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable .env file");
            ConfigLoader::new()
        }
    };
    loader.from_env().build()
}

/// The process-wide configuration, built on first call.
///
/// Every call returns the same instance.
pub fn flyway_config() -> &'static FlywayConfig {
    FLYWAY_CONFIG.get_or_init(load_from_env)
}
