//! Shared test utilities for flyway-config integration tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - `DOTENV_DISABLED=1` is set and every `FLYWAY_PGSQL_*` variable is cleared.

use assert_cmd::Command;

/// Returns a hermetic `flyway-config` command for integration testing.
pub fn flyway_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("flyway-config");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    cmd.env_remove("FLYWAY_PGSQL_HOST")
        .env_remove("FLYWAY_PGSQL_PORT")
        .env_remove("FLYWAY_PGSQL_DATABASE")
        .env_remove("FLYWAY_PGSQL_USERNAME")
        .env_remove("FLYWAY_PGSQL_PASSWORD")
        .env_remove("FLYWAY_ENV_FILE");

    cmd
}

/// Returns a hermetic command with the canonical `db.local:5432/app` connection.
#[allow(dead_code)]
pub fn flyway_cmd_with_connection() -> Command {
    let mut cmd = flyway_cmd();
    cmd.env("FLYWAY_PGSQL_HOST", "db.local")
        .env("FLYWAY_PGSQL_PORT", "5432")
        .env("FLYWAY_PGSQL_DATABASE", "app");
    cmd
}
