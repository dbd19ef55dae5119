//! Centralized constants for the Flyway configuration workspace.
//!
//! This module contains environment variable names and the fixed
//! migration-runner defaults, so the loader, renderers, and CLI agree
//! on a single source of truth.

// =============================================================================
// Environment Variables
// =============================================================================

/// Database host interpolated into the JDBC URL.
pub const ENV_PGSQL_HOST: &str = "FLYWAY_PGSQL_HOST";

/// Database port interpolated into the JDBC URL (kept as text, never parsed).
pub const ENV_PGSQL_PORT: &str = "FLYWAY_PGSQL_PORT";

/// Database name interpolated into the JDBC URL.
pub const ENV_PGSQL_DATABASE: &str = "FLYWAY_PGSQL_DATABASE";

/// Database user passed to Flyway.
pub const ENV_PGSQL_USERNAME: &str = "FLYWAY_PGSQL_USERNAME";

/// Database password passed to Flyway.
pub const ENV_PGSQL_PASSWORD: &str = "FLYWAY_PGSQL_PASSWORD";

/// When set to `1` or `true`, `.env` loading is skipped entirely.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

/// All variables read by the loader, in URL order followed by credentials.
pub const PGSQL_ENV_VARS: [&str; 5] = [
    ENV_PGSQL_HOST,
    ENV_PGSQL_PORT,
    ENV_PGSQL_DATABASE,
    ENV_PGSQL_USERNAME,
    ENV_PGSQL_PASSWORD,
];

// =============================================================================
// Migration Runner Defaults
// =============================================================================

/// JDBC scheme prefix for PostgreSQL connections.
pub const JDBC_POSTGRESQL_PREFIX: &str = "jdbc:postgresql://";

/// Location pattern Flyway scans for migration scripts.
pub const DEFAULT_LOCATIONS: &str = "filesystem:migrations";

/// File suffix filter for SQL migrations.
pub const DEFAULT_SQL_MIGRATION_SUFFIXES: &str = ".sql";

/// Whether an existing unversioned schema is baselined on first migrate.
pub const DEFAULT_BASELINE_ON_MIGRATE: bool = true;

/// Version label assigned to the baseline.
pub const DEFAULT_BASELINE_VERSION: &str = "1";

/// Bookkeeping table Flyway uses to record applied migrations.
pub const DEFAULT_SCHEMA_HISTORY_TABLE: &str = "flyway_schema_history";

// =============================================================================
// Download Cache Defaults
// =============================================================================

/// Directory the downloaded Flyway binary is cached in.
pub const DEFAULT_STORAGE_DIRECTORY: &str = "./flyway";

/// Sentinel expiration value meaning the cache never expires.
pub const NEVER_EXPIRE_MS: i64 = -1;

/// Placeholder shown instead of the password in redacted output.
pub const REDACTED_PLACEHOLDER: &str = "********";
