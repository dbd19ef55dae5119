//! Configuration type definitions for the Flyway invocation layer.
//!
//! Responsibilities:
//! - Define the migration-runner arguments (`FlywayArgs`).
//! - Define the binary download cache options (`DownloadOptions`, `CacheExpiry`).
//! - Provide serialization matching the key shape the invocation wrapper expects.
//!
//! Does NOT handle:
//! - Reading environment variables or `.env` files (see `loader` module).
//! - Rendering to Flyway config files or command lines (see `render` module).
//!
//! Invariants:
//! - Secrets use `secrecy::SecretString` so `Debug` never prints them.
//! - Serialized keys are camelCase (`flywayArgs`, `expirationTimeInMs`, ...).
//! - `CacheExpiry::Never` is serialized as the `-1` sentinel.

mod downloads;
mod flyway;

pub use downloads::{CacheExpiry, DownloadOptions};
pub use flyway::{FlywayArgs, FlywayConfig};
