//! Configuration loader for `.env` files and environment variables.
//!
//! Responsibilities:
//! - Load `.env` files into the process environment (best effort).
//! - Provide a builder-pattern `ConfigLoader` for layering env values and overrides.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Rendering configuration for Flyway (see `render`).
//! - The process-wide instance (see `global`).
//!
//! Invariants / Assumptions:
//! - Builder overrides take precedence over environment values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
