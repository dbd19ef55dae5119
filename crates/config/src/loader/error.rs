//! Error types for configuration loading and rendering.
//!
//! Responsibilities:
//! - Define error variants for `.env` loading failures.
//! - Define error variants for rendering and writing Flyway config files.
//!
//! Does NOT handle:
//! - Missing environment variables. Assembly never fails; absent values
//!   flow through as empty strings or `None`.
//!
//! Invariants:
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur while loading or rendering configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,

    #[error("Failed to render configuration as {format}: {message}")]
    Render {
        format: &'static str,
        message: String,
    },
}
