//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map errors in an anyhow chain to the appropriate exit code.
//!
//! Invariants:
//! - Exit code 2 matches clap's usage-error code.

use flyway_config::ConfigError;

/// Structured exit codes for flyway-config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Usage error - invalid arguments (emitted by clap itself).
    #[allow(dead_code)]
    UsageError = 2,

    /// I/O error - a file could not be read or written.
    IoError = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if cause.downcast_ref::<std::io::Error>().is_some() {
                return ExitCode::IoError;
            }
            if let Some(ConfigError::DotenvIo { .. }) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::IoError;
            }
        }
        ExitCode::GeneralError
    }
}
