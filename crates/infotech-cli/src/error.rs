//! CLI-specific error types.
//!
//! Usage errors never reach this type: clap reports them (exit code 2)
//! before any command runs. Everything here surfaces at the entry point as
//! a single `❌ Error:` line and exit code 1.

use infotech_core::CoreError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Module lifecycle error from a handler.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error outside a handler (runtime startup, help output).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The command panicked.
    #[error("Command panicked: {0}")]
    Panic(String),

    /// The command task ended without producing a result.
    #[error("Internal error: {0}")]
    Internal(String),
}
