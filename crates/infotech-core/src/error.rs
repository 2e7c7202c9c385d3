//! Core error types.
//!
//! `CoreError` is the canonical error type for module lifecycle operations.
//! Adapters map it to their own representation (CLI exit codes and messages).

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::InvalidChoice;

/// Errors reported by a remote repository host.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// No credential is configured for the remote host.
    #[error("{0} is not set")]
    MissingCredential(&'static str),

    /// Remote repository management is not available in this build.
    #[error("remote repository management is not available")]
    Unavailable,

    /// The remote host rejected or failed the request.
    #[error("remote host error: {0}")]
    Host(String),
}

/// Core error type for semantic domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An enumerated option received a value outside its set.
    #[error(transparent)]
    InvalidChoice(#[from] InvalidChoice),

    /// A module name cannot be used as a directory name.
    #[error("Invalid module name '{name}': {reason}")]
    InvalidModuleName { name: String, reason: String },

    /// The module directory already exists.
    #[error("Module '{name}' already exists at {}", .path.display())]
    ModuleExists { name: String, path: PathBuf },

    /// No module directory with this name exists.
    #[error("Module '{name}' not found at {}", .path.display())]
    ModuleNotFound { name: String, path: PathBuf },

    /// The directory exists but carries no module manifest.
    #[error("{} is not a learning module (no {manifest} found)", .path.display())]
    NotAModule { path: PathBuf, manifest: &'static str },

    /// Filesystem operation failed.
    #[error("Failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The module manifest could not be encoded or decoded.
    #[error("Invalid module manifest {}: {source}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reading user input failed.
    #[error("Prompt failed: {0}")]
    Prompt(#[from] anyhow::Error),

    /// Remote repository operation failed.
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl CoreError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
