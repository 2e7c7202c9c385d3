//! `.env` file loading.
//!
//! Values from the file are added to the process environment. Variables
//! already set by the caller's shell always win. Loading is best-effort:
//! nothing here returns an error.

use std::path::{Path, PathBuf};

/// What happened when looking for a `.env` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFileStatus {
    /// The file was found and its variables were applied.
    Loaded(PathBuf),
    /// No file was found. Not an error.
    NotFound,
    /// A file was found but could not be read or parsed.
    Invalid { reason: String },
}

/// Load the nearest `.env` file, searching the current directory and its parents.
pub fn load_env_file() -> EnvFileStatus {
    classify(dotenvy::dotenv())
}

/// Load a `.env` file from an explicit path.
pub fn load_env_file_from(path: &Path) -> EnvFileStatus {
    classify(dotenvy::from_path(path).map(|()| path.to_path_buf()))
}

fn classify(result: dotenvy::Result<PathBuf>) -> EnvFileStatus {
    match result {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded environment file");
            EnvFileStatus::Loaded(path)
        }
        Err(e) if e.not_found() => {
            tracing::debug!("no environment file found");
            EnvFileStatus::NotFound
        }
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable environment file");
            EnvFileStatus::Invalid {
                reason: e.to_string(),
            }
        }
    }
}
