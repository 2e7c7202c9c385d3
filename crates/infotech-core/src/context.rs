//! Per-invocation context shared between the router and handlers.

use std::path::{Path, PathBuf};

use crate::config::{Config, CredentialStatus};

/// State created once per process invocation and passed to every handler.
///
/// Handlers may read configuration from it and append warnings. It is never
/// persisted.
#[derive(Debug, Clone)]
pub struct InvocationContext {
    config: Config,
    modules_root: PathBuf,
    warnings: Vec<String>,
}

impl InvocationContext {
    pub const fn new(config: Config, modules_root: PathBuf) -> Self {
        Self {
            config,
            modules_root,
            warnings: Vec::new(),
        }
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub const fn credential(&self) -> CredentialStatus {
        self.config.credential()
    }

    /// Directory module directories are created under.
    pub fn modules_root(&self) -> &Path {
        &self.modules_root
    }

    /// Directory a module with this name lives in.
    pub fn module_dir(&self, name: &str) -> PathBuf {
        self.modules_root.join(name)
    }

    /// Record a non-fatal warning. Showing it to the user is the caller's job.
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(warning = %message, "recorded warning");
        self.warnings.push(message);
    }

    /// Warnings recorded so far, oldest first.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}
