//! Process configuration.
//!
//! Configuration comes from the process environment, optionally seeded from
//! a `.env` file by [`load_env_file`]. Every value is optional: a missing
//! credential only degrades remote features, and callers decide how to
//! report it through [`Config::credential`].

mod env;
#[cfg(test)]
pub(crate) mod test_utils;

use std::path::PathBuf;

pub use env::{EnvFileStatus, load_env_file, load_env_file_from};

use crate::error::CoreError;
use crate::{GITHUB_TOKEN_VAR, MODULES_DIR_VAR};

/// Whether the remote-hosting credential is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialStatus {
    Present,
    Missing,
}

/// Structured configuration for one invocation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Remote-hosting token (`GITHUB_TOKEN`). Empty values are treated as unset.
    pub github_token: Option<String>,
    /// Directory modules live in (`INFOTECH_MODULES_DIR`).
    pub modules_dir: Option<PathBuf>,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            github_token: non_empty(GITHUB_TOKEN_VAR),
            modules_dir: non_empty(MODULES_DIR_VAR).map(PathBuf::from),
        }
    }

    pub const fn credential(&self) -> CredentialStatus {
        if self.github_token.is_some() {
            CredentialStatus::Present
        } else {
            CredentialStatus::Missing
        }
    }

    /// Resolve the directory modules are created in and deleted from.
    ///
    /// Falls back to the current working directory.
    pub fn modules_root(&self) -> Result<PathBuf, CoreError> {
        match &self.modules_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir()
                .map_err(|e| CoreError::io("determine current directory", ".", e)),
        }
    }
}

// The token must never end up in logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("github_token", &self.github_token.as_ref().map(|_| "<redacted>"))
            .field("modules_dir", &self.modules_dir)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_credential_present() {
        let config = Config::from_lookup(lookup_from(&[("GITHUB_TOKEN", "ghp_example")]));
        assert_eq!(config.credential(), CredentialStatus::Present);
        assert_eq!(config.github_token.as_deref(), Some("ghp_example"));
    }

    #[test]
    fn test_credential_missing() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.credential(), CredentialStatus::Missing);
    }

    #[test]
    fn test_empty_credential_counts_as_missing() {
        let config = Config::from_lookup(lookup_from(&[("GITHUB_TOKEN", "  ")]));
        assert_eq!(config.credential(), CredentialStatus::Missing);
    }

    #[test]
    fn test_modules_root_override() {
        let config = Config::from_lookup(lookup_from(&[("INFOTECH_MODULES_DIR", "/srv/modules")]));
        assert_eq!(config.modules_root().unwrap(), PathBuf::from("/srv/modules"));
    }

    #[test]
    fn test_modules_root_defaults_to_current_dir() {
        let config = Config::default();
        assert_eq!(
            config.modules_root().unwrap(),
            std::env::current_dir().unwrap()
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = Config::from_lookup(lookup_from(&[("GITHUB_TOKEN", "ghp_secret")]));
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("ghp_secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
