//! Remote repository host trait.

use crate::error::RemoteError;

/// A source-control host that may hold a repository linked to a module.
pub trait RemoteRepository: Send + Sync {
    /// Human-readable host name for messages, e.g. `GitHub`.
    fn host_name(&self) -> &str;

    /// Delete the repository linked to `module_name`.
    fn delete_repository(&self, token: &str, module_name: &str) -> Result<(), RemoteError>;
}

/// Remote host used when no API client is wired in.
///
/// Every call reports [`RemoteError::Unavailable`]; it never touches the network.
#[derive(Debug, Clone, Default)]
pub struct UnavailableRemote;

impl UnavailableRemote {
    pub const fn new() -> Self {
        Self
    }
}

impl RemoteRepository for UnavailableRemote {
    fn host_name(&self) -> &str {
        "GitHub"
    }

    fn delete_repository(&self, _token: &str, module_name: &str) -> Result<(), RemoteError> {
        tracing::debug!(module = module_name, "remote repository deletion requested");
        Err(RemoteError::Unavailable)
    }
}
