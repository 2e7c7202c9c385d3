//! Learning module descriptors and the requests handlers receive.

use serde::{Deserialize, Serialize};

use super::choice::{Difficulty, Language};
use crate::error::CoreError;

/// Template used when none is given.
pub const DEFAULT_TEMPLATE: &str = "module-basic";

/// Category used when none is given.
pub const DEFAULT_CATEGORY: &str = "programming";

/// Identity and classification of a learning module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    /// Unique module name, documented as kebab-case.
    pub name: String,
    /// Template identifier the module is scaffolded from.
    pub template: String,
    /// Free-form category, e.g. `programming` or `devops`.
    pub category: String,
    pub difficulty: Difficulty,
    pub language: Language,
}

impl ModuleDescriptor {
    /// Create a descriptor with every optional field at its default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: DEFAULT_TEMPLATE.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            difficulty: Difficulty::default(),
            language: Language::default(),
        }
    }
}

/// A validated, option-complete request to create a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateModuleRequest {
    pub module: ModuleDescriptor,
    /// Prompt for the descriptor fields before creating.
    pub interactive: bool,
}

/// A request to delete a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteModuleRequest {
    pub name: String,
    /// Skip the confirmation prompt.
    pub force: bool,
    /// Also delete the linked remote repository.
    pub remove_repo: bool,
}

/// Check that a module name can be used as a single directory name.
///
/// This is a filesystem safety check, not a format check: names that are
/// not kebab-case pass here and are only warned about by handlers.
pub fn validate_module_name(name: &str) -> Result<(), CoreError> {
    let reason = if name.trim().is_empty() {
        Some("name is empty")
    } else if name == "." || name == ".." {
        Some("name refers to a relative directory")
    } else if name.contains(['/', '\\']) {
        Some("name contains a path separator")
    } else if name.chars().any(char::is_control) {
        Some("name contains control characters")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(CoreError::InvalidModuleName {
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

/// Whether a name is lowercase kebab-case (`python-basics`, `linux-admin-2`).
pub fn is_kebab_case(name: &str) -> bool {
    !name.is_empty()
        && name.split('-').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}
