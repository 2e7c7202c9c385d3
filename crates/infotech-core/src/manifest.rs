//! The `module.json` manifest at the root of every module directory.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Difficulty, Language, ModuleDescriptor};
use crate::error::CoreError;

/// File name of the manifest inside a module directory.
pub const MANIFEST_FILE_NAME: &str = "module.json";

/// Metadata recorded when a module is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleManifest {
    pub name: String,
    pub template: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub language: Language,
    /// Tool and version that created the module.
    pub generator: String,
    pub created_at: DateTime<Utc>,
}

impl ModuleManifest {
    pub fn new(module: &ModuleDescriptor, created_at: DateTime<Utc>) -> Self {
        Self {
            name: module.name.clone(),
            template: module.template.clone(),
            category: module.category.clone(),
            difficulty: module.difficulty,
            language: module.language,
            generator: format!("{} {}", crate::PROGRAM_NAME, crate::VERSION),
            created_at,
        }
    }

    pub fn descriptor(&self) -> ModuleDescriptor {
        ModuleDescriptor {
            name: self.name.clone(),
            template: self.template.clone(),
            category: self.category.clone(),
            difficulty: self.difficulty,
            language: self.language,
        }
    }

    /// Whether `dir` contains a manifest file.
    pub fn exists_in(dir: &Path) -> bool {
        dir.join(MANIFEST_FILE_NAME).is_file()
    }

    /// Write the manifest into `dir`, replacing any existing one.
    pub fn write_to(&self, dir: &Path) -> Result<(), CoreError> {
        let path = dir.join(MANIFEST_FILE_NAME);
        let mut content =
            serde_json::to_string_pretty(self).map_err(|source| CoreError::Manifest {
                path: path.clone(),
                source,
            })?;
        content.push('\n');
        fs::write(&path, content).map_err(|e| CoreError::io("write", &path, e))
    }

    /// Read the manifest from `dir`.
    pub fn read_from(dir: &Path) -> Result<Self, CoreError> {
        let path = dir.join(MANIFEST_FILE_NAME);
        let content = fs::read_to_string(&path).map_err(|e| CoreError::io("read", &path, e))?;
        serde_json::from_str(&content).map_err(|source| CoreError::Manifest { path, source })
    }
}
