//! Core domain types, configuration and port definitions for `info_tech_cli`.
//!
//! This crate holds everything the command-line adapter needs that is not
//! tied to argument parsing or terminal I/O:
//!
//! - `domain` - module descriptors and enumerated option choices
//! - `config` - `.env` loading and the structured process configuration
//! - `context` - the per-invocation context shared with handlers
//! - `ports` - handler, prompt and remote-repository traits
//! - `manifest` - the `module.json` file that marks a module directory
//! - `error` - the core error type adapters map to exit codes
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod context;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod ports;

pub use config::{Config, CredentialStatus, EnvFileStatus, load_env_file, load_env_file_from};
pub use context::InvocationContext;
pub use domain::{
    CreateModuleRequest, DeleteModuleRequest, Difficulty, InvalidChoice, Language,
    ModuleDescriptor, is_kebab_case, validate_module_name,
};
pub use error::{CoreError, RemoteError};
pub use manifest::{MANIFEST_FILE_NAME, ModuleManifest};
pub use ports::{ModuleHandler, Prompter, RemoteRepository, UnavailableRemote};

/// Program name as shown by `--version` and the `version` command.
pub const PROGRAM_NAME: &str = "info_tech_cli";

/// Fixed CLI version string.
pub const VERSION: &str = "0.1.0";

/// Human-readable product name.
pub const PRODUCT_NAME: &str = "InfoTech.io Educational Platform CLI";

/// Author contact line.
pub const AUTHOR: &str = "A1eksMa <a1ex_ma@mail.ru>";

/// Environment variable holding the remote-hosting credential.
pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Environment variable overriding the modules root directory.
pub const MODULES_DIR_VAR: &str = "INFOTECH_MODULES_DIR";
