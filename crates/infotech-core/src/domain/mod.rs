//! Core domain types.
//!
//! # Structure
//!
//! - `choice` - enumerated option values (`Difficulty`, `Language`) and `InvalidChoice`
//! - `module` - module descriptors and handler requests

mod choice;
mod module;

pub use choice::{Difficulty, InvalidChoice, Language};
pub use module::{
    CreateModuleRequest, DEFAULT_CATEGORY, DEFAULT_TEMPLATE, DeleteModuleRequest,
    ModuleDescriptor, is_kebab_case, validate_module_name,
};
