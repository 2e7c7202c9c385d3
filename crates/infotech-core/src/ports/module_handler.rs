//! Module lifecycle handler trait.

use crate::context::InvocationContext;
use crate::domain::{CreateModuleRequest, DeleteModuleRequest};
use crate::error::CoreError;

/// Performs the filesystem and remote work behind `create` and `delete`.
///
/// The router only calls a handler with a fully validated request: every
/// enumerated field has already been range-checked.
pub trait ModuleHandler: Send {
    /// Create a module from a template.
    fn create_module(
        &mut self,
        ctx: &mut InvocationContext,
        request: &CreateModuleRequest,
    ) -> Result<(), CoreError>;

    /// Delete a module, optionally together with its remote repository.
    fn delete_module(
        &mut self,
        ctx: &mut InvocationContext,
        request: &DeleteModuleRequest,
    ) -> Result<(), CoreError>;
}
