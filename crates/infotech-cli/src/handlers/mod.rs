//! Command handlers.
//!
//! `create` and `delete` go through the [`ModuleHandler`] port so the router
//! can be driven by any implementation; [`LocalModuleHandler`] is the one
//! the binary uses. `validate` and `version` need no handler state and are
//! plain functions.
//!
//! Handlers follow the same shape:
//! - Signature: `pub fn execute(ctx: &mut InvocationContext, ...) -> Result<(), CoreError>`
//! - Print user-facing status to stdout, record non-fatal problems with `ctx.warn`
//! - Leave exit codes and error rendering to the entry point

pub mod create;
pub mod delete;
pub mod validate;
pub mod version;

#[cfg(test)]
pub(crate) mod test_support;

use std::sync::Arc;

use infotech_core::{
    CoreError, CreateModuleRequest, DeleteModuleRequest, InvocationContext, ModuleHandler,
    Prompter, RemoteRepository,
};

/// Module handler working on the local modules root.
///
/// Creates module directories with a `module.json` manifest and deletes
/// them again. Remote repository work is delegated to a [`RemoteRepository`].
pub struct LocalModuleHandler {
    prompter: Box<dyn Prompter>,
    remote: Arc<dyn RemoteRepository>,
}

impl LocalModuleHandler {
    pub fn new(prompter: Box<dyn Prompter>, remote: Arc<dyn RemoteRepository>) -> Self {
        Self { prompter, remote }
    }
}

impl ModuleHandler for LocalModuleHandler {
    fn create_module(
        &mut self,
        ctx: &mut InvocationContext,
        request: &CreateModuleRequest,
    ) -> Result<(), CoreError> {
        create::execute(ctx, self.prompter.as_mut(), request)
    }

    fn delete_module(
        &mut self,
        ctx: &mut InvocationContext,
        request: &DeleteModuleRequest,
    ) -> Result<(), CoreError> {
        delete::execute(ctx, self.prompter.as_mut(), self.remote.as_ref(), request)
    }
}
