//! Port definitions (trait abstractions) for the module lifecycle.
//!
//! Ports define the interfaces the command router and handlers expect.
//! They contain no terminal or argument-parsing details.
//!
//! - `ModuleHandler` - what `create` and `delete` dispatch to
//! - `Prompter` - interactive questions, so handlers stay testable
//! - `RemoteRepository` - the source-control host linked to a module

mod module_handler;
mod prompt;
mod remote;

pub use module_handler::ModuleHandler;
pub use prompt::Prompter;
pub use remote::{RemoteRepository, UnavailableRemote};
