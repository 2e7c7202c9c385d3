//! Command-line adapter for the InfoTech.io educational platform.
//!
//! The binary wires these pieces together: `parser` and `commands` define
//! the argument surface, `bootstrap` composes the invocation context and the
//! default module handler, `router` dispatches a parsed command, and `entry`
//! turns the result (or a Ctrl+C) into an exit code.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Only exercised by the end-to-end tests under tests/
#[cfg(test)]
use assert_cmd as _;
#[cfg(test)]
use predicates as _;

pub mod bootstrap;
pub mod commands;
pub mod entry;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod router;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliContext, bootstrap, bootstrap_with, init_tracing};
pub use commands::Commands;
pub use entry::Outcome;
pub use error::CliError;
pub use handlers::LocalModuleHandler;
pub use parser::Cli;
