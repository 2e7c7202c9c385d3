//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where concrete implementations are wired
//! together for the CLI: the invocation context, the stdin prompter, the
//! remote host and the module handler that uses them.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;

use infotech_core::{Config, InvocationContext, ModuleHandler, UnavailableRemote};
use tracing_subscriber::EnvFilter;

use crate::commands::Commands;
use crate::error::CliError;
use crate::handlers::LocalModuleHandler;
use crate::router;
use crate::utils::StdinPrompter;

/// Fully composed state for one invocation.
pub struct CliContext {
    /// Shared context handed to every handler.
    pub invocation: InvocationContext,
    /// Handler behind `create` and `delete`.
    pub handler: Box<dyn ModuleHandler>,
}

impl CliContext {
    /// Dispatch a parsed command using this context.
    pub fn run(&mut self, command: Commands) -> Result<(), CliError> {
        router::dispatch(command, &mut self.invocation, self.handler.as_mut())
    }
}

/// Bootstrap the CLI application.
///
/// Resolves the modules root, then builds the local module handler with a
/// stdin prompter and a remote host that performs no API calls.
pub fn bootstrap(config: Config) -> Result<CliContext, CliError> {
    let modules_root = config.modules_root()?;
    let handler = LocalModuleHandler::new(
        Box::new(StdinPrompter::new()),
        Arc::new(UnavailableRemote::new()),
    );
    Ok(bootstrap_with(config, modules_root, Box::new(handler)))
}

/// Bootstrap with an explicit modules root and handler (for testing).
pub fn bootstrap_with(
    config: Config,
    modules_root: PathBuf,
    handler: Box<dyn ModuleHandler>,
) -> CliContext {
    tracing::debug!(?config, modules_root = %modules_root.display(), "bootstrapped");
    CliContext {
        invocation: InvocationContext::new(config, modules_root),
        handler,
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` enables debug output
/// for this tool's crates and the default shows warnings only. Logs go to
/// stderr so stdout stays reserved for command output.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "info_tech_cli=debug,infotech_cli=debug,infotech_core=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
