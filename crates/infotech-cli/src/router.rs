//! Command dispatch.
//!
//! By the time a [`Commands`] value exists, clap has already rejected
//! missing arguments and out-of-range choices, so every request built here
//! is option-complete.

use infotech_core::{
    Config, CreateModuleRequest, CredentialStatus, DeleteModuleRequest, GITHUB_TOKEN_VAR,
    InvocationContext, ModuleDescriptor, ModuleHandler,
};

use crate::commands::Commands;
use crate::error::CliError;
use crate::handlers::{validate, version};
use crate::presentation::print_warning;

/// Lines printed when the remote-hosting credential is missing.
pub fn missing_credential_lines() -> [String; 3] {
    [
        format!("{GITHUB_TOKEN_VAR} not found in environment"),
        "Some features may not work properly.".to_string(),
        format!("Please set {GITHUB_TOKEN_VAR} in your .env file."),
    ]
}

/// Warn (never fail) when the credential is missing.
///
/// Called once per invocation, before the sub-command runs. Returns whether
/// a warning was printed.
pub fn warn_if_missing_credential(config: &Config) -> bool {
    if config.credential() == CredentialStatus::Present {
        return false;
    }

    let [headline, rest @ ..] = missing_credential_lines();
    print_warning(&headline);
    for line in rest {
        println!("{line}");
    }
    true
}

/// Dispatch a parsed command to its handler.
pub fn dispatch(
    command: Commands,
    ctx: &mut InvocationContext,
    handler: &mut dyn ModuleHandler,
) -> Result<(), CliError> {
    tracing::debug!(command = command.name(), "dispatching");

    match command {
        Commands::Create {
            module_name,
            template,
            category,
            difficulty,
            language,
            interactive,
        } => {
            let request = CreateModuleRequest {
                module: ModuleDescriptor {
                    name: module_name,
                    template,
                    category,
                    difficulty,
                    language,
                },
                interactive,
            };
            handler.create_module(ctx, &request)?;
        }
        Commands::Delete {
            module_name,
            force,
            remove_repo,
        } => {
            let request = DeleteModuleRequest {
                name: module_name,
                force,
                remove_repo,
            };
            handler.delete_module(ctx, &request)?;
        }
        Commands::Validate { path } => validate::execute(&path),
        Commands::Version => version::execute(),
    }

    Ok(())
}
