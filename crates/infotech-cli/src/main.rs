//! CLI entry point.
//!
//! Loads `.env`, parses arguments, warns about a missing credential and
//! hands the command to [`entry::run`], which owns the exit code.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use infotech_cli::{Cli, entry, init_tracing, router};
use infotech_core::{Config, load_env_file};

fn main() -> ExitCode {
    // First, so every later read of the environment sees values from the file.
    let env_status = load_env_file();

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!(?env_status, "environment file");

    let Some(command) = cli.command else {
        if let Err(e) = Cli::command().print_help() {
            eprintln!("❌ Error: {e}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    };

    let config = Config::from_env();
    router::warn_if_missing_credential(&config);

    let outcome = entry::run(command, config);
    outcome.report();
    ExitCode::from(outcome.exit_code())
}
