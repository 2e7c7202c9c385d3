//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the InfoTech.io educational platform.
///
/// Create, manage and deploy learning modules with integrated Quiz Engine support.
#[derive(Parser, Debug)]
#[command(name = "info_tech_cli")]
#[command(version = infotech_core::VERSION)]
#[command(about = "InfoTech CLI - Command-line interface for InfoTech.io educational platform")]
#[command(after_help = "Examples:\n  info_tech_cli create my-python-course\n  info_tech_cli delete old-course")]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
