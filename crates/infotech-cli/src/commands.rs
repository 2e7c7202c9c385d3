//! Available sub-commands.

use std::str::FromStr;

use clap::Subcommand;
use infotech_core::domain::{DEFAULT_CATEGORY, DEFAULT_TEMPLATE};
use infotech_core::{Difficulty, Language};

/// Operations on learning modules.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new learning module from template
    #[command(after_help = "Examples:\n  \
        info_tech_cli create python-basics\n  \
        info_tech_cli create linux-admin --category devops --difficulty intermediate\n  \
        info_tech_cli create my-course --interactive")]
    Create {
        /// Name of the module to create (kebab-case)
        module_name: String,
        /// Template to use for the module
        #[arg(short, long, default_value = DEFAULT_TEMPLATE)]
        template: String,
        /// Module category
        #[arg(short, long, default_value = DEFAULT_CATEGORY)]
        category: String,
        /// Module difficulty level: beginner, intermediate or advanced
        #[arg(short, long, default_value = "beginner", value_parser = Difficulty::from_str)]
        difficulty: Difficulty,
        /// Primary language: ru or en
        #[arg(short, long, default_value = "ru", value_parser = Language::from_str)]
        language: Language,
        /// Run in interactive mode with prompts
        #[arg(short, long)]
        interactive: bool,
    },

    /// Delete a learning module
    #[command(after_help = "Examples:\n  \
        info_tech_cli delete old-module\n  \
        info_tech_cli delete test-module --force --remove-repo")]
    Delete {
        /// Name of the module to delete
        module_name: String,
        /// Force deletion without confirmation
        #[arg(short, long)]
        force: bool,
        /// Also remove GitHub repository (if exists)
        #[arg(long)]
        remove_repo: bool,
    },

    /// Validate a learning module structure
    Validate {
        /// Path to the module directory
        #[arg(default_value = ".")]
        path: String,
    },

    /// Show version information
    Version,
}

impl Commands {
    /// Sub-command name as typed on the command line.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Delete { .. } => "delete",
            Self::Validate { .. } => "validate",
            Self::Version => "version",
        }
    }
}
