//! Version command handler.

use infotech_core::{AUTHOR, PRODUCT_NAME, PROGRAM_NAME, VERSION};

/// Lines printed by the `version` command.
pub fn version_lines() -> [String; 3] {
    [
        format!("{PROGRAM_NAME} version {VERSION}"),
        PRODUCT_NAME.to_string(),
        format!("Author: {AUTHOR}"),
    ]
}

/// Execute the version command.
pub fn execute() {
    for line in version_lines() {
        println!("{line}");
    }
}
