//! Validate command handler.
//!
//! Structural validation of module directories is not implemented yet.
//! The command reports the path it was given and never inspects it.

/// Lines printed for `validate <path>`.
pub fn report_lines(path: &str) -> [String; 2] {
    [
        format!("🔍 Validating module at: {path}"),
        "⚠️  Validation feature coming soon...".to_string(),
    ]
}

/// Execute the validate command. Always succeeds.
pub fn execute(path: &str) {
    for line in report_lines(path) {
        println!("{line}");
    }
}
