//! Styled status lines.

use console::style;

/// Print a yellow `Warning:` line to stdout.
pub fn print_warning(message: &str) {
    println!("{}", style(format!("Warning: {message}")).yellow());
}

/// Print a green check-marked success line to stdout.
pub fn print_success(message: &str) {
    println!("{} {message}", style("✅").green());
}
