//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: deciding *what* to report belongs to the
//! router and handlers.

pub mod messages;
pub mod module_display;

pub use messages::{print_success, print_warning};
pub use module_display::display_module_summary;
