//! Module summary display.

use std::path::Path;

use infotech_core::ModuleDescriptor;

/// Print a short summary of a module, as shown before creation finishes or
/// before a delete confirmation.
pub fn display_module_summary(module: &ModuleDescriptor, dir: &Path) {
    for line in summary_lines(module, dir) {
        println!("{line}");
    }
}

fn summary_lines(module: &ModuleDescriptor, dir: &Path) -> Vec<String> {
    vec![
        format!("  Module:     {}", module.name),
        format!("  Path:       {}", dir.display()),
        format!("  Template:   {}", module.template),
        format!("  Category:   {}", module.category),
        format!("  Difficulty: {}", module.difficulty),
        format!("  Language:   {}", module.language),
    ]
}
