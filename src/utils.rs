//! Supporting helpers: colored stderr prefixes.
//!
//! Colorization is centralized here so printers and the binary stay
//! consistent. `NO_COLOR` disables styling.

use owo_colors::OwoColorize;

fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Prefix for fatal usage errors printed to stderr.
pub fn error_prefix() -> String {
    if colors_enabled() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

/// Prefix for friendly notes printed to stderr.
pub fn note_prefix() -> String {
    if colors_enabled() {
        "note:".cyan().bold().to_string()
    } else {
        "note:".to_string()
    }
}
