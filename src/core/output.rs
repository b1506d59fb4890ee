//! Unified output formatting utilities for consistent CLI presentation.
//!
//! Messages for the user go to stderr so that stdout carries only the selected
//! location (or the listing in `--list` mode) and stays safe to capture from a
//! shell or an editor.

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    eprintln!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints an informational message
pub fn print_info(message: &str) {
    eprintln!("\n{}\n", message.white());
}

/// Prints a selected location as `<path>:<line>` on stdout
pub fn print_location(path: &str, line_number: &str) {
    println!("{path}:{line_number}");
}

/// Prints one listing row on stdout
pub fn print_row(text: &str) {
    println!("{text}");
}
