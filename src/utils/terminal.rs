//! Terminal output utilities
//!
//! Child stdio is inherited, so these stay to one-line messages; anything
//! fancier would interleave with toolchain output.

use console::style;

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("{}: {}", style("error").red().bold(), message);
}

/// Print an action status line before launching its child
pub fn print_status(message: &str) {
    println!("{}", style(message).bold());
}
