//! Terminal diagnostics. Result output goes to plain stdout so pipelines
//! can consume it; only errors and notices are styled.

use console::style;

/// Print an error message to stderr
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("error:").red().bold(), message);
}
