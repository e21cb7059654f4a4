//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;
use itertools::Itertools;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print boxed title (bold)
pub fn banner(title: &str) {
    let width = 56;
    println!("╔{}╗", "═".repeat(width));
    println!("║{}║", format!("{:^width$}", title, width = width).bold());
    println!("╚{}╝", "═".repeat(width));
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", format!("═══ {} ═══", msg).cyan().bold());
}

/// Print labelled value (green label)
pub fn action(label: &str, msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}: {}", label.green(), msg);
}

/// Print indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {}", msg);
}

/// Print plain output (no color)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Print empty line
pub fn blank() {
    println!();
}

/// Render a sequence as `[a, b, c]`
pub fn sequence<T: std::fmt::Display>(values: &[T]) -> String {
    format!("[{}]", values.iter().join(", "))
}
