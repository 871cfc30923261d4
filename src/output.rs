//! Styled terminal output for the `recordings` binary.

use owo_colors::OwoColorize;

/// Print a header/title
pub fn header(text: &str) {
    println!("{}", text.bold().cyan());
    println!("{}", "─".repeat(text.chars().count()).dimmed());
}

/// Print a success message
pub fn success(text: &str) {
    println!("{} {}", "✔".green().bold(), text.green());
}

/// Print one result line
pub fn result(text: &str) {
    println!("{} {}", "•".dimmed(), text);
}

/// Print an error message to stderr
pub fn error(text: &str) {
    eprintln!("{} {}", "✖".red().bold(), text.red());
}

/// Print a dimmed hint to stderr
pub fn hint(text: &str) {
    eprintln!("  {}", text.dimmed());
}
