//! Coloured terminal output for the CLI
//!
//! `colored` honours NO_COLOR and CLICOLOR_FORCE. Data (trees, ids, TOML)
//! goes through [`info`] uncoloured so it can be piped.

use std::fmt::Display;

use colored::Colorize;

/// Fatal error, on stderr.
pub fn error(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Non-fatal notice such as a surplus curry argument, on stderr.
pub fn warning(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "warning".yellow(), msg);
}

/// A check that found nothing wrong.
pub fn success(msg: &(impl Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// One record issue under a [`header`].
pub fn failure(msg: &(impl Display + ?Sized)) {
    println!("  {} {}", "✗".red(), msg);
}

/// Labelled value, e.g. `result: 10` or `local: ./.lineage.toml`.
pub fn action(label: &str, msg: &(impl Display + ?Sized)) {
    println!("{}: {}", label.green(), msg);
}

pub fn header(msg: &(impl Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Intermediate curry step.
pub fn detail(msg: &(impl Display + ?Sized)) {
    println!("  {}", msg);
}

pub fn info(msg: &(impl Display + ?Sized)) {
    println!("{}", msg);
}
