//! Styled status lines for the terminal

use console::style;
use std::fmt::Display;

/// User-facing output on stdout.
///
/// In quiet mode everything except [`Printer::failure`] is dropped.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    quiet: bool,
}

impl Printer {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    fn line(&self, text: impl Display) {
        if !self.quiet {
            println!("{}", text);
        }
    }

    pub fn blank(&self) {
        self.line("");
    }

    /// Underlined section title preceded by a blank line
    pub fn title(&self, text: &str) {
        self.line(format_args!("\n{}", style(text).bold().underlined()));
    }

    /// Indented `key: value` line
    pub fn field(&self, key: &str, value: impl Display) {
        self.line(format_args!("  {}: {}", style(key).dim(), value));
    }

    pub fn done(&self, text: &str) {
        self.line(format_args!("{} {}", style("✓").green().bold(), text));
    }

    pub fn note(&self, text: &str) {
        self.line(format_args!("{} {}", style("ℹ").blue().bold(), text));
    }

    /// `[i/n] title` followed by one dimmed line per detail
    pub fn stage(&self, index: usize, total: usize, title: &str, details: &[String]) {
        self.line(format_args!(
            "{} {}",
            style(format!("[{}/{}]", index, total)).cyan().bold(),
            title
        ));
        for detail in details {
            self.line(format_args!("      {}", style(detail).dim()));
        }
    }

    /// Error line on stderr, printed even when quiet
    pub fn failure(text: impl Display) {
        eprintln!("{} {}", style("✗").red().bold(), text);
    }
}
