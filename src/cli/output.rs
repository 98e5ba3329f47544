//! Output handling for the twinrun CLI
//!
//! Small console-styled output handler in the style of modern CLI
//! tools. Errors and verbose chatter always go to stderr; everything
//! else respects the quiet flag. Nothing here writes to stdout during
//! `run`, which keeps stdout carrying only the workers' lines.

use console::style;

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    /// Create a new output handler
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("✔").green(), message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        // Errors are always shown, even in quiet mode
        eprintln!("{} {}", style("✖").red(), message);
    }

    /// Print a verbose message (only if verbose mode is enabled)
    ///
    /// Goes to stderr: stdout stays reserved for the workers' output
    /// at every verbosity level.
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }

    /// Print a header/title
    pub fn header(&self, title: &str) {
        if !self.quiet {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    /// Print a table row
    pub fn table_row(&self, key: &str, value: &str) {
        println!("  {:<20} {}", style(key).dim(), value);
    }
}
