//!
//! The diagnostic sink printing to the terminal.
//!

use colored::Colorize;

use crate::diagnostic::sink::DiagnosticSink;
use crate::diagnostic::Diagnostic;

///
/// The diagnostic sink printing warnings to `stderr`.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink {
    /// Whether the output is suppressed.
    quiet: bool,
}

impl ConsoleSink {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl DiagnosticSink for ConsoleSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        if self.quiet {
            return;
        }

        eprintln!(
            "{} {}",
            "warning:".bright_yellow().bold(),
            diagnostic.message
        );
    }
}
