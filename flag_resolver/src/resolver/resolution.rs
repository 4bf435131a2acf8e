//!
//! The flag resolution result.
//!

use crate::diagnostic::Diagnostic;

///
/// The resolved flags and the diagnostics emitted on the way.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Resolution {
    /// The flags in command-line order.
    pub flags: Vec<String>,
    /// The diagnostics.
    pub diagnostics: Vec<Diagnostic>,
}

impl Resolution {
    ///
    /// Whether the resolution produced no diagnostics.
    ///
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    ///
    /// Joins the flags into a single command-line fragment.
    ///
    pub fn command_line(&self) -> String {
        self.flags.join(" ")
    }
}
