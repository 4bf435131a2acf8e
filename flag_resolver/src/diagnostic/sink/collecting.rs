//!
//! The diagnostic sink keeping every diagnostic.
//!

use std::sync::Mutex;

use crate::diagnostic::sink::DiagnosticSink;
use crate::diagnostic::Diagnostic;

///
/// The diagnostic sink keeping every diagnostic for later inspection.
///
#[derive(Debug, Default)]
pub struct CollectingSink {
    /// The collected diagnostics.
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    ///
    /// Returns the collected diagnostics.
    ///
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().expect("Sync").clone()
    }

    ///
    /// Extracts the collected diagnostics.
    ///
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_inner().expect("Sync")
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        self.diagnostics
            .lock()
            .expect("Sync")
            .push(diagnostic.to_owned());
    }
}
