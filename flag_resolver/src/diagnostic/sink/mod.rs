//!
//! The diagnostic sink.
//!

pub mod collecting;
pub mod console;

use crate::diagnostic::Diagnostic;

///
/// The receiver of resolution diagnostics.
///
pub trait DiagnosticSink {
    ///
    /// Emits a diagnostic.
    ///
    fn emit(&self, diagnostic: &Diagnostic);
}

///
/// The sink discarding every diagnostic.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _diagnostic: &Diagnostic) {}
}
