//!
//! The resolution diagnostic kind.
//!

///
/// The resolution diagnostic kind.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// The toolchain lacks a flag mapping for the requested mode.
    ConfigurationGap,
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConfigurationGap => write!(f, "configuration gap"),
        }
    }
}
