//!
//! The resolution diagnostic.
//!

pub mod kind;
pub mod sink;

use crate::flag_group::kind::FlagGroupKind;
use crate::toolchain::ToolchainIdentity;

use self::kind::DiagnosticKind;

///
/// A non-fatal anomaly found during flag resolution.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Diagnostic {
    /// The diagnostic kind.
    pub kind: DiagnosticKind,
    /// The toolchain the diagnostic concerns.
    pub toolchain: ToolchainIdentity,
    /// The flag group the diagnostic concerns, if any.
    pub group: Option<FlagGroupKind>,
    /// The human-readable message.
    pub message: String,
}

impl Diagnostic {
    ///
    /// The toolchain is absent from the table.
    ///
    pub fn undefined_toolchain(toolchain: ToolchainIdentity) -> Self {
        Self {
            kind: DiagnosticKind::ConfigurationGap,
            toolchain,
            group: None,
            message: format!("no flag groups are defined for toolchain `{toolchain}`"),
        }
    }

    ///
    /// The toolchain does not define a required group.
    ///
    pub fn undefined_group(toolchain: ToolchainIdentity, group: FlagGroupKind) -> Self {
        Self {
            kind: DiagnosticKind::ConfigurationGap,
            toolchain,
            group: Some(group),
            message: format!(
                "toolchain `{toolchain}` does not define `{group}`, using an empty group"
            ),
        }
    }

    ///
    /// The toolchain has no precise math flags.
    ///
    pub fn no_precise_math(toolchain: ToolchainIdentity) -> Self {
        Self {
            kind: DiagnosticKind::ConfigurationGap,
            toolchain,
            group: Some(FlagGroupKind::PreciseMath),
            message: format!(
                "no precise math flags exist for toolchain `{toolchain}`, using `{}` instead",
                FlagGroupKind::IeeeMath
            ),
        }
    }

    ///
    /// The toolchain has no vectorization report format.
    ///
    pub fn no_report_format(toolchain: ToolchainIdentity) -> Self {
        Self {
            kind: DiagnosticKind::ConfigurationGap,
            toolchain,
            group: None,
            message: format!(
                "toolchain `{toolchain}` has no vectorization report flag, the report is skipped"
            ),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}
