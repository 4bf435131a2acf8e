//!
//! The flag resolution request.
//!

pub mod report;

use crate::math_precision::MathPrecision;
use crate::toolchain::ToolchainIdentity;

use self::report::ReportRequest;

///
/// The inputs of a single flag resolution.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveRequest {
    /// The toolchain.
    pub toolchain: ToolchainIdentity,
    /// Whether auto-vectorization is enabled.
    pub vectorize: bool,
    /// The math precision mode.
    pub precision: MathPrecision,
    /// The vectorization report, if requested.
    pub report: Option<ReportRequest>,
}

impl ResolveRequest {
    ///
    /// A shortcut constructor without a report.
    ///
    pub fn new(toolchain: ToolchainIdentity, vectorize: bool, precision: MathPrecision) -> Self {
        Self {
            toolchain,
            vectorize,
            precision,
            report: None,
        }
    }

    ///
    /// Requests a vectorization report.
    ///
    pub fn with_report(mut self, report: ReportRequest) -> Self {
        self.report = Some(report);
        self
    }
}
