//!
//! The flag resolution configuration.
//!

#[cfg(test)]
mod tests;

use std::path::Path;

use crate::math_precision::MathPrecision;
use crate::request::report::ReportRequest;
use crate::request::ResolveRequest;
use crate::table::ToolchainTable;
use crate::toggles::Toggles;
use crate::toolchain::ToolchainIdentity;
use crate::variant::BuildVariant;

///
/// The immutable configuration, built once per process and shared by reference.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// The toolchain flag table.
    pub table: ToolchainTable,
    /// The environment toggles.
    pub toggles: Toggles,
}

impl Configuration {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(table: ToolchainTable, toggles: Toggles) -> Self {
        Self { table, toggles }
    }

    ///
    /// Builds the configuration from an optional table file and the process environment.
    ///
    pub fn from_env(table_path: Option<&Path>) -> anyhow::Result<Self> {
        let table = match table_path {
            Some(path) => ToolchainTable::load(path)?,
            None => ToolchainTable::builtin(),
        };
        Ok(Self::new(table, Toggles::from_env()))
    }

    ///
    /// Applies the precise math toggle to the requested precision.
    ///
    /// Only the IEEE mode is upgraded. Fast math is an explicit request and stays as is.
    ///
    pub fn precision(&self, requested: MathPrecision) -> MathPrecision {
        match requested {
            MathPrecision::Ieee if self.toggles.precise_math => MathPrecision::Precise,
            precision => precision,
        }
    }

    ///
    /// Resolves an optional user choice of precision.
    ///
    /// An explicit choice is kept as is. The toggle only applies to the default.
    ///
    pub fn requested_precision(&self, requested: Option<MathPrecision>) -> MathPrecision {
        match requested {
            Some(precision) => precision,
            None => self.precision(MathPrecision::default()),
        }
    }

    ///
    /// Builds the request for a TSVC build variant.
    ///
    /// The report is attached if the `VEC_REPORT` toggle is on and a target is given.
    ///
    pub fn request(
        &self,
        toolchain: ToolchainIdentity,
        variant: BuildVariant,
        report_target: Option<&str>,
    ) -> ResolveRequest {
        let request = ResolveRequest::new(
            toolchain,
            variant.vectorize,
            self.precision(variant.precision()),
        );
        match report_target {
            Some(target) if self.toggles.vec_report => {
                request.with_report(ReportRequest::new(target, variant.suffix()))
            }
            _ => request,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(ToolchainTable::builtin(), Toggles::default())
    }
}
