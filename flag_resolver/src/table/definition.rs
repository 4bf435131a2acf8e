//!
//! The toolchain flag definition.
//!

use std::collections::BTreeMap;

use crate::flag_group::kind::FlagGroupKind;
use crate::flag_group::FlagGroup;
use crate::table::report_format::ReportFormat;
use crate::toolchain::ToolchainIdentity;

///
/// The static flag definition of a single toolchain.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ToolchainDefinition {
    /// The C compiler executable.
    pub c_compiler: String,
    /// The C++ compiler executable.
    pub cxx_compiler: String,
    /// The Fortran compiler executable, if the toolchain has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fortran_compiler: Option<String>,
    /// The linker driver.
    pub linker: String,
    /// The vectorization report format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportFormat>,
    /// The flag groups.
    #[serde(default)]
    pub groups: BTreeMap<FlagGroupKind, Vec<String>>,
}

impl ToolchainDefinition {
    ///
    /// Creates a definition with the toolchain default executables and no groups.
    ///
    pub fn new(toolchain: ToolchainIdentity) -> Self {
        Self {
            c_compiler: toolchain.c_compiler().to_owned(),
            cxx_compiler: toolchain.cxx_compiler().to_owned(),
            fortran_compiler: toolchain.fortran_compiler().map(str::to_owned),
            linker: toolchain.linker().to_owned(),
            report: None,
            groups: BTreeMap::new(),
        }
    }

    ///
    /// The built-in definition of the toolchain.
    ///
    pub fn builtin(toolchain: ToolchainIdentity) -> Self {
        let definition = Self::new(toolchain)
            .with_group(FlagGroupKind::Base, &["-O3", "-march=rv64gcv"])
            .with_group(FlagGroupKind::Omp, &["-fopenmp-simd"])
            .with_group(FlagGroupKind::IeeeMath, &[])
            .with_group(FlagGroupKind::FastMath, &["-ffast-math"]);

        match toolchain {
            ToolchainIdentity::Clang => definition
                .with_group(FlagGroupKind::Vectorize, &["-fvectorize", "-fslp-vectorize"])
                .with_group(
                    FlagGroupKind::NoVectorize,
                    &["-fno-vectorize", "-fno-slp-vectorize"],
                )
                .with_report(ReportFormat::new(
                    "-foptimization-record-file={path}",
                    ".opt.yml",
                )),
            ToolchainIdentity::Gcc => definition
                .with_group(FlagGroupKind::Vectorize, &["-ftree-vectorize"])
                .with_group(FlagGroupKind::NoVectorize, &["-fno-tree-vectorize"])
                .with_group(
                    FlagGroupKind::PreciseMath,
                    &["-fno-fast-math", "-ffp-contract=off", "-frounding-math"],
                )
                .with_report(ReportFormat::new("-fopt-info-vec-all={path}", ".vec.txt")),
        }
    }

    ///
    /// Sets the flags of a group, replacing any previous definition.
    ///
    pub fn with_group(mut self, kind: FlagGroupKind, flags: &[&str]) -> Self {
        self.groups
            .insert(kind, flags.iter().map(|flag| flag.to_string()).collect());
        self
    }

    ///
    /// Removes a group.
    ///
    pub fn without_group(mut self, kind: FlagGroupKind) -> Self {
        self.groups.remove(&kind);
        self
    }

    ///
    /// Sets the report format.
    ///
    pub fn with_report(mut self, report: ReportFormat) -> Self {
        self.report = Some(report);
        self
    }

    ///
    /// Returns the group if the toolchain defines it.
    ///
    pub fn group(&self, kind: FlagGroupKind) -> Option<FlagGroup> {
        self.groups
            .get(&kind)
            .map(|flags| FlagGroup::new(kind, flags.clone()))
    }

    ///
    /// The required groups the definition lacks.
    ///
    pub fn missing_groups(&self) -> Vec<FlagGroupKind> {
        FlagGroupKind::REQUIRED
            .into_iter()
            .filter(|kind| !self.groups.contains_key(kind))
            .collect()
    }
}
