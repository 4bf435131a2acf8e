//!
//! The makefile fragment renderer.
//!

#[cfg(test)]
mod tests;

use std::fmt::Write;

use crate::diagnostic::sink::DiagnosticSink;
use crate::diagnostic::Diagnostic;
use crate::flag_group::kind::FlagGroupKind;
use crate::table::definition::ToolchainDefinition;
use crate::toggles::VARIABLE_PRECISE_MATH;
use crate::toggles::VARIABLE_VEC_REPORT;
use crate::toolchain::ToolchainIdentity;

///
/// The makefile fragment consumed by the TSVC build as `makefiles/Makefile.<COMPILER>`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Makefile {
    /// The fragment text.
    pub content: String,
}

impl Makefile {
    /// The make expression the report path is built from: the target plus the variant suffix.
    pub const REPORT_PATH_EXPRESSION: &'static str = "$@$(suffix)";

    ///
    /// Renders the toolchain definition.
    ///
    /// Missing groups are rendered empty. Every gap is reported to the sink.
    ///
    /// The report flag follows whichever of `vecflags` and `novecflags` the build uses.
    ///
    pub fn render<S>(
        toolchain: ToolchainIdentity,
        definition: &ToolchainDefinition,
        sink: &S,
    ) -> Self
    where
        S: DiagnosticSink + ?Sized,
    {
        let mut content = String::with_capacity(1024);
        writeln!(
            content,
            "# Generated by {} v{} for toolchain `{toolchain}`.",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
        )
        .expect("Always valid");
        writeln!(content, "CC={}", definition.c_compiler).expect("Always valid");
        writeln!(content, "CXX={}", definition.cxx_compiler).expect("Always valid");
        writeln!(
            content,
            "FC={}",
            definition.fortran_compiler.as_deref().unwrap_or_default()
        )
        .expect("Always valid");
        writeln!(content, "LD={}", definition.linker).expect("Always valid");
        content.push('\n');

        for kind in [
            FlagGroupKind::Base,
            FlagGroupKind::Vectorize,
            FlagGroupKind::NoVectorize,
        ] {
            Self::write_group(&mut content, toolchain, definition, kind, sink);
        }

        writeln!(content, "ifdef {VARIABLE_VEC_REPORT}").expect("Always valid");
        match definition.report.as_ref() {
            Some(report) => {
                let path = report.path(Self::REPORT_PATH_EXPRESSION, "");
                let flag = report.flag(path.as_str());
                for kind in [FlagGroupKind::Vectorize, FlagGroupKind::NoVectorize] {
                    writeln!(content, "    {} += {flag}", kind.make_variable())
                        .expect("Always valid");
                }
            }
            None => {
                Self::write_warning(&mut content, &Diagnostic::no_report_format(toolchain), sink)
            }
        }
        writeln!(content, "endif").expect("Always valid");

        for kind in [
            FlagGroupKind::Omp,
            FlagGroupKind::IeeeMath,
            FlagGroupKind::FastMath,
        ] {
            Self::write_group(&mut content, toolchain, definition, kind, sink);
        }

        writeln!(content, "ifdef {VARIABLE_PRECISE_MATH}").expect("Always valid");
        match definition.group(FlagGroupKind::PreciseMath) {
            Some(group) => {
                writeln!(
                    content,
                    "    {} = {}",
                    FlagGroupKind::IeeeMath.make_variable(),
                    group.flags.join(" ")
                )
                .expect("Always valid");
            }
            None => {
                Self::write_warning(&mut content, &Diagnostic::no_precise_math(toolchain), sink)
            }
        }
        writeln!(content, "endif").expect("Always valid");

        Self { content }
    }

    ///
    /// Writes the fragment to a file.
    ///
    pub fn write_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        std::fs::write(path, self.content.as_str())
            .map_err(|error| anyhow::anyhow!("Makefile {path:?} writing: {error}"))
    }

    ///
    /// Writes a group variable assignment.
    ///
    fn write_group<S>(
        content: &mut String,
        toolchain: ToolchainIdentity,
        definition: &ToolchainDefinition,
        kind: FlagGroupKind,
        sink: &S,
    ) where
        S: DiagnosticSink + ?Sized,
    {
        let flags = match definition.group(kind) {
            Some(group) => group.flags,
            None => {
                sink.emit(&Diagnostic::undefined_group(toolchain, kind));
                vec![]
            }
        };

        let variable = kind.make_variable();
        if flags.is_empty() {
            writeln!(content, "{variable} =").expect("Always valid");
        } else {
            writeln!(content, "{variable} = {}", flags.join(" ")).expect("Always valid");
        }
    }

    ///
    /// Writes a make-time warning and reports it to the sink.
    ///
    fn write_warning<S>(content: &mut String, diagnostic: &Diagnostic, sink: &S)
    where
        S: DiagnosticSink + ?Sized,
    {
        sink.emit(diagnostic);
        writeln!(content, "    $(warning {})", diagnostic.message).expect("Always valid");
    }
}

impl std::fmt::Display for Makefile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.content.as_str())
    }
}
