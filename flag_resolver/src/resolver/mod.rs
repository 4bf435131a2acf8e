//!
//! The flag resolver.
//!


pub mod resolution;

use crate::configuration::Configuration;
use crate::diagnostic::sink::DiagnosticSink;
use crate::diagnostic::Diagnostic;
use crate::flag_group::kind::FlagGroupKind;
use crate::flag_group::FlagGroup;
use crate::math_precision::MathPrecision;
use crate::request::ResolveRequest;
use crate::table::definition::ToolchainDefinition;
use crate::toolchain::ToolchainIdentity;

use self::resolution::Resolution;

///
/// The flag resolver.
///
/// Resolution reads only the immutable configuration, so a single resolver can serve
/// any number of threads.
///
#[derive(Debug, Clone, Copy)]
pub struct FlagResolver<'a> {
    /// The configuration.
    configuration: &'a Configuration,
}

impl<'a> FlagResolver<'a> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(configuration: &'a Configuration) -> Self {
        Self { configuration }
    }

    ///
    /// Resolves the ordered flag list for the request.
    ///
    /// Never fails. Every gap in the toolchain definition is reported to the sink and
    /// recorded in the result.
    ///
    pub fn resolve<S>(&self, request: &ResolveRequest, sink: &S) -> Resolution
    where
        S: DiagnosticSink + ?Sized,
    {
        let mut builder = Builder::new(request.toolchain);

        match self.configuration.table.get(request.toolchain) {
            Some(definition) => builder.build(definition, request),
            None => builder.diagnose(Diagnostic::undefined_toolchain(request.toolchain)),
        }

        let resolution = builder.finish();
        for diagnostic in resolution.diagnostics.iter() {
            sink.emit(diagnostic);
        }
        resolution
    }
}

///
/// The single-use accumulator of one resolution.
///
struct Builder {
    /// The toolchain.
    toolchain: ToolchainIdentity,
    /// The resolution being built.
    resolution: Resolution,
}

impl Builder {
    ///
    /// A shortcut constructor.
    ///
    fn new(toolchain: ToolchainIdentity) -> Self {
        Self {
            toolchain,
            resolution: Resolution::default(),
        }
    }

    ///
    /// Runs the resolution steps in order.
    ///
    fn build(&mut self, definition: &ToolchainDefinition, request: &ResolveRequest) {
        self.append(definition, FlagGroupKind::Base);

        if request.vectorize {
            self.append(definition, FlagGroupKind::Vectorize);
        } else {
            self.append(definition, FlagGroupKind::NoVectorize);
        }

        if let Some(report) = request.report.as_ref() {
            match definition.report.as_ref() {
                Some(format) => {
                    let path = format.path(report.output_path.as_str(), report.suffix.as_str());
                    self.resolution.flags.push(format.flag(path.as_str()));
                }
                None => self.diagnose(Diagnostic::no_report_format(self.toolchain)),
            }
        }

        self.append(definition, FlagGroupKind::Omp);

        match request.precision {
            MathPrecision::Precise => match definition.group(FlagGroupKind::PreciseMath) {
                Some(group) => self.resolution.flags.extend(group.flags),
                None => {
                    self.diagnose(Diagnostic::no_precise_math(self.toolchain));
                    self.append(definition, FlagGroupKind::IeeeMath);
                }
            },
            precision => self.append(definition, precision.flag_group()),
        }
    }

    ///
    /// Appends a group, falling back to an empty one if the toolchain lacks it.
    ///
    fn append(&mut self, definition: &ToolchainDefinition, kind: FlagGroupKind) {
        let group = definition.group(kind).unwrap_or_else(|| {
            self.diagnose(Diagnostic::undefined_group(self.toolchain, kind));
            FlagGroup::empty(kind)
        });
        self.resolution.flags.extend(group.flags);
    }

    ///
    /// Records a diagnostic.
    ///
    fn diagnose(&mut self, diagnostic: Diagnostic) {
        self.resolution.diagnostics.push(diagnostic);
    }

    ///
    /// Returns the result.
    ///
    fn finish(self) -> Resolution {
        self.resolution
    }
}
