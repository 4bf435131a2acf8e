//!
//! The makefile fragment renderer tests.
//!

use std::collections::BTreeMap;

use super::Makefile;
use crate::configuration::Configuration;
use crate::diagnostic::sink::collecting::CollectingSink;
use crate::diagnostic::sink::NullSink;
use crate::flag_group::kind::FlagGroupKind;
use crate::resolver::FlagResolver;
use crate::table::definition::ToolchainDefinition;
use crate::table::ToolchainTable;
use crate::toggles::Toggles;
use crate::toggles::VARIABLE_PRECISE_MATH;
use crate::toggles::VARIABLE_VEC_REPORT;
use crate::toolchain::ToolchainIdentity;
use crate::variant::BuildVariant;

///
/// Evaluates the fragment the way make would for the given toggles, with the target
/// and suffix already substituted.
///
fn evaluate(content: &str, toggles: Toggles) -> BTreeMap<String, Vec<String>> {
    let mut variables = BTreeMap::new();
    let mut active = true;
    for line in content.lines().map(str::trim) {
        if let Some(variable) = line.strip_prefix("ifdef ") {
            active = match variable {
                VARIABLE_VEC_REPORT => toggles.vec_report,
                VARIABLE_PRECISE_MATH => toggles.precise_math,
                _ => false,
            };
            continue;
        }
        if line == "endif" {
            active = true;
            continue;
        }
        if !active || line.is_empty() || line.starts_with('#') || line.starts_with("$(") {
            continue;
        }

        let words = |value: &str| -> Vec<String> {
            value.split_whitespace().map(str::to_owned).collect()
        };
        if let Some((name, value)) = line.split_once(" += ") {
            variables
                .entry(name.to_owned())
                .or_insert_with(Vec::new)
                .extend(words(value));
        } else if let Some((name, value)) = line.split_once('=') {
            variables.insert(name.trim().to_owned(), words(value));
        }
    }
    variables
}

#[test]
fn clang() {
    let sink = CollectingSink::default();
    let makefile = Makefile::render(
        ToolchainIdentity::Clang,
        &ToolchainDefinition::builtin(ToolchainIdentity::Clang),
        &sink,
    );

    let body = makefile
        .content
        .lines()
        .skip(1)
        .collect::<Vec<&str>>()
        .join("\n");
    assert_eq!(
        body,
        r#"CC=clang
CXX=clang++
FC=
LD=clang

flags = -O3 -march=rv64gcv
vecflags = -fvectorize -fslp-vectorize
novecflags = -fno-vectorize -fno-slp-vectorize
ifdef VEC_REPORT
    vecflags += -foptimization-record-file=$@$(suffix).opt.yml
    novecflags += -foptimization-record-file=$@$(suffix).opt.yml
endif
ompflags = -fopenmp-simd
ieeeflags =
fastflags = -ffast-math
ifdef PRECISE_MATH
    $(warning no precise math flags exist for toolchain `clang`, using `ieeeMathFlags` instead)
endif"#
    );

    let diagnostics = sink.into_diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].group, Some(FlagGroupKind::PreciseMath));
}

#[test]
fn gcc_precise_block() {
    let sink = CollectingSink::default();
    let makefile = Makefile::render(
        ToolchainIdentity::Gcc,
        &ToolchainDefinition::builtin(ToolchainIdentity::Gcc),
        &sink,
    );

    assert!(makefile.content.contains(
        "ifdef PRECISE_MATH\n    ieeeflags = -fno-fast-math -ffp-contract=off -frounding-math\nendif"
    ));
    assert!(makefile
        .content
        .contains("    vecflags += -fopt-info-vec-all=$@$(suffix).vec.txt\n"));
    assert!(makefile
        .content
        .contains("    novecflags += -fopt-info-vec-all=$@$(suffix).vec.txt\n"));
    assert!(sink.diagnostics().is_empty());
}

#[test]
fn missing_group() {
    let sink = CollectingSink::default();
    let definition =
        ToolchainDefinition::builtin(ToolchainIdentity::Gcc).without_group(FlagGroupKind::Omp);
    let makefile = Makefile::render(ToolchainIdentity::Gcc, &definition, &sink);

    assert!(makefile.content.contains("\nompflags =\n"));
    let diagnostics = sink.into_diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].group, Some(FlagGroupKind::Omp));
}

#[test]
fn missing_report_format() {
    let sink = CollectingSink::default();
    let definition = ToolchainDefinition::builtin(ToolchainIdentity::Gcc);
    let definition = ToolchainDefinition {
        report: None,
        ..definition
    };
    let makefile = Makefile::render(ToolchainIdentity::Gcc, &definition, &sink);

    assert!(!makefile.content.contains("+="));
    assert!(makefile.content.contains("ifdef VEC_REPORT\n    $(warning "));
    let diagnostics = sink.into_diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].group, None);
}

#[test]
fn variants_match_resolver() {
    for toolchain in ToolchainIdentity::ALL {
        let definition = ToolchainDefinition::builtin(toolchain);
        let makefile = Makefile::render(toolchain, &definition, &NullSink);

        for toggles in [
            Toggles::new(false, false),
            Toggles::new(true, false),
            Toggles::new(false, true),
            Toggles::new(true, true),
        ] {
            let configuration = Configuration::new(ToolchainTable::builtin(), toggles);
            let resolver = FlagResolver::new(&configuration);

            for variant in BuildVariant::ALL {
                let target = format!("src/{}.o", variant.stem());
                let content = makefile
                    .content
                    .replace("$@", target.as_str())
                    .replace("$(suffix)", variant.suffix());
                let variables = evaluate(content.as_str(), toggles);
                let variable = |kind: FlagGroupKind| {
                    variables
                        .get(kind.make_variable())
                        .cloned()
                        .unwrap_or_default()
                };

                let mut expected = variable(FlagGroupKind::Base);
                expected.extend(variable(if variant.vectorize {
                    FlagGroupKind::Vectorize
                } else {
                    FlagGroupKind::NoVectorize
                }));
                expected.extend(variable(FlagGroupKind::Omp));
                expected.extend(variable(if variant.relaxed {
                    FlagGroupKind::FastMath
                } else {
                    FlagGroupKind::IeeeMath
                }));

                let request = configuration.request(toolchain, variant, Some(target.as_str()));
                let resolution = resolver.resolve(&request, &NullSink);
                assert_eq!(
                    resolution.flags, expected,
                    "{toolchain} {variant} {toggles:?}"
                );
            }
        }
    }
}
