//!
//! The configuration tests.
//!

use super::Configuration;
use crate::math_precision::MathPrecision;
use crate::request::report::ReportRequest;
use crate::table::ToolchainTable;
use crate::toggles::Toggles;
use crate::toolchain::ToolchainIdentity;
use crate::variant::BuildVariant;

fn configuration(vec_report: bool, precise_math: bool) -> Configuration {
    Configuration::new(
        ToolchainTable::builtin(),
        Toggles::new(vec_report, precise_math),
    )
}

#[test]
fn request_default_variant() {
    let request = configuration(false, false).request(
        ToolchainIdentity::Clang,
        BuildVariant::new(true, false),
        Some("tsvc_vec.o"),
    );
    assert!(request.vectorize);
    assert_eq!(request.precision, MathPrecision::Ieee);
    assert_eq!(request.report, None);
}

#[test]
fn request_precise_toggle_upgrades_default() {
    let request = configuration(false, true).request(
        ToolchainIdentity::Clang,
        BuildVariant::new(false, false),
        None,
    );
    assert_eq!(request.precision, MathPrecision::Precise);
}

#[test]
fn request_precise_toggle_keeps_relaxed() {
    let request = configuration(false, true).request(
        ToolchainIdentity::Gcc,
        BuildVariant::new(false, true),
        None,
    );
    assert_eq!(request.precision, MathPrecision::Fast);
}

#[test]
fn requested_precision_explicit_ieee_is_kept() {
    let configuration = configuration(false, true);
    assert_eq!(
        configuration.requested_precision(Some(MathPrecision::Ieee)),
        MathPrecision::Ieee
    );
    assert_eq!(
        configuration.requested_precision(Some(MathPrecision::Fast)),
        MathPrecision::Fast
    );
    assert_eq!(
        configuration.requested_precision(None),
        MathPrecision::Precise
    );
}

#[test]
fn requested_precision_without_toggle() {
    assert_eq!(
        configuration(false, false).requested_precision(None),
        MathPrecision::Ieee
    );
}

#[test]
fn request_report_toggle() {
    let request = configuration(true, false).request(
        ToolchainIdentity::Clang,
        BuildVariant::new(true, false),
        Some("tsvc_vec.o"),
    );
    assert_eq!(
        request.report,
        Some(ReportRequest::new("tsvc_vec.o", "_default"))
    );
}

#[test]
fn request_report_toggle_without_target() {
    let request = configuration(true, false).request(
        ToolchainIdentity::Clang,
        BuildVariant::new(true, true),
        None,
    );
    assert_eq!(request.report, None);
}

#[test]
fn variant_names() {
    let names: Vec<String> = BuildVariant::ALL
        .into_iter()
        .map(|variant| variant.to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "tsvc_novec_default",
            "tsvc_vec_default",
            "tsvc_novec_relaxed",
            "tsvc_vec_relaxed",
        ]
    );
    assert_eq!(
        "tsvc_vec_relaxed".parse::<BuildVariant>().expect("Always valid"),
        BuildVariant::new(true, true)
    );
    assert!("tsvc_vec".parse::<BuildVariant>().is_err());
}
