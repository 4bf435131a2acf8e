//!
//! The optimization record tests.
//!

use super::error::Error;
use super::remark_kind::RemarkKind;
use super::OptimizationRecord;

const RECORD: &str = r#"--- !Missed
Pass:            loop-vectorize
Name:            MissedDetails
DebugLoc:        { File: tsvc.c, Line: 181, Column: 9 }
Function:        s000
Args:
  - String:          loop not vectorized
...
--- !Passed
Pass:            loop-vectorize
Name:            Vectorized
DebugLoc:        { File: tsvc.c, Line: 181, Column: 9 }
Function:        s000
Args:
  - String:          'vectorized loop (vectorization width: '
  - VectorizationFactor: vscale x 2
  - String:          ', interleaved count: '
  - InterleaveCount: '2'
  - String:          ')'
...
--- !Analysis
Pass:            prologepilog
Name:            StackSize
Function:        s111
Args:
  - NumStackBytes:   '0'
...
--- !AnalysisFPCommute
Pass:            loop-vectorize
Name:            CantReorderFPOps
Function:        s311
...
"#;

#[test]
fn parse() {
    let record = OptimizationRecord::parse(RECORD).expect("Parsing failed");
    let kinds: Vec<RemarkKind> = record.remarks.iter().map(|remark| remark.kind).collect();
    assert_eq!(
        kinds,
        vec![
            RemarkKind::Missed,
            RemarkKind::Passed,
            RemarkKind::Analysis,
            RemarkKind::AnalysisFPCommute,
        ]
    );

    let vectorized = &record.remarks[1];
    assert!(vectorized.is_vectorizer());
    assert!(vectorized.is_vectorized());
    assert_eq!(vectorized.fields.function.as_deref(), Some("s000"));

    assert!(!record.remarks[2].is_vectorizer());
}

#[test]
fn parse_empty() {
    let record = OptimizationRecord::parse("").expect("Parsing failed");
    assert!(record.remarks.is_empty());
}

#[test]
fn error_unknown_tag() {
    let result = OptimizationRecord::parse("--- !Failure\nPass: isel\nFunction: s000\n");
    assert!(matches!(result, Err(Error::UnknownTag { ref tag, index: 0 }) if tag == "!Failure"));
}

#[test]
fn error_untagged() {
    let result = OptimizationRecord::parse("---\nPass: isel\n");
    assert!(matches!(result, Err(Error::Untagged { index: 0 })));
}
