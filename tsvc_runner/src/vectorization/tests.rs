//!
//! The vectorization status tests.
//!

use super::VectorizationStatus;
use crate::opt_record::OptimizationRecord;

const RECORD: &str = r#"--- !Passed
Pass:            loop-vectorize
Name:            Vectorized
Function:        s000
...
--- !Missed
Pass:            loop-vectorize
Name:            MissedDetails
Function:        s000
...
--- !Missed
Pass:            loop-vectorize
Name:            MissedDetails
Function:        s111
...
--- !Passed
Pass:            slp-vectorize
Name:            VectorizedList
Function:        s112
...
--- !Passed
Pass:            slp-vectorize
Name:            Vectorized
Function:        s113
...
--- !Passed
Pass:            licm
Name:            Vectorized
Function:        s114
...
--- !Analysis
Pass:            loop-vectorize
Name:            Vectorized
...
"#;

#[test]
fn from_record() {
    let record = OptimizationRecord::parse(RECORD).expect("Parsing failed");
    let status = VectorizationStatus::from(&record);

    assert!(status.is_vectorized("s000"));
    assert!(!status.is_vectorized("s111"));
    assert!(!status.is_vectorized("s112"));
    assert!(status.is_vectorized("s113"));
    assert!(!status.is_vectorized("s114"));
    assert!(!status.is_vectorized("unknown"));
    assert_eq!(status.vectorized_count(), 2);
}

#[test]
fn mark_keeps_vectorized() {
    let status: VectorizationStatus = vec![
        ("s000".to_owned(), true),
        ("s000".to_owned(), false),
        ("s111".to_owned(), false),
    ]
    .into_iter()
    .collect();

    assert!(status.is_vectorized("s000"));
    assert!(!status.is_vectorized("s111"));
}
