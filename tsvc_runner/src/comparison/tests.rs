//!
//! The comparison tests.
//!

use super::Comparison;
use crate::benchmark::output::BenchmarkOutput;
use crate::vectorization::VectorizationStatus;

fn comparison() -> Comparison {
    let pairs = vec![
        (
            BenchmarkOutput::new("s000", 8.0, "1.0"),
            BenchmarkOutput::new("s000", 2.0, "1.0"),
        ),
        (
            BenchmarkOutput::new("s111", 1.0, "2.0"),
            BenchmarkOutput::new("s111", 2.0, "2.5"),
        ),
        (
            BenchmarkOutput::new("s112", 3.0, "3.0"),
            BenchmarkOutput::new("s112", 1.5, "3.0"),
        ),
    ];
    let status: VectorizationStatus = vec![("s000".to_owned(), true), ("s112".to_owned(), true)]
        .into_iter()
        .collect();
    Comparison::new(pairs.as_slice(), &status)
}

#[test]
fn elements() {
    let comparison = comparison();

    assert_eq!(comparison.elements.len(), 3);
    assert!(comparison.elements[0].checksum_match);
    assert!(!comparison.elements[1].checksum_match);
    assert!(!comparison.elements[1].autovectorized);
    assert_eq!(comparison.elements[0].speedup(), 4.0);
    assert_eq!(comparison.elements[1].speedup(), 0.5);
}

#[test]
fn totals() {
    let comparison = comparison();

    assert_eq!(comparison.mismatches(), 1);
    assert_eq!(comparison.autovectorized(), 2);
    assert!(!comparison.is_successful());

    let geomean = comparison.speedup_geomean().expect("Always exists");
    assert!((geomean - 4.0_f64.powf(1.0 / 3.0)).abs() < 1e-9);
}

#[test]
fn empty() {
    let comparison = Comparison::default();
    assert_eq!(comparison.speedup_geomean(), None);
    assert!(comparison.is_successful());
}

#[test]
fn print() {
    let comparison = comparison();

    let first = comparison.elements[0].print();
    assert!(first.starts_with("s000:\t"));
    assert!(first.contains("OK"));
    assert!(first.contains("AUTOVEC"));
    assert!(first.contains("4.000x"));

    let second = comparison.elements[1].print();
    assert!(second.contains("MISMATCH"));
    assert!(second.contains("NOVEC"));
    assert!(second.contains("0.500x"));
}
