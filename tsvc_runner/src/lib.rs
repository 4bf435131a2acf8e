//!
//! The TSVC vectorization benchmark runner library.
//!

pub mod benchmark;
pub mod builder;
pub mod comparison;
pub mod opt_record;
pub mod report;
pub mod vectorization;

pub use crate::benchmark::output::BenchmarkOutput;
pub use crate::builder::MakefileSource;
pub use crate::builder::TsvcBuilder;
pub use crate::comparison::element::Element as ComparisonElement;
pub use crate::comparison::Comparison;
pub use crate::opt_record::OptimizationRecord;
pub use crate::report::csv::Csv as CsvReport;
pub use crate::vectorization::objdump::Objdump;
pub use crate::vectorization::VectorizationStatus;
