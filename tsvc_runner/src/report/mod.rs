//!
//! The comparison report.
//!

pub mod csv;
