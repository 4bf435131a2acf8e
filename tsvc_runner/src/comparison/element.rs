//!
//! The per-function comparison element.
//!

use colored::Colorize;

use crate::benchmark::output::BenchmarkOutput;
use crate::vectorization::VectorizationStatus;

///
/// The per-function comparison of the scalar and the vectorized runs.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// The function name.
    pub function: String,
    /// Whether both runs produced the same checksum.
    pub checksum_match: bool,
    /// Whether the compiler auto-vectorized the function.
    pub autovectorized: bool,
    /// The scalar run duration.
    pub scalar_duration: f64,
    /// The vectorized run duration.
    pub vector_duration: f64,
}

impl Element {
    /// The speedup from which the result is highlighted as outstanding.
    pub const SPEEDUP_HIGHLIGHT: f64 = 4.0;

    ///
    /// Compares a pair of outputs of the same function.
    ///
    pub fn new(
        scalar: &BenchmarkOutput,
        vector: &BenchmarkOutput,
        status: &VectorizationStatus,
    ) -> Self {
        Self {
            function: scalar.function.clone(),
            checksum_match: scalar.checksum == vector.checksum,
            autovectorized: status.is_vectorized(scalar.function.as_str()),
            scalar_duration: scalar.duration,
            vector_duration: vector.duration,
        }
    }

    ///
    /// The vectorized run speedup over the scalar one.
    ///
    pub fn speedup(&self) -> f64 {
        self.scalar_duration / self.vector_duration
    }

    ///
    /// Prints the element.
    ///
    pub fn print(&self) -> String {
        let checksum = if self.checksum_match {
            "OK".normal()
        } else {
            "MISMATCH".red()
        };
        let vectorization = if self.autovectorized {
            "AUTOVEC".green()
        } else {
            "NOVEC".yellow()
        };

        let speedup = self.speedup();
        let speedup_text = format!("{speedup:1.3}x");
        let speedup_text = if speedup < 1.0 {
            speedup_text.red()
        } else if speedup >= Self::SPEEDUP_HIGHLIGHT {
            speedup_text.cyan()
        } else {
            speedup_text.normal()
        };

        format!(
            "{}:\t{checksum}\t{vectorization}\t{speedup_text}",
            self.function
        )
    }
}
