//!
//! The scalar and vectorized runs comparison.
//!

#[cfg(test)]
mod tests;

pub mod element;

use colored::Colorize;

use crate::benchmark::output::BenchmarkOutput;
use crate::vectorization::VectorizationStatus;

use self::element::Element;

///
/// The scalar and vectorized runs comparison.
///
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Comparison {
    /// The elements in benchmark order.
    pub elements: Vec<Element>,
}

impl Comparison {
    ///
    /// Compares the paired benchmark outputs.
    ///
    pub fn new(
        pairs: &[(BenchmarkOutput, BenchmarkOutput)],
        status: &VectorizationStatus,
    ) -> Self {
        Self {
            elements: pairs
                .iter()
                .map(|(scalar, vector)| Element::new(scalar, vector, status))
                .collect(),
        }
    }

    ///
    /// The number of checksum mismatches.
    ///
    pub fn mismatches(&self) -> usize {
        self.elements
            .iter()
            .filter(|element| !element.checksum_match)
            .count()
    }

    ///
    /// The number of auto-vectorized functions.
    ///
    pub fn autovectorized(&self) -> usize {
        self.elements
            .iter()
            .filter(|element| element.autovectorized)
            .count()
    }

    ///
    /// The geometric mean of the speedups, `None` if there is no element.
    ///
    pub fn speedup_geomean(&self) -> Option<f64> {
        if self.elements.is_empty() {
            return None;
        }

        let log_sum: f64 = self
            .elements
            .iter()
            .map(|element| element.speedup().ln())
            .sum();
        Some((log_sum / self.elements.len() as f64).exp())
    }

    ///
    /// Whether every checksum matches.
    ///
    pub fn is_successful(&self) -> bool {
        self.mismatches() == 0
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "╔═══════════════════╡ {} ╞═══════════════════╗",
            "TSVC".bright_white()
        )?;
        writeln!(
            f,
            "║ {:34} {:06} ║",
            "FUNCTIONS".bright_white(),
            self.elements.len()
        )?;
        writeln!(
            f,
            "║ {:34} {:06} ║",
            "AUTOVECTORIZED".green(),
            self.autovectorized()
        )?;
        writeln!(
            f,
            "║ {:34} {:06} ║",
            "MISMATCHED".red(),
            self.mismatches()
        )?;
        writeln!(
            f,
            "║ {:34} {:>6} ║",
            "SPEEDUP GEOMEAN".cyan(),
            self.speedup_geomean()
                .map(|geomean| format!("{geomean:1.3}x"))
                .unwrap_or_else(|| "-".to_owned())
        )?;
        writeln!(f, "╚═══════════════════════════════════════════╝")?;
        Ok(())
    }
}
