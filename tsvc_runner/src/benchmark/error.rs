//!
//! The benchmark output parsing error.
//!

///
/// The benchmark output parsing error.
///
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// The line has fewer than three fields.
    #[error("Benchmark output line `{line}` must be `<function> <duration> <checksum>`")]
    MissingField {
        /// The malformed line.
        line: String,
    },
    /// The duration is not a number.
    #[error("Benchmark output line `{line}` has invalid duration: {error}")]
    InvalidDuration {
        /// The malformed line.
        line: String,
        /// The underlying number parsing error.
        error: std::num::ParseFloatError,
    },
}
