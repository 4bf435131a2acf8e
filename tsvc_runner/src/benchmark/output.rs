//!
//! The single benchmark output line.
//!

use crate::benchmark::error::Error;

///
/// The single benchmark output line: `<function> <duration> <checksum>`.
///
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkOutput {
    /// The benchmarked function name.
    pub function: String,
    /// The run duration in seconds.
    pub duration: f64,
    /// The result checksum, compared textually.
    pub checksum: String,
}

impl BenchmarkOutput {
    /// The prefix of the table header line.
    pub const HEADER_PREFIX: &'static str = "Loop";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(function: &str, duration: f64, checksum: &str) -> Self {
        Self {
            function: function.to_owned(),
            duration,
            checksum: checksum.to_owned(),
        }
    }

    ///
    /// Parses the whole benchmark standard output, skipping the header and blank lines.
    ///
    pub fn parse_all(stdout: &str) -> Result<Vec<Self>, Error> {
        stdout
            .lines()
            .filter(|line| !line.starts_with(Self::HEADER_PREFIX))
            .filter(|line| !line.trim().is_empty())
            .map(str::parse)
            .collect()
    }
}

impl std::str::FromStr for BenchmarkOutput {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let mut fields = line.split_whitespace();

        let (function, duration, checksum) = match (fields.next(), fields.next(), fields.next()) {
            (Some(function), Some(duration), Some(checksum)) => (function, duration, checksum),
            _ => {
                return Err(Error::MissingField {
                    line: line.to_owned(),
                })
            }
        };
        let duration = duration
            .parse::<f64>()
            .map_err(|error| Error::InvalidDuration {
                line: line.to_owned(),
                error,
            })?;

        Ok(Self::new(function, duration, checksum))
    }
}
