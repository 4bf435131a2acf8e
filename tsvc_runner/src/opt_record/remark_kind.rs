//!
//! The optimization remark kind.
//!

///
/// The optimization remark kind, taken from the YAML document tag.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemarkKind {
    /// The `!Passed` remark.
    Passed,
    /// The `!Missed` remark.
    Missed,
    /// The `!Analysis` remark.
    Analysis,
    /// The `!AnalysisFPCommute` remark.
    AnalysisFPCommute,
}

impl std::str::FromStr for RemarkKind {
    type Err = String;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.trim_start_matches('!') {
            "Passed" => Ok(Self::Passed),
            "Missed" => Ok(Self::Missed),
            "Analysis" => Ok(Self::Analysis),
            "AnalysisFPCommute" => Ok(Self::AnalysisFPCommute),
            _ => Err(string.to_owned()),
        }
    }
}

impl std::fmt::Display for RemarkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Passed => write!(f, "!Passed"),
            Self::Missed => write!(f, "!Missed"),
            Self::Analysis => write!(f, "!Analysis"),
            Self::AnalysisFPCommute => write!(f, "!AnalysisFPCommute"),
        }
    }
}
