//!
//! The flag group kind.
//!

///
/// The flag group kind.
///
/// Groups are appended in the order of the resolution algorithm, not in the order of this enum.
///
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum FlagGroupKind {
    /// Flags common to every compilation unit.
    #[serde(rename = "baseFlags")]
    Base,
    /// Flags enabling auto-vectorization.
    #[serde(rename = "vectorizeFlags")]
    Vectorize,
    /// Flags disabling auto-vectorization.
    #[serde(rename = "noVectorizeFlags")]
    NoVectorize,
    /// Flags enabling OpenMP loop pragmas.
    #[serde(rename = "ompFlags")]
    Omp,
    /// Flags for IEEE-conformant math. May be empty.
    #[serde(rename = "ieeeMathFlags")]
    IeeeMath,
    /// Flags for relaxed floating-point math.
    #[serde(rename = "fastMathFlags")]
    FastMath,
    /// Flags for precise math. Not every toolchain has them.
    #[serde(rename = "preciseMathFlags")]
    PreciseMath,
}

impl FlagGroupKind {
    /// The groups every toolchain is expected to define.
    pub const REQUIRED: [Self; 6] = [
        Self::Base,
        Self::Vectorize,
        Self::NoVectorize,
        Self::Omp,
        Self::IeeeMath,
        Self::FastMath,
    ];

    ///
    /// The variable name used in generated makefile fragments.
    ///
    pub fn make_variable(&self) -> &'static str {
        match self {
            Self::Base => "flags",
            Self::Vectorize => "vecflags",
            Self::NoVectorize => "novecflags",
            Self::Omp => "ompflags",
            Self::IeeeMath => "ieeeflags",
            Self::FastMath => "fastflags",
            Self::PreciseMath => "preciseflags",
        }
    }
}

impl std::fmt::Display for FlagGroupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base => write!(f, "baseFlags"),
            Self::Vectorize => write!(f, "vectorizeFlags"),
            Self::NoVectorize => write!(f, "noVectorizeFlags"),
            Self::Omp => write!(f, "ompFlags"),
            Self::IeeeMath => write!(f, "ieeeMathFlags"),
            Self::FastMath => write!(f, "fastMathFlags"),
            Self::PreciseMath => write!(f, "preciseMathFlags"),
        }
    }
}
