//!
//! The floating-point math precision mode.
//!

use crate::flag_group::kind::FlagGroupKind;

///
/// The floating-point math precision mode.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MathPrecision {
    #[default]
    /// IEEE-conformant math.
    Ieee,
    /// Relaxed math allowing reassociation and other unsafe transformations.
    Fast,
    /// Strict math, stricter than the compiler default where the toolchain allows it.
    Precise,
}

impl MathPrecision {
    ///
    /// The flag group implementing the mode.
    ///
    pub fn flag_group(&self) -> FlagGroupKind {
        match self {
            Self::Ieee => FlagGroupKind::IeeeMath,
            Self::Fast => FlagGroupKind::FastMath,
            Self::Precise => FlagGroupKind::PreciseMath,
        }
    }
}

impl std::str::FromStr for MathPrecision {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "ieee" => Ok(Self::Ieee),
            "fast" => Ok(Self::Fast),
            "precise" => Ok(Self::Precise),
            string => anyhow::bail!(
                "Unknown math precision `{string}`. Supported values: {}",
                vec![Self::Ieee, Self::Fast, Self::Precise]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for MathPrecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ieee => write!(f, "ieee"),
            Self::Fast => write!(f, "fast"),
            Self::Precise => write!(f, "precise"),
        }
    }
}
