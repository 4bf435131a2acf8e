//!
//! The TSVC build variant.
//!

use crate::math_precision::MathPrecision;

///
/// One of the TSVC binaries, distinguished by vectorization and math mode.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BuildVariant {
    /// Whether auto-vectorization is enabled.
    pub vectorize: bool,
    /// Whether relaxed math is used instead of the default.
    pub relaxed: bool,
}

impl BuildVariant {
    /// Every variant the TSVC makefile builds.
    pub const ALL: [Self; 4] = [
        Self::new(false, false),
        Self::new(true, false),
        Self::new(false, true),
        Self::new(true, true),
    ];

    ///
    /// A shortcut constructor.
    ///
    pub const fn new(vectorize: bool, relaxed: bool) -> Self {
        Self {
            vectorize,
            relaxed,
        }
    }

    ///
    /// The variant suffix, also used for report file names.
    ///
    pub fn suffix(&self) -> &'static str {
        if self.relaxed {
            "_relaxed"
        } else {
            "_default"
        }
    }

    ///
    /// The stem of the binary and object file names.
    ///
    pub fn stem(&self) -> &'static str {
        if self.vectorize {
            "tsvc_vec"
        } else {
            "tsvc_novec"
        }
    }

    ///
    /// The math precision before environment toggles are applied.
    ///
    pub fn precision(&self) -> MathPrecision {
        if self.relaxed {
            MathPrecision::Fast
        } else {
            MathPrecision::Ieee
        }
    }
}

impl std::str::FromStr for BuildVariant {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.to_string() == string)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown build variant `{string}`. Supported variants: {}",
                    Self::ALL
                        .into_iter()
                        .map(|element| element.to_string())
                        .collect::<Vec<String>>()
                        .join(", ")
                )
            })
    }
}

impl std::fmt::Display for BuildVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem(), self.suffix())
    }
}
