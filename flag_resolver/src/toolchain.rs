//!
//! The compiler toolchain to resolve flags for.
//!

///
/// The compiler toolchain to resolve flags for.
///
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ToolchainIdentity {
    /// The LLVM `clang` compiler family.
    Clang,
    /// The GNU `gcc` compiler family.
    Gcc,
}

impl ToolchainIdentity {
    /// All supported toolchains.
    pub const ALL: [Self; 2] = [Self::Clang, Self::Gcc];

    ///
    /// The default C compiler executable name.
    ///
    pub fn c_compiler(&self) -> &'static str {
        match self {
            Self::Clang => "clang",
            Self::Gcc => "gcc",
        }
    }

    ///
    /// The default C++ compiler executable name.
    ///
    pub fn cxx_compiler(&self) -> &'static str {
        match self {
            Self::Clang => "clang++",
            Self::Gcc => "g++",
        }
    }

    ///
    /// The default linker driver name.
    ///
    pub fn linker(&self) -> &'static str {
        self.c_compiler()
    }

    ///
    /// The default Fortran compiler. None of the supported toolchains define one.
    ///
    pub fn fortran_compiler(&self) -> Option<&'static str> {
        None
    }
}

impl std::str::FromStr for ToolchainIdentity {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "clang" => Ok(Self::Clang),
            "gcc" => Ok(Self::Gcc),
            string => anyhow::bail!(
                "Unknown toolchain `{}`. Supported toolchains: {}",
                string,
                Self::ALL
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for ToolchainIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clang => write!(f, "clang"),
            Self::Gcc => write!(f, "gcc"),
        }
    }
}
