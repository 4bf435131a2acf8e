//!
//! The output format of resolved flags.
//!

use crate::resolver::resolution::Resolution;

///
/// The output format of resolved flags.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    /// A single space-separated line, ready for `$(shell ...)` in make.
    Shell,
    /// One flag per line.
    Lines,
    /// The whole resolution, diagnostics included, as JSON.
    Json,
}

impl OutputFormat {
    ///
    /// Formats the resolution.
    ///
    pub fn format(&self, resolution: &Resolution) -> anyhow::Result<String> {
        Ok(match self {
            Self::Shell => resolution.command_line(),
            Self::Lines => resolution.flags.join("\n"),
            Self::Json => serde_json::to_string_pretty(resolution)?,
        })
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "shell" => Ok(Self::Shell),
            "lines" => Ok(Self::Lines),
            "json" => Ok(Self::Json),
            string => anyhow::bail!(
                "Unknown output format `{string}`. Supported formats: {}",
                vec![Self::Shell, Self::Lines, Self::Json]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shell => write!(f, "shell"),
            Self::Lines => write!(f, "lines"),
            Self::Json => write!(f, "json"),
        }
    }
}
