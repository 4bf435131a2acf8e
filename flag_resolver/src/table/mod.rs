//!
//! The toolchain flag table.
//!


pub mod definition;
pub mod error;
pub mod report_format;

use std::collections::BTreeMap;
use std::path::Path;

use crate::diagnostic::Diagnostic;
use crate::toolchain::ToolchainIdentity;

use self::definition::ToolchainDefinition;
use self::error::Error;

///
/// The mapping from toolchain to its flag definition.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ToolchainTable {
    /// The definitions.
    definitions: BTreeMap<ToolchainIdentity, ToolchainDefinition>,
}

impl ToolchainTable {
    ///
    /// The built-in table covering every supported toolchain.
    ///
    pub fn builtin() -> Self {
        Self {
            definitions: ToolchainIdentity::ALL
                .into_iter()
                .map(|toolchain| (toolchain, ToolchainDefinition::builtin(toolchain)))
                .collect(),
        }
    }

    ///
    /// Loads a table from a YAML or JSON file, selected by the file extension.
    ///
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path).map_err(|error| Error::Reading {
            error,
            path: path.to_owned(),
        })?;

        let table = match path.extension().and_then(|extension| extension.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml(text.as_str()).map_err(|error| {
                Error::ParsingYaml {
                    error,
                    path: path.to_owned(),
                }
            })?,
            Some("json") => {
                serde_json::from_str(text.as_str()).map_err(|error| Error::ParsingJson {
                    error,
                    path: path.to_owned(),
                })?
            }
            _ => {
                return Err(Error::UnsupportedExtension {
                    path: path.to_owned(),
                })
            }
        };
        table.validate()
    }

    ///
    /// Parses a table from YAML text without validating it.
    ///
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    ///
    /// Checks the constraints the type system does not express.
    ///
    pub fn validate(self) -> Result<Self, Error> {
        for (toolchain, definition) in self.definitions.iter() {
            if let Some(report) = definition.report.as_ref() {
                if !report.is_valid() {
                    return Err(Error::ReportTemplate {
                        toolchain: *toolchain,
                        template: report.flag.clone(),
                    });
                }
            }
        }
        Ok(self)
    }

    ///
    /// Adds or replaces a definition.
    ///
    pub fn with_definition(
        mut self,
        toolchain: ToolchainIdentity,
        definition: ToolchainDefinition,
    ) -> Self {
        self.definitions.insert(toolchain, definition);
        self
    }

    ///
    /// Returns the toolchain definition.
    ///
    pub fn get(&self, toolchain: ToolchainIdentity) -> Option<&ToolchainDefinition> {
        self.definitions.get(&toolchain)
    }

    ///
    /// Lists the gaps of the table: undefined toolchains and missing required groups.
    ///
    pub fn gaps(&self) -> Vec<Diagnostic> {
        let mut gaps = Vec::new();
        for toolchain in ToolchainIdentity::ALL {
            match self.definitions.get(&toolchain) {
                Some(definition) => gaps.extend(
                    definition
                        .missing_groups()
                        .into_iter()
                        .map(|kind| Diagnostic::undefined_group(toolchain, kind)),
                ),
                None => gaps.push(Diagnostic::undefined_toolchain(toolchain)),
            }
        }
        gaps
    }

    ///
    /// Serializes the table to YAML.
    ///
    pub fn to_yaml(&self) -> anyhow::Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
