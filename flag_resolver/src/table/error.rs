//!
//! The toolchain table loading error.
//!

use std::path::PathBuf;

use crate::toolchain::ToolchainIdentity;

///
/// The toolchain table loading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the table file.
    #[error("Reading toolchain table {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the table file.
        path: PathBuf,
    },
    /// Error parsing a YAML table.
    #[error("Parsing toolchain table {path:?}: {error}")]
    ParsingYaml {
        /// The underlying YAML parsing error.
        error: serde_yaml::Error,
        /// The path to the table file.
        path: PathBuf,
    },
    /// Error parsing a JSON table.
    #[error("Parsing toolchain table {path:?}: {error}")]
    ParsingJson {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The path to the table file.
        path: PathBuf,
    },
    /// The table file extension is neither YAML nor JSON.
    #[error("Toolchain table {path:?} must have a `.yaml`, `.yml`, or `.json` extension")]
    UnsupportedExtension {
        /// The path to the table file.
        path: PathBuf,
    },
    /// The report flag template has no path placeholder.
    #[error("Toolchain `{toolchain}` report flag `{template}` does not contain `{{path}}`")]
    ReportTemplate {
        /// The toolchain with the malformed template.
        toolchain: ToolchainIdentity,
        /// The malformed template.
        template: String,
    },
}
