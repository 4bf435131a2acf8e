//!
//! The optimization record parsing error.
//!

use std::path::PathBuf;

///
/// The optimization record parsing error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the record file.
    #[error("Reading optimization record {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the record file.
        path: PathBuf,
    },
    /// Error parsing a YAML document.
    #[error("Parsing optimization record document #{index}: {error}")]
    Parsing {
        /// The underlying YAML parsing error.
        error: serde_yaml::Error,
        /// The document index.
        index: usize,
    },
    /// A document has no remark tag.
    #[error("Optimization record document #{index} has no remark tag")]
    Untagged {
        /// The document index.
        index: usize,
    },
    /// A document has an unsupported remark tag.
    #[error("Optimization record document #{index} has unsupported tag `{tag}`")]
    UnknownTag {
        /// The tag.
        tag: String,
        /// The document index.
        index: usize,
    },
}
