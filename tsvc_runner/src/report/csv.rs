//!
//! Serializing the comparison to CSV.
//!

use std::fmt::Write;
use std::path::Path;

use crate::comparison::element::Element;
use crate::comparison::Comparison;

///
/// Serialize the comparison to CSV in the following format:
/// "function", "checksum_match", "autovectorized", "scalar_duration", "vector_duration"
///
#[derive(Debug, Default)]
pub struct Csv {
    /// The CSV string.
    pub content: String,
}

impl Csv {
    /// The header line.
    pub const HEADER: &'static str =
        r#""function", "checksum_match", "autovectorized", "scalar_duration", "vector_duration""#;

    /// The estimated line length, for preallocation.
    const ESTIMATED_LINE_LENGTH: usize = 64;

    ///
    /// Writes the CSV to a file.
    ///
    pub fn write_to_file(&self, path: &Path) -> anyhow::Result<()> {
        std::fs::write(path, self.content.as_str())
            .map_err(|error| anyhow::anyhow!("Report file {path:?} writing: {error}"))
    }
}

impl From<&Comparison> for Csv {
    fn from(comparison: &Comparison) -> Self {
        let mut content =
            String::with_capacity((comparison.elements.len() + 1) * Self::ESTIMATED_LINE_LENGTH);
        content.push_str(Self::HEADER);
        content.push('\n');

        for Element {
            function,
            checksum_match,
            autovectorized,
            scalar_duration,
            vector_duration,
        } in comparison.elements.iter()
        {
            writeln!(
                &mut content,
                r#""{function}", {checksum_match}, {autovectorized}, {scalar_duration}, {vector_duration}"#,
            )
            .expect("Always valid");
        }

        Self { content }
    }
}
