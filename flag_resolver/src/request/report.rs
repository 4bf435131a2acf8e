//!
//! The vectorization report request.
//!

///
/// The vectorization report request.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    /// The build target path the report path is derived from.
    pub output_path: String,
    /// The caller-supplied suffix inserted before the report extension.
    pub suffix: String,
}

impl ReportRequest {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(output_path: &str, suffix: &str) -> Self {
        Self {
            output_path: output_path.to_owned(),
            suffix: suffix.to_owned(),
        }
    }
}
