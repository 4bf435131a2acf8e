//!
//! The vectorization report format of a toolchain.
//!

///
/// The vectorization report format of a toolchain.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReportFormat {
    /// The report flag template. Must contain [`ReportFormat::PATH_PLACEHOLDER`].
    pub flag: String,
    /// The fixed extension appended to the report path.
    pub extension: String,
}

impl ReportFormat {
    /// The placeholder substituted with the report path.
    pub const PATH_PLACEHOLDER: &'static str = "{path}";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(flag: &str, extension: &str) -> Self {
        Self {
            flag: flag.to_owned(),
            extension: extension.to_owned(),
        }
    }

    ///
    /// Whether the template contains the path placeholder.
    ///
    pub fn is_valid(&self) -> bool {
        self.flag.contains(Self::PATH_PLACEHOLDER)
    }

    ///
    /// Builds the report path from the target path and the caller suffix.
    ///
    pub fn path(&self, output_path: &str, suffix: &str) -> String {
        format!("{output_path}{suffix}{}", self.extension)
    }

    ///
    /// Builds the report flag for the given report path.
    ///
    pub fn flag(&self, path: &str) -> String {
        self.flag.replace(Self::PATH_PLACEHOLDER, path)
    }
}
