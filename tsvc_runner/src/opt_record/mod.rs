//!
//! The LLVM optimization record.
//!

#[cfg(test)]
mod tests;

pub mod error;
pub mod remark;
pub mod remark_kind;

use std::path::Path;

use serde::Deserialize;

use self::error::Error;
use self::remark::Remark;
use self::remark::RemarkFields;
use self::remark_kind::RemarkKind;

///
/// The LLVM optimization record, a YAML stream of tagged remark documents.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OptimizationRecord {
    /// The remarks in file order.
    pub remarks: Vec<Remark>,
}

impl OptimizationRecord {
    /// The record file extension produced by `-foptimization-record-file`.
    pub const EXTENSION: &'static str = ".opt.yml";

    ///
    /// Parses the record text.
    ///
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut remarks = Vec::new();
        for (index, document) in serde_yaml::Deserializer::from_str(text).enumerate() {
            let value = serde_yaml::Value::deserialize(document)
                .map_err(|error| Error::Parsing { error, index })?;

            let tagged = match value {
                serde_yaml::Value::Null => continue,
                serde_yaml::Value::Tagged(tagged) => *tagged,
                _ => return Err(Error::Untagged { index }),
            };

            let tag = format!("!{}", tagged.tag.to_string().trim_start_matches('!'));
            let kind = tag
                .parse::<RemarkKind>()
                .map_err(|tag| Error::UnknownTag { tag, index })?;
            let fields = serde_yaml::from_value::<RemarkFields>(tagged.value)
                .map_err(|error| Error::Parsing { error, index })?;

            remarks.push(Remark::new(kind, fields));
        }

        Ok(Self { remarks })
    }
}

impl TryFrom<&Path> for OptimizationRecord {
    type Error = Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| Error::Reading {
            error,
            path: path.to_owned(),
        })?;
        Self::parse(text.as_str())
    }
}
