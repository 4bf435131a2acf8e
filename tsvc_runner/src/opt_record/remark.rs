//!
//! The optimization remark.
//!

use crate::opt_record::remark_kind::RemarkKind;

///
/// The optimization remark fields the runner uses. The rest of the document is ignored.
///
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemarkFields {
    /// The LLVM pass name, e.g. `loop-vectorize`.
    #[serde(default)]
    pub pass: Option<String>,
    /// The remark name, e.g. `Vectorized`.
    #[serde(default)]
    pub name: Option<String>,
    /// The function the remark refers to.
    #[serde(default)]
    pub function: Option<String>,
}

///
/// The optimization remark.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remark {
    /// The remark kind.
    pub kind: RemarkKind,
    /// The remark fields.
    pub fields: RemarkFields,
}

impl Remark {
    /// The passes performing auto-vectorization.
    pub const VECTORIZER_PASSES: [&'static str; 2] = ["loop-vectorize", "slp-vectorize"];

    /// The remark name of a successful vectorization.
    pub const NAME_VECTORIZED: &'static str = "Vectorized";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(kind: RemarkKind, fields: RemarkFields) -> Self {
        Self { kind, fields }
    }

    ///
    /// Whether the remark comes from a vectorizer pass.
    ///
    pub fn is_vectorizer(&self) -> bool {
        self.fields
            .pass
            .as_deref()
            .is_some_and(|pass| Self::VECTORIZER_PASSES.contains(&pass))
    }

    ///
    /// Whether the remark reports a vectorized loop or block.
    ///
    pub fn is_vectorized(&self) -> bool {
        self.fields.name.as_deref() == Some(Self::NAME_VECTORIZED)
    }
}
