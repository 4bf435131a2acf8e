//!
//! The named flag group.
//!

pub mod kind;

use self::kind::FlagGroupKind;

///
/// The named, ordered sequence of compiler flags serving one concern.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagGroup {
    /// The group kind.
    pub kind: FlagGroupKind,
    /// The flags, in command-line order.
    pub flags: Vec<String>,
}

impl FlagGroup {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(kind: FlagGroupKind, flags: Vec<String>) -> Self {
        Self { kind, flags }
    }

    ///
    /// Creates an empty group, used as a fallback for undefined groups.
    ///
    pub fn empty(kind: FlagGroupKind) -> Self {
        Self::new(kind, vec![])
    }

    ///
    /// Whether the group has no flags.
    ///
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}
