//!
//! The environment toggles.
//!


use std::ffi::OsString;

/// The variable requesting a vectorization report.
pub const VARIABLE_VEC_REPORT: &str = "VEC_REPORT";

/// The variable requesting precise math.
pub const VARIABLE_PRECISE_MATH: &str = "PRECISE_MATH";

///
/// The environment toggles, read once when the configuration is built.
///
/// A toggle is on if its variable is set to a non-empty UTF-8 value, matching `ifdef` in make.
/// Empty and malformed values leave the toggle off.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Toggles {
    /// Whether `VEC_REPORT` is set.
    pub vec_report: bool,
    /// Whether `PRECISE_MATH` is set.
    pub precise_math: bool,
}

impl Toggles {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(vec_report: bool, precise_math: bool) -> Self {
        Self {
            vec_report,
            precise_math,
        }
    }

    ///
    /// Reads the toggles from the process environment.
    ///
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var_os(name))
    }

    ///
    /// Reads the toggles with a custom variable lookup.
    ///
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let is_set = |name: &str| {
            lookup(name)
                .and_then(|value| value.into_string().ok())
                .is_some_and(|value| !value.is_empty())
        };

        Self {
            vec_report: is_set(VARIABLE_VEC_REPORT),
            precise_math: is_set(VARIABLE_PRECISE_MATH),
        }
    }
}
