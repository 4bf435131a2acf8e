//!
//! The per-function vectorization status.
//!

#[cfg(test)]
mod tests;

pub mod objdump;

use std::collections::BTreeMap;

use crate::opt_record::OptimizationRecord;

///
/// The per-function vectorization status. Unknown functions are not vectorized.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VectorizationStatus {
    /// The status by function name.
    functions: BTreeMap<String, bool>,
}

impl VectorizationStatus {
    ///
    /// Marks the function, keeping it vectorized once any source says so.
    ///
    pub fn mark(&mut self, function: &str, is_vectorized: bool) {
        *self.functions.entry(function.to_owned()).or_default() |= is_vectorized;
    }

    ///
    /// Whether the function has been auto-vectorized.
    ///
    pub fn is_vectorized(&self, function: &str) -> bool {
        self.functions.get(function).copied().unwrap_or_default()
    }

    ///
    /// The number of vectorized functions.
    ///
    pub fn vectorized_count(&self) -> usize {
        self.functions
            .values()
            .filter(|is_vectorized| **is_vectorized)
            .count()
    }
}

impl From<&OptimizationRecord> for VectorizationStatus {
    fn from(record: &OptimizationRecord) -> Self {
        let mut status = Self::default();
        for remark in record.remarks.iter() {
            let function = match remark.fields.function.as_deref() {
                Some(function) => function,
                None => continue,
            };
            if !remark.is_vectorizer() {
                continue;
            }
            status.mark(function, remark.is_vectorized());
        }
        status
    }
}

impl FromIterator<(String, bool)> for VectorizationStatus {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        let mut status = Self::default();
        for (function, is_vectorized) in iter {
            status.mark(function.as_str(), is_vectorized);
        }
        status
    }
}
