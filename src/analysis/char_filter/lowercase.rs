//! Lowercase char filter.
//!
//! Uses Unicode lower-casing, so Latin text embedded in Korean prose is
//! folded while Hangul passes through unchanged.

use super::CharFilter;

/// A char filter that lower-cases the whole input.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase char filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        input.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
