//! Text normalization ahead of tokenization.
//!
//! A [`TextNormalizer`] is an ordered chain of [`CharFilter`]s. Two presets
//! match the two analysis modes:
//!
//! - [`TextNormalizer::morphological`]: drop punctuation, drop digit runs,
//!   collapse whitespace, trim, lower-case.
//! - [`TextNormalizer::raw_unit`]: collapse whitespace and trim only, so the
//!   original units survive for length-based analysis.
//!
//! # Examples
//!
//! ```
//! use bindo::analysis::normalizer::TextNormalizer;
//!
//! let normalizer = TextNormalizer::morphological().unwrap();
//! assert_eq!(normalizer.normalize("  Hello, 세계! 2024년  "), "hello 세계 년");
//!
//! let normalizer = TextNormalizer::raw_unit().unwrap();
//! assert_eq!(normalizer.normalize("  Hello,\n\n세계!  "), "Hello, 세계!");
//! ```

use std::sync::Arc;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::char_filter::trim::TrimCharFilter;
use crate::error::Result;

/// Matches every char that is neither a word char nor whitespace.
pub const NON_WORD_PATTERN: &str = r"[^\w\s]";

/// Matches runs of decimal digits.
pub const DIGIT_RUN_PATTERN: &str = r"\d+";

/// Matches runs of whitespace.
pub const WHITESPACE_RUN_PATTERN: &str = r"\s+";

/// An ordered chain of char filters.
#[derive(Clone, Default)]
pub struct TextNormalizer {
    char_filters: Vec<Arc<dyn CharFilter>>,
}

impl TextNormalizer {
    /// Create an empty normalizer that returns its input unchanged.
    pub fn new() -> Self {
        TextNormalizer {
            char_filters: Vec::new(),
        }
    }

    /// Cleaning used before morphological tagging.
    pub fn morphological() -> Result<Self> {
        Ok(Self::new()
            .add_char_filter(Arc::new(PatternReplaceCharFilter::new(NON_WORD_PATTERN, "")?))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::new(DIGIT_RUN_PATTERN, "")?))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::new(
                WHITESPACE_RUN_PATTERN,
                " ",
            )?))
            .add_char_filter(Arc::new(TrimCharFilter::new()))
            .add_char_filter(Arc::new(LowercaseCharFilter::new())))
    }

    /// Cleaning used before whitespace splitting in raw-unit mode.
    pub fn raw_unit() -> Result<Self> {
        Ok(Self::new()
            .add_char_filter(Arc::new(PatternReplaceCharFilter::new(
                WHITESPACE_RUN_PATTERN,
                " ",
            )?))
            .add_char_filter(Arc::new(TrimCharFilter::new())))
    }

    /// Append a char filter to the chain.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Get the char filters in application order.
    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    /// Run every char filter in order.
    pub fn normalize(&self, text: &str) -> String {
        let mut filtered = text.to_string();
        for char_filter in &self.char_filters {
            filtered = char_filter.filter(&filtered);
        }
        filtered
    }
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.char_filters.iter().map(|c| c.name()).collect();
        f.debug_struct("TextNormalizer")
            .field("char_filters", &names)
            .finish()
    }
}
