//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the whole input string before it reaches the
//! tokenizer. They are chained by a
//! [`TextNormalizer`](crate::analysis::normalizer::TextNormalizer).
//!
//! # Available Filters
//!
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//! - [`trim::TrimCharFilter`] - Strips leading and trailing whitespace
//! - [`lowercase::LowercaseCharFilter`] - Unicode-aware lower-casing
//!
//! # Examples
//!
//! ```
//! use bindo::analysis::char_filter::CharFilter;
//! use bindo::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::new(r"\s+", " ").unwrap();
//! assert_eq!(filter.filter("가을\n\n하늘"), "가을 하늘");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text and return the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod pattern_replace;
pub mod trim;
