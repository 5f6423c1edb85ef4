//! N-gram phrase extraction.
//!
//! Phrases are stride-1 windows over the filtered token sequence. Windows do
//! not stop at sentence boundaries: the filtered sequence no longer carries
//! them.
//!
//! # Examples
//!
//! ```
//! use bindo::frequency::NgramExtractor;
//!
//! let extractor = NgramExtractor::new(2).unwrap();
//! let phrases = extractor.extract(&["a", "b", "a", "b", "c"], 2);
//!
//! assert_eq!(phrases.len(), 1);
//! assert_eq!(phrases.get("a b"), 2);
//! ```

use serde::Serialize;

use crate::error::{BindoError, Result};
use crate::frequency::table::FrequencyTable;

/// Separator placed between the tokens of a phrase.
pub const PHRASE_SEPARATOR: &str = " ";

/// Builds phrase tables from windows of a fixed size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NgramExtractor {
    n: usize,
}

impl NgramExtractor {
    /// Create an extractor for windows of `n` tokens.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `n` is 0.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(BindoError::config("ngram_size must be at least 1"));
        }
        Ok(NgramExtractor { n })
    }

    /// Get the window size.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Every contiguous window of the sequence joined into a phrase, in order.
    ///
    /// Returns nothing when the sequence is shorter than the window.
    pub fn windows<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .windows(self.n)
            .map(|window| {
                window
                    .iter()
                    .map(|token| token.as_ref())
                    .collect::<Vec<&str>>()
                    .join(PHRASE_SEPARATOR)
            })
            .collect()
    }

    /// Count the windows and keep phrases seen at least `min_count` times.
    pub fn extract<S: AsRef<str>>(&self, tokens: &[S], min_count: usize) -> PhraseTable {
        let table = FrequencyTable::from_tokens(self.windows(tokens)).retain_min_count(min_count);
        PhraseTable {
            ngram_size: self.n,
            min_count,
            table,
        }
    }
}

/// Thresholded n-gram counts.
///
/// Every entry has a count of at least `min_count`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PhraseTable {
    ngram_size: usize,
    min_count: usize,
    table: FrequencyTable,
}

impl PhraseTable {
    /// Window size the phrases were built with.
    pub fn ngram_size(&self) -> usize {
        self.ngram_size
    }

    /// Threshold applied to the counts.
    pub fn min_count(&self) -> usize {
        self.min_count
    }

    /// The underlying frequency table.
    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    /// Count of a phrase, 0 if absent or below the threshold.
    pub fn get(&self, phrase: &str) -> usize {
        self.table.get(phrase)
    }

    /// Number of distinct phrases.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Check if no phrase reached the threshold.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// All phrases ranked by descending count, ties in first-seen order.
    pub fn ranked(&self) -> Vec<(String, usize)> {
        self.table.ranked()
    }

    /// The `n` highest-ranked phrases.
    pub fn top_n(&self, n: usize) -> Vec<(String, usize)> {
        self.table.top_n(n)
    }
}
