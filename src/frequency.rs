//! Frequency counting and ranking.
//!
//! - [`table::FrequencyTable`] counts exact-match token occurrences and ranks
//!   them most-frequent-first, ties broken by first appearance.
//! - [`ngram::NgramExtractor`] slides a fixed window over a token sequence
//!   and builds a thresholded [`ngram::PhraseTable`].

pub mod ngram;
pub mod table;

pub use ngram::{NgramExtractor, PhraseTable};
pub use table::FrequencyTable;
