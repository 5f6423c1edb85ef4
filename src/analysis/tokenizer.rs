//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split normalized text into an ordered token stream.
//!
//! # Available Tokenizers
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace characters
//! - [`morphological::MorphologicalTokenizer`] - Delegates to a
//!   [`MorphAnalyzer`](crate::analysis::morph::MorphAnalyzer) and keeps the
//!   part-of-speech tags
//!
//! # Examples
//!
//! ```
//! use bindo::analysis::tokenizer::Tokenizer;
//! use bindo::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("가을 하늘").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so tokenizers can be shared behind `Arc`.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod morphological;
pub mod whitespace;
