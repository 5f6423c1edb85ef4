//! Token filter implementations.
//!
//! Filters receive a token stream and return a new one. Every filter here
//! only drops tokens, so the relative order of the survivors is preserved;
//! the n-gram windows depend on that.
//!
//! # Available Filters
//!
//! - [`pos::PosFilter`] - Keeps tokens whose tag starts with a given prefix
//! - [`length::LengthFilter`] - Keeps tokens within a character-length range
//!
//! # Examples
//!
//! ```
//! use bindo::analysis::token::Token;
//! use bindo::analysis::token_filter::Filter;
//! use bindo::analysis::token_filter::length::LengthFilter;
//!
//! let filter = LengthFilter::at_least(2);
//! let tokens = vec![Token::new("가"), Token::new("가을")];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].text, "가을");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod length;
pub mod pos;
