//! Length filter implementation.

use super::Filter;

use crate::analysis::token::{Token, TokenStream};
use crate::error::{BindoError, Result};

/// A filter that keeps tokens whose character count lies in a closed range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LengthFilter {
    min: usize,
    max: Option<usize>,
}

impl LengthFilter {
    /// Create a filter for `min..=max` characters.
    pub fn new(min: usize, max: usize) -> Result<Self> {
        if min > max {
            return Err(BindoError::config(format!(
                "minimum length {min} exceeds maximum length {max}"
            )));
        }
        Ok(LengthFilter {
            min,
            max: Some(max),
        })
    }

    /// Create a filter with only a lower bound.
    pub fn at_least(min: usize) -> Self {
        LengthFilter { min, max: None }
    }

    /// Get the minimum length.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Get the maximum length, if bounded.
    pub fn max(&self) -> Option<usize> {
        self.max
    }

    /// Whether a token of `len` characters passes.
    pub fn accepts(&self, len: usize) -> bool {
        len >= self.min && self.max.is_none_or(|max| len <= max)
    }
}

impl Filter for LengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| self.accepts(token.char_len()))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "length"
    }
}
