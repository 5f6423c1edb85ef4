//! Raw-unit analyzer.
//!
//! Splits whitespace-normalized text into its space-delimited units and
//! keeps those within a character-length range. Case, punctuation and digits
//! are preserved, so `"Seoul,"` and `"seoul"` count as different units.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::normalizer::TextNormalizer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::length::LengthFilter;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::Result;

/// Analyzer producing whitespace-delimited units within `min..=max` chars.
pub struct RawUnitAnalyzer {
    inner: PipelineAnalyzer,
    length: LengthFilter,
}

impl RawUnitAnalyzer {
    /// Create a new raw-unit analyzer.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `min_length > max_length`.
    pub fn new(min_length: usize, max_length: usize) -> Result<Self> {
        let length = LengthFilter::new(min_length, max_length)?;
        let inner = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .with_normalizer(TextNormalizer::raw_unit()?)
            .add_filter(Arc::new(length.clone()))
            .with_name("raw_unit");

        Ok(Self { inner, length })
    }

    /// Get the accepted length range.
    pub fn length(&self) -> &LengthFilter {
        &self.length
    }
}

impl Analyzer for RawUnitAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "raw_unit"
    }
}

impl Debug for RawUnitAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawUnitAnalyzer")
            .field("inner", &self.inner)
            .field("length", &self.length)
            .finish()
    }
}
