//! Morphological tokenizer implementation.

use std::sync::Arc;

use super::Tokenizer;

use crate::analysis::morph::MorphAnalyzer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that turns the morphemes of a [`MorphAnalyzer`] into tagged
/// tokens, in the order the analyzer reports them.
#[derive(Clone)]
pub struct MorphologicalTokenizer {
    analyzer: Arc<dyn MorphAnalyzer>,
}

impl MorphologicalTokenizer {
    /// Create a new morphological tokenizer.
    pub fn new(analyzer: Arc<dyn MorphAnalyzer>) -> Self {
        MorphologicalTokenizer { analyzer }
    }

    /// Get the underlying morphological analyzer.
    pub fn analyzer(&self) -> &Arc<dyn MorphAnalyzer> {
        &self.analyzer
    }
}

impl Tokenizer for MorphologicalTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        if text.is_empty() {
            return Ok(Box::new(std::iter::empty()));
        }

        let tokens: Vec<Token> = self
            .analyzer
            .tag(text)?
            .into_iter()
            .map(|morpheme| Token::new(morpheme.surface).with_tag(morpheme.tag))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "morphological"
    }
}

impl std::fmt::Debug for MorphologicalTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MorphologicalTokenizer")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}
