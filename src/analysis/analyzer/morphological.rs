//! Morphological analyzer for Korean content words.
//!
//! # Pipeline
//!
//! 1. Morphological cleaning (punctuation, digits, whitespace, lower-case)
//! 2. Morphological tokenizer over the supplied [`MorphAnalyzer`]
//! 3. Part-of-speech filter (nouns, predicates, roots)
//! 4. Minimum length filter
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use bindo::analysis::analyzer::Analyzer;
//! use bindo::analysis::analyzer::morphological::MorphologicalAnalyzer;
//! use bindo::analysis::morph::Morpheme;
//! use bindo::error::Result;
//!
//! let tagger = |text: &str| -> Result<Vec<Morpheme>> {
//!     Ok(text
//!         .split_whitespace()
//!         .map(|word| match word.strip_suffix('은') {
//!             Some(stem) => Morpheme::new(stem, "NNG"),
//!             None => Morpheme::new(word, "MAG"),
//!         })
//!         .collect())
//! };
//!
//! let analyzer = MorphologicalAnalyzer::new(Arc::new(tagger), 2).unwrap();
//! let tokens: Vec<_> = analyzer.analyze("하늘은 매우 푸르다").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 1);
//! assert_eq!(tokens[0].text, "하늘");
//! ```

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::morph::MorphAnalyzer;
use crate::analysis::normalizer::TextNormalizer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::length::LengthFilter;
use crate::analysis::token_filter::pos::PosFilter;
use crate::analysis::tokenizer::morphological::MorphologicalTokenizer;
use crate::error::Result;

/// Analyzer producing tagged content words of at least a minimum length.
pub struct MorphologicalAnalyzer {
    inner: PipelineAnalyzer,
    min_length: usize,
}

impl MorphologicalAnalyzer {
    /// Create a new morphological analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if a cleaning pattern fails to compile.
    pub fn new(morph: Arc<dyn MorphAnalyzer>, min_length: usize) -> Result<Self> {
        let tokenizer = Arc::new(MorphologicalTokenizer::new(morph));
        let inner = PipelineAnalyzer::new(tokenizer)
            .with_normalizer(TextNormalizer::morphological()?)
            .add_filter(Arc::new(PosFilter::content_words()))
            .add_filter(Arc::new(LengthFilter::at_least(min_length)))
            .with_name("morphological");

        Ok(Self { inner, min_length })
    }

    /// Get the minimum token length in characters.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Get the underlying pipeline.
    pub fn pipeline(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Analyzer for MorphologicalAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "morphological"
    }
}

impl Debug for MorphologicalAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MorphologicalAnalyzer")
            .field("inner", &self.inner)
            .field("min_length", &self.min_length)
            .finish()
    }
}
