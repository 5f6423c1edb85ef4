//! Analyzer trait and implementations.
//!
//! An analyzer is the complete text processing pipeline:
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → FrequencyTable
//!             ↓
//!         Normalizer (char filters)
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```
//!
//! # Available Implementations
//!
//! - [`PipelineAnalyzer`](pipeline::PipelineAnalyzer) - Custom normalizer + tokenizer + filter chains
//! - [`MorphologicalAnalyzer`](morphological::MorphologicalAnalyzer) - Tagged content words
//! - [`RawUnitAnalyzer`](raw_unit::RawUnitAnalyzer) - Whitespace units within a length range
//!
//! # Examples
//!
//! ```
//! use bindo::analysis::analyzer::Analyzer;
//! use bindo::analysis::analyzer::raw_unit::RawUnitAnalyzer;
//!
//! let analyzer = RawUnitAnalyzer::new(1, 10).unwrap();
//! let tokens: Vec<_> = analyzer.analyze("가을 하늘").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "가을");
//! assert_eq!(tokens[1].text, "하늘");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod morphological;
pub mod pipeline;
pub mod raw_unit;

pub use morphological::MorphologicalAnalyzer;
pub use pipeline::PipelineAnalyzer;
pub use raw_unit::RawUnitAnalyzer;

/// Trait for analyzers that convert raw text into filtered tokens.
///
/// The trait requires `Send + Sync` so analyzers can be held behind `Arc`.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return the surviving tokens in order.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
