//! Text analysis module for Bindo.
//!
//! This module turns raw corpus text into the ordered token sequence that the
//! frequency counters consume:
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Token Filters → Tokens
//! ```
//!
//! Two ready-made pipelines cover the supported modes:
//! [`MorphologicalAnalyzer`](analyzer::morphological::MorphologicalAnalyzer)
//! and [`RawUnitAnalyzer`](analyzer::raw_unit::RawUnitAnalyzer).

pub mod analyzer;
pub mod char_filter;
pub mod morph;
pub mod normalizer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
