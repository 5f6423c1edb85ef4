//! # bindo
//!
//! Word and phrase frequency analysis for Korean text.
//!
//! ## Features
//!
//! - Morphological tokenization with content-word filtering
//! - Raw-text mode over whitespace-delimited units
//! - Stable frequency ranking and n-gram phrase extraction
//! - CSV, JSON summary and word cloud export
//! - CP949 fallback for legacy corpora

pub mod analysis;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod frequency;
pub mod input;

pub mod prelude {
    pub use crate::config::{AnalysisConfig, AnalysisMode, WordCloudConfig};
    pub use crate::engine::{AnalysisEngine, AnalysisReport};
    pub use crate::error::{BindoError, Result};
    pub use crate::frequency::{FrequencyTable, NgramExtractor, PhraseTable};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
