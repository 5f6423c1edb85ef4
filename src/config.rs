//! Configuration for an analysis run.
//!
//! [`AnalysisConfig`] gathers every tuning knob of a run. It is validated as
//! a whole before the input file is even opened, so a bad setting never
//! costs a tokenization pass.
//!
//! # Examples
//!
//! ```
//! use bindo::config::{AnalysisConfig, AnalysisMode};
//!
//! let config = AnalysisConfig::default()
//!     .with_mode(AnalysisMode::RawText)
//!     .with_word_length(1, 10);
//! assert!(config.validate().is_ok());
//!
//! let config = AnalysisConfig::default().with_ngram_size(0);
//! assert!(config.validate().is_err());
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{BindoError, Result};

/// Tokenization strategy of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    /// Tagged content words plus n-gram phrases.
    #[default]
    Morphological,

    /// Whitespace-delimited units within a length range.
    RawText,
}

impl AnalysisMode {
    /// Short identifier used in logs and summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::Morphological => "morphological",
            AnalysisMode::RawText => "raw_text",
        }
    }
}

/// Settings of the word cloud artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCloudConfig {
    /// Whether to render the word cloud at all.
    pub enabled: bool,

    /// TrueType/OpenType font with Hangul coverage.
    pub font_path: PathBuf,

    /// Canvas width in pixels.
    pub width: u32,

    /// Canvas height in pixels.
    pub height: u32,

    /// Number of top-ranked words drawn.
    pub max_words: usize,

    /// Smallest font size in pixels; smaller words are skipped.
    pub min_font_size: f32,

    /// Weight of the frequency ratio in font sizing (0.0 to 1.0).
    pub relative_scaling: f32,
}

impl WordCloudConfig {
    /// Check the canvas and sizing parameters.
    ///
    /// # Errors
    ///
    /// Returns [`BindoError::Config`] for an empty canvas, a
    /// `relative_scaling` outside `0.0..=1.0`, or a `min_font_size` that is
    /// not positive.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(BindoError::config(format!(
                "word cloud canvas must not be empty ({}x{})",
                self.width, self.height
            )));
        }
        if !(0.0..=1.0).contains(&self.relative_scaling) {
            return Err(BindoError::config(format!(
                "relative_scaling must be within 0.0..=1.0, got {}",
                self.relative_scaling
            )));
        }
        if self.min_font_size.is_nan() || self.min_font_size <= 0.0 {
            return Err(BindoError::config(format!(
                "min_font_size must be positive, got {}",
                self.min_font_size
            )));
        }

        Ok(())
    }
}

impl Default for WordCloudConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            font_path: PathBuf::from("NanumGothic.ttf"),
            width: 800,
            height: 400,
            max_words: 100,
            min_font_size: 8.0,
            relative_scaling: 0.5,
        }
    }
}

/// Configuration of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of ranked entries reported and exported.
    pub top_n: usize,

    /// Minimum token length in characters.
    pub min_word_length: usize,

    /// Maximum token length in characters (raw-text mode only).
    pub max_word_length: usize,

    /// Window size of the phrase n-grams.
    pub ngram_size: usize,

    /// Minimum count for a phrase to be kept.
    pub min_phrase_count: usize,

    /// Tokenization strategy.
    pub mode: AnalysisMode,

    /// Destination of the artifacts; `<file stem>_results` when unset.
    pub output_dir: Option<PathBuf>,

    /// Word cloud settings.
    pub wordcloud: WordCloudConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: 50,
            min_word_length: 2,
            max_word_length: 15,
            ngram_size: 2,
            min_phrase_count: 5,
            mode: AnalysisMode::Morphological,
            output_dir: None,
            wordcloud: WordCloudConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// Set the number of reported entries.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Set the token length range.
    pub fn with_word_length(mut self, min: usize, max: usize) -> Self {
        self.min_word_length = min;
        self.max_word_length = max;
        self
    }

    /// Set the n-gram window size.
    pub fn with_ngram_size(mut self, ngram_size: usize) -> Self {
        self.ngram_size = ngram_size;
        self
    }

    /// Set the phrase count threshold.
    pub fn with_min_phrase_count(mut self, min_phrase_count: usize) -> Self {
        self.min_phrase_count = min_phrase_count;
        self
    }

    /// Set the tokenization strategy.
    pub fn with_mode(mut self, mode: AnalysisMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the artifact directory.
    pub fn with_output_dir<P: Into<PathBuf>>(mut self, output_dir: P) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    /// Replace the word cloud settings.
    pub fn with_wordcloud(mut self, wordcloud: WordCloudConfig) -> Self {
        self.wordcloud = wordcloud;
        self
    }

    /// Check the numeric settings for consistency.
    ///
    /// # Errors
    ///
    /// Returns [`BindoError::Config`] for a zero n-gram size, an inverted
    /// length range in raw-text mode, or an enabled word cloud that fails
    /// [`WordCloudConfig::validate`].
    pub fn validate(&self) -> Result<()> {
        if self.ngram_size == 0 {
            return Err(BindoError::config("ngram_size must be at least 1"));
        }

        if self.mode == AnalysisMode::RawText && self.min_word_length > self.max_word_length {
            return Err(BindoError::config(format!(
                "min_word_length ({}) exceeds max_word_length ({})",
                self.min_word_length, self.max_word_length
            )));
        }

        if self.wordcloud.enabled {
            self.wordcloud.validate()?;
        }

        Ok(())
    }
}
