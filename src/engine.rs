//! Analysis engine.
//!
//! The engine owns the analyzer for one run and turns corpus text into an
//! [`AnalysisReport`]:
//!
//! ```text
//! text → analyzer (normalize → tokenize → filter) → FrequencyTable
//!                                                 ↘ NgramExtractor → PhraseTable
//! ```
//!
//! # Examples
//!
//! ```
//! use bindo::config::{AnalysisConfig, AnalysisMode};
//! use bindo::engine::AnalysisEngine;
//!
//! let config = AnalysisConfig::default()
//!     .with_mode(AnalysisMode::RawText)
//!     .with_word_length(1, 10);
//! let engine = AnalysisEngine::raw_text(config).unwrap();
//!
//! let report = engine.run("가을 하늘 공활한데 가을 하늘").unwrap();
//! assert_eq!(report.words().get("가을"), 2);
//! assert_eq!(report.words().get("공활한데"), 1);
//! assert!(report.phrases().is_none());
//! ```

use std::sync::Arc;

use log::debug;
use serde::Serialize;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::morphological::MorphologicalAnalyzer;
use crate::analysis::analyzer::raw_unit::RawUnitAnalyzer;
use crate::analysis::morph::MorphAnalyzer;
use crate::config::{AnalysisConfig, AnalysisMode};
use crate::error::{BindoError, Result};
use crate::frequency::{FrequencyTable, NgramExtractor, PhraseTable};

/// Runs the configured pipeline over corpus text.
pub struct AnalysisEngine {
    config: AnalysisConfig,
    analyzer: Arc<dyn Analyzer>,
    ngram: Option<NgramExtractor>,
}

impl AnalysisEngine {
    /// Create an engine for the configured mode.
    ///
    /// The configuration is validated first. Morphological mode needs a
    /// morphological analyzer; raw-text mode ignores it.
    ///
    /// # Errors
    ///
    /// Returns [`BindoError::Config`] for an invalid configuration or a
    /// missing morphological analyzer.
    pub fn new(config: AnalysisConfig, morph: Option<Arc<dyn MorphAnalyzer>>) -> Result<Self> {
        config.validate()?;

        let (analyzer, ngram): (Arc<dyn Analyzer>, Option<NgramExtractor>) = match config.mode {
            AnalysisMode::RawText => (
                Arc::new(RawUnitAnalyzer::new(
                    config.min_word_length,
                    config.max_word_length,
                )?),
                None,
            ),
            AnalysisMode::Morphological => {
                let morph = morph.ok_or_else(|| {
                    BindoError::config("morphological mode requires a morphological analyzer")
                })?;
                (
                    Arc::new(MorphologicalAnalyzer::new(morph, config.min_word_length)?),
                    Some(NgramExtractor::new(config.ngram_size)?),
                )
            }
        };
        debug!(
            "created {} engine with analyzer {}",
            config.mode.as_str(),
            analyzer.name()
        );

        Ok(Self {
            config,
            analyzer,
            ngram,
        })
    }

    /// Create a raw-text engine, forcing the mode.
    pub fn raw_text(config: AnalysisConfig) -> Result<Self> {
        Self::new(config.with_mode(AnalysisMode::RawText), None)
    }

    /// Create a morphological engine, forcing the mode.
    pub fn morphological(config: AnalysisConfig, morph: Arc<dyn MorphAnalyzer>) -> Result<Self> {
        Self::new(config.with_mode(AnalysisMode::Morphological), Some(morph))
    }

    /// Get the configuration of this engine.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Get the analyzer of this engine.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Analyze the text and build the frequency tables.
    pub fn run(&self, text: &str) -> Result<AnalysisReport> {
        let tokens: Vec<String> = self.analyzer.analyze(text)?.map(|token| token.text).collect();
        let words = FrequencyTable::from_tokens(&tokens);
        debug!(
            "counted {} tokens, {} distinct",
            tokens.len(),
            words.len()
        );

        let phrases = self.ngram.as_ref().map(|extractor| {
            let phrases = extractor.extract(&tokens, self.config.min_phrase_count);
            debug!(
                "kept {} distinct {}-grams with count >= {}",
                phrases.len(),
                extractor.size(),
                self.config.min_phrase_count
            );
            phrases
        });

        Ok(AnalysisReport {
            mode: self.config.mode,
            top_n: self.config.top_n,
            total_tokens: tokens.len(),
            words,
            phrases,
        })
    }
}

impl std::fmt::Debug for AnalysisEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisEngine")
            .field("config", &self.config)
            .field("analyzer", &self.analyzer.name())
            .field("ngram", &self.ngram)
            .finish()
    }
}

/// Result of one analysis run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisReport {
    mode: AnalysisMode,
    top_n: usize,
    total_tokens: usize,
    words: FrequencyTable,
    phrases: Option<PhraseTable>,
}

impl AnalysisReport {
    /// Mode the report was produced in.
    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }

    /// Number of filtered tokens that were counted.
    pub fn total_tokens(&self) -> usize {
        self.total_tokens
    }

    /// Full word frequency table.
    pub fn words(&self) -> &FrequencyTable {
        &self.words
    }

    /// Phrase table; `None` in raw-text mode.
    pub fn phrases(&self) -> Option<&PhraseTable> {
        self.phrases.as_ref()
    }

    /// The configured number of top-ranked words.
    pub fn top_words(&self) -> Vec<(String, usize)> {
        self.words.top_n(self.top_n)
    }

    /// The configured number of top-ranked phrases; empty in raw-text mode.
    pub fn top_phrases(&self) -> Vec<(String, usize)> {
        self.phrases
            .as_ref()
            .map(|phrases| phrases.top_n(self.top_n))
            .unwrap_or_default()
    }

    /// Serializable view of the ranked results.
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            mode: self.mode,
            total_tokens: self.total_tokens,
            distinct_tokens: self.words.len(),
            words: self.top_words(),
            ngram_size: self.phrases.as_ref().map(|p| p.ngram_size()),
            min_phrase_count: self.phrases.as_ref().map(|p| p.min_count()),
            phrases: self.phrases.as_ref().map(|p| p.top_n(self.top_n)),
        }
    }
}

/// Ranked results of a run, as printed in JSON and stored in the summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub mode: AnalysisMode,
    pub total_tokens: usize,
    pub distinct_tokens: usize,
    pub words: Vec<(String, usize)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ngram_size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_phrase_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phrases: Option<Vec<(String, usize)>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::morph::Morpheme;

    /// Tags every whitespace unit as a common noun.
    fn noun_tagger() -> Arc<dyn MorphAnalyzer> {
        Arc::new(|text: &str| -> Result<Vec<Morpheme>> {
            Ok(text
                .split_whitespace()
                .map(|word| Morpheme::new(word, "NNG"))
                .collect())
        })
    }

    #[test]
    fn test_raw_text_scenario() {
        let config = AnalysisConfig::default().with_word_length(1, 10);
        let engine = AnalysisEngine::raw_text(config).unwrap();

        let report = engine.run("가을 하늘 공활한데 가을 하늘").unwrap();

        assert_eq!(report.mode(), AnalysisMode::RawText);
        assert_eq!(report.words().len(), 3);
        assert_eq!(report.words().get("가을"), 2);
        assert_eq!(report.words().get("하늘"), 2);
        assert_eq!(report.words().get("공활한데"), 1);
        assert_eq!(report.total_tokens(), 5);
        assert!(report.top_phrases().is_empty());
    }

    #[test]
    fn test_morphological_phrases() {
        let config = AnalysisConfig::default()
            .with_word_length(1, 15)
            .with_min_phrase_count(2);
        let engine = AnalysisEngine::morphological(config, noun_tagger()).unwrap();

        let report = engine.run("a b a b c").unwrap();
        let phrases = report.phrases().unwrap();

        assert_eq!(phrases.ranked(), vec![("a b".to_string(), 2)]);
        assert_eq!(report.words().total(), report.total_tokens());
    }

    #[test]
    fn test_morphological_lowercases_raw_does_not() {
        let config = AnalysisConfig::default().with_word_length(1, 15);

        let morph = AnalysisEngine::morphological(config.clone(), noun_tagger()).unwrap();
        let raw = AnalysisEngine::raw_text(config).unwrap();

        let text = "Seoul seoul";
        assert_eq!(morph.run(text).unwrap().words().get("seoul"), 2);
        let raw_report = raw.run(text).unwrap();
        assert_eq!(raw_report.words().get("Seoul"), 1);
        assert_eq!(raw_report.words().get("seoul"), 1);
    }

    #[test]
    fn test_empty_text() {
        let engine =
            AnalysisEngine::morphological(AnalysisConfig::default(), noun_tagger()).unwrap();

        let report = engine.run("").unwrap();

        assert!(report.words().is_empty());
        assert!(report.phrases().unwrap().is_empty());
        assert!(report.top_words().is_empty());
        assert!(report.top_phrases().is_empty());
    }

    #[test]
    fn test_zero_ngram_size_fails_before_tagging() {
        let tagger: Arc<dyn MorphAnalyzer> =
            Arc::new(|_: &str| -> Result<Vec<Morpheme>> { panic!("tagger must not run") });

        let err = AnalysisEngine::morphological(AnalysisConfig::default().with_ngram_size(0), tagger)
            .unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_morphological_mode_needs_analyzer() {
        let err = AnalysisEngine::new(AnalysisConfig::default(), None).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_top_n_truncates_both_lists() {
        let config = AnalysisConfig::default()
            .with_top_n(1)
            .with_word_length(1, 15)
            .with_min_phrase_count(1);
        let engine = AnalysisEngine::morphological(config, noun_tagger()).unwrap();

        let report = engine.run("x y x y z").unwrap();

        assert_eq!(report.top_words(), vec![("x".to_string(), 2)]);
        assert_eq!(report.top_phrases(), vec![("x y".to_string(), 2)]);

        let summary = report.summary();
        assert_eq!(summary.distinct_tokens, 3);
        assert_eq!(summary.ngram_size, Some(2));
        assert_eq!(summary.phrases.unwrap().len(), 1);
    }
}
