//! Command line argument parsing for the bindo CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{AnalysisConfig, AnalysisMode, WordCloudConfig};

/// bindo - word and phrase frequency analysis for Korean text
#[derive(Parser, Debug, Clone)]
#[command(name = "bindo")]
#[command(about = "Word and phrase frequency analysis for Korean text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct BindoArgs {
    /// Text file to analyze
    #[arg(value_name = "FILE_PATH")]
    pub file_path: PathBuf,

    /// Number of top-ranked words and phrases to report
    #[arg(long = "top_n", visible_alias = "top-n", default_value_t = 50)]
    pub top_n: usize,

    /// Minimum word length in characters
    #[arg(
        long = "min_word_length",
        visible_alias = "min-word-length",
        default_value_t = 2
    )]
    pub min_word_length: usize,

    /// Maximum word length in characters (raw-text mode only)
    #[arg(
        long = "max_word_length",
        visible_alias = "max-word-length",
        default_value_t = 15
    )]
    pub max_word_length: usize,

    /// Number of consecutive words in a phrase
    #[arg(long = "ngram_size", visible_alias = "ngram-size", default_value_t = 2)]
    pub ngram_size: usize,

    /// Minimum phrase count to report
    #[arg(
        long = "min_phrase_count",
        visible_alias = "min-phrase-count",
        default_value_t = 5
    )]
    pub min_phrase_count: usize,

    /// Count whitespace-delimited units instead of morphemes
    #[arg(long = "raw_text", visible_alias = "raw-text")]
    pub raw_text: bool,

    /// Output directory (default: <file stem>_results)
    #[arg(long = "output_dir", visible_alias = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Font used for the word cloud
    #[arg(
        long = "font_path",
        visible_alias = "font-path",
        value_name = "FONT",
        default_value = "NanumGothic.ttf"
    )]
    pub font_path: PathBuf,

    /// Skip the word cloud image
    #[arg(long = "no_wordcloud", visible_alias = "no-wordcloud")]
    pub no_wordcloud: bool,

    /// Dictionary URI for the morphological analyzer
    #[arg(long, value_name = "URI")]
    pub dict: Option<String>,

    /// User dictionary for the morphological analyzer
    #[arg(long = "user_dict", visible_alias = "user-dict", value_name = "URI")]
    pub user_dict: Option<String>,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl BindoArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n + 1,
            }
        }
    }

    /// Build the analysis configuration from the flags.
    pub fn to_config(&self) -> AnalysisConfig {
        let mode = if self.raw_text {
            AnalysisMode::RawText
        } else {
            AnalysisMode::Morphological
        };

        let mut config = AnalysisConfig::default()
            .with_top_n(self.top_n)
            .with_word_length(self.min_word_length, self.max_word_length)
            .with_ngram_size(self.ngram_size)
            .with_min_phrase_count(self.min_phrase_count)
            .with_mode(mode)
            .with_wordcloud(WordCloudConfig {
                enabled: !self.no_wordcloud,
                font_path: self.font_path.clone(),
                ..Default::default()
            });
        if let Some(output_dir) = &self.output_dir {
            config = config.with_output_dir(output_dir.clone());
        }

        config
    }
}

/// Output formats for the console listing
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable `token: count` lines
    Human,
    /// JSON format
    Json,
}
