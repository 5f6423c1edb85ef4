//! Artifact export.
//!
//! [`ReportWriter`] writes the files of one run into the output directory:
//! ranked CSV tables, the word cloud image and a JSON summary. The word
//! cloud is best effort; when it cannot be rendered the other artifacts are
//! still written.

pub mod csv;
pub mod output_dir;
pub mod wordcloud;

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::Serialize;

use crate::config::{AnalysisConfig, AnalysisMode};
use crate::engine::{AnalysisReport, ReportSummary};
use crate::error::{BindoError, Result};

pub use self::csv::CsvExporter;
pub use self::output_dir::{default_output_dir, resolve_output_dir};
pub use self::wordcloud::WordCloudRenderer;

/// Paths of the artifacts written for one run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ArtifactPaths {
    pub frequency_csv: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ngram_csv: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wordcloud: Option<PathBuf>,
    pub summary_json: PathBuf,
}

/// Content of `<base>_summary.json`.
#[derive(Debug, Serialize)]
struct SummaryDocument<'a> {
    generated_at: String,
    input: String,
    config: &'a AnalysisConfig,
    #[serde(flatten)]
    report: ReportSummary,
}

/// Writes the artifacts of a run.
#[derive(Debug)]
pub struct ReportWriter {
    config: AnalysisConfig,
    output_dir: PathBuf,
    base_name: String,
    exporter: CsvExporter,
}

impl ReportWriter {
    /// Create a writer for an input file, resolving and creating the
    /// output directory.
    ///
    /// # Errors
    ///
    /// Returns [`BindoError::Export`] if the input path has no file name.
    pub fn new(config: AnalysisConfig, input: &Path) -> Result<Self> {
        let base_name = input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                BindoError::export(format!("input path {} has no file name", input.display()))
            })?;
        let output_dir = resolve_output_dir(input, config.output_dir.as_deref())?;

        Ok(Self {
            config,
            output_dir,
            base_name,
            exporter: CsvExporter::new(),
        })
    }

    /// Directory the artifacts are written to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// File name prefix shared by every artifact.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    fn artifact_path(&self, suffix: &str) -> PathBuf {
        self.output_dir.join(format!("{}_{}", self.base_name, suffix))
    }

    /// Write every artifact of the report.
    pub fn write(&self, report: &AnalysisReport) -> Result<ArtifactPaths> {
        self.write_at(report, Utc::now())
    }

    /// Write every artifact, stamping the summary with `generated_at`.
    pub fn write_at(
        &self,
        report: &AnalysisReport,
        generated_at: DateTime<Utc>,
    ) -> Result<ArtifactPaths> {
        let (frequency_suffix, word_header, wordcloud_suffix) = match report.mode() {
            AnalysisMode::Morphological => (
                "word_frequency.csv",
                csv::WORD_HEADER,
                "wordcloud.png",
            ),
            AnalysisMode::RawText => (
                "raw_text_frequency.csv",
                csv::RAW_UNIT_HEADER,
                "raw_text_wordcloud.png",
            ),
        };

        let frequency_csv = self.artifact_path(frequency_suffix);
        self.exporter
            .write_file(&frequency_csv, word_header, &report.top_words())?;
        info!("wrote {}", frequency_csv.display());

        let ngram_csv = match report.phrases() {
            Some(phrases) => {
                let path =
                    self.artifact_path(&format!("ngram{}_frequency.csv", phrases.ngram_size()));
                self.exporter.write_file(
                    &path,
                    &csv::ngram_header(phrases.ngram_size()),
                    &report.top_phrases(),
                )?;
                info!("wrote {}", path.display());
                Some(path)
            }
            None => None,
        };

        let wordcloud = if self.config.wordcloud.enabled {
            let path = self.artifact_path(wordcloud_suffix);
            match self.write_wordcloud(report, &path) {
                Ok(()) => {
                    info!("wrote {}", path.display());
                    Some(path)
                }
                Err(e) => {
                    warn!("skipping word cloud: {e}");
                    None
                }
            }
        } else {
            None
        };

        let summary_json = self.artifact_path("summary.json");
        let document = SummaryDocument {
            generated_at: generated_at.to_rfc3339(),
            input: self.base_name.clone(),
            config: &self.config,
            report: report.summary(),
        };
        let file = File::create(&summary_json)?;
        serde_json::to_writer_pretty(BufWriter::new(file), &document)?;
        info!("wrote {}", summary_json.display());

        Ok(ArtifactPaths {
            frequency_csv,
            ngram_csv,
            wordcloud,
            summary_json,
        })
    }

    fn write_wordcloud(&self, report: &AnalysisReport, path: &Path) -> Result<()> {
        let words = report.words().top_n(self.config.wordcloud.max_words);
        let renderer = WordCloudRenderer::new(self.config.wordcloud.clone())?;
        renderer.save(&words, path)
    }
}
