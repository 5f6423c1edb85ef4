//! Output formatting for the console listing.

use std::io::Write;

use serde::Serialize;

use crate::cli::args::{BindoArgs, OutputFormat};
use crate::config::AnalysisMode;
use crate::engine::{AnalysisReport, ReportSummary};
use crate::error::Result;
use crate::export::ArtifactPaths;

/// Everything printed for one run in JSON format.
#[derive(Debug, Serialize)]
pub struct RunOutput<'a> {
    #[serde(flatten)]
    pub summary: ReportSummary,
    pub artifacts: &'a ArtifactPaths,
}

/// Print the report in the selected format.
pub fn output_report<W: Write>(
    out: &mut W,
    report: &AnalysisReport,
    artifacts: &ArtifactPaths,
    args: &BindoArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(out, report, artifacts, args),
        OutputFormat::Json => output_json(
            out,
            &RunOutput {
                summary: report.summary(),
                artifacts,
            },
            args,
        ),
    }
}

/// Output in human-readable format.
fn output_human<W: Write>(
    out: &mut W,
    report: &AnalysisReport,
    artifacts: &ArtifactPaths,
    args: &BindoArgs,
) -> Result<()> {
    let title = match report.mode() {
        AnalysisMode::Morphological => "Top words",
        AnalysisMode::RawText => "Top raw text units",
    };
    writeln!(out, "{title}:")?;
    write_ranked(out, &report.top_words())?;

    if let Some(phrases) = report.phrases() {
        writeln!(out)?;
        writeln!(
            out,
            "Top {}-gram phrases (count >= {}):",
            phrases.ngram_size(),
            phrases.min_count()
        )?;
        write_ranked(out, &report.top_phrases())?;
    }

    if args.verbosity() > 1 {
        writeln!(out)?;
        writeln!(
            out,
            "Counted {} tokens, {} distinct",
            report.total_tokens(),
            report.words().len()
        )?;
        writeln!(out, "Artifacts:")?;
        writeln!(out, "  {}", artifacts.frequency_csv.display())?;
        if let Some(path) = &artifacts.ngram_csv {
            writeln!(out, "  {}", path.display())?;
        }
        if let Some(path) = &artifacts.wordcloud {
            writeln!(out, "  {}", path.display())?;
        }
        writeln!(out, "  {}", artifacts.summary_json.display())?;
    }

    Ok(())
}

fn write_ranked<W: Write>(out: &mut W, ranked: &[(String, usize)]) -> Result<()> {
    if ranked.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for (token, count) in ranked {
        writeln!(out, "{token}: {count}")?;
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<W: Write, T: Serialize>(out: &mut W, result: &T, args: &BindoArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}
