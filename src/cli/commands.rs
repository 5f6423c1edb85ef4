//! Command implementation for the bindo CLI.

use std::io::{self, Write};
use std::sync::Arc;

use log::info;

use crate::analysis::morph::MorphAnalyzer;
use crate::cli::args::BindoArgs;
use crate::cli::output::output_report;
use crate::config::AnalysisMode;
use crate::engine::AnalysisEngine;
use crate::error::Result;
use crate::export::ReportWriter;
use crate::input::read_text_file;

/// Execute an analysis run.
///
/// The configuration is validated before the input file is opened.
pub fn execute_command(args: BindoArgs) -> Result<()> {
    let config = args.to_config();
    config.validate()?;

    let morph = match config.mode {
        AnalysisMode::Morphological => Some(build_morph_analyzer(&args)?),
        AnalysisMode::RawText => None,
    };
    let engine = AnalysisEngine::new(config.clone(), morph)?;

    let text = read_text_file(&args.file_path)?;
    info!(
        "analyzing {} ({} characters) in {} mode",
        args.file_path.display(),
        text.chars().count(),
        config.mode.as_str()
    );
    let report = engine.run(&text)?;

    let writer = ReportWriter::new(config, &args.file_path)?;
    let artifacts = writer.write(&report)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output_report(&mut out, &report, &artifacts, &args)?;
    out.flush()?;

    Ok(())
}

/// Build the Korean morphological analyzer.
#[cfg(feature = "lindera")]
fn build_morph_analyzer(args: &BindoArgs) -> Result<Arc<dyn MorphAnalyzer>> {
    use crate::analysis::morph::lindera::{KO_DIC_URI, LinderaAnalyzer};

    let dict = args.dict.as_deref().unwrap_or(KO_DIC_URI);
    let analyzer = LinderaAnalyzer::new("normal", dict, args.user_dict.as_deref())?;
    info!("loaded morphological dictionary {dict}");

    Ok(Arc::new(analyzer))
}

/// Builds made with `--no-default-features` carry no dictionary, so only
/// raw-text mode is available.
#[cfg(not(feature = "lindera"))]
fn build_morph_analyzer(_args: &BindoArgs) -> Result<Arc<dyn MorphAnalyzer>> {
    Err(crate::error::BindoError::config(
        "this build has no morphological dictionary (built with \
         --no-default-features); rebuild with the default `lindera` feature or pass --raw_text",
    ))
}
