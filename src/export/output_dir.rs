//! Output directory resolution.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::Result;

/// Suffix appended to the input file stem for the default directory.
pub const RESULTS_DIR_SUFFIX: &str = "_results";

/// Default artifact directory for an input file: `<stem>_results`, relative
/// to the working directory.
pub fn default_output_dir(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "input".to_string());
    PathBuf::from(format!("{stem}{RESULTS_DIR_SUFFIX}"))
}

/// Pick the artifact directory and create it if missing.
pub fn resolve_output_dir(input: &Path, override_dir: Option<&Path>) -> Result<PathBuf> {
    let dir = match override_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_output_dir(input),
    };

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
        info!("created output directory {}", dir.display());
    }

    Ok(dir)
}
