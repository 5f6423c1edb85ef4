//! Corpus loading.
//!
//! Korean corpora still circulate in CP949 (the Windows superset of
//! EUC-KR), so decoding tries UTF-8 first and falls back to CP949 before
//! giving up.

use std::fs;
use std::path::Path;

use encoding_rs::EUC_KR;
use log::{debug, warn};

use crate::error::{BindoError, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Read and decode a text file.
///
/// # Errors
///
/// Returns [`BindoError::Io`] if the file cannot be read and
/// [`BindoError::Decode`] if neither encoding accepts its bytes.
pub fn read_text_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    debug!("read {} bytes from {}", bytes.len(), path.display());

    decode_text(&bytes).map_err(|e| match e {
        BindoError::Decode(msg) => BindoError::decode(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}

/// Decode bytes as UTF-8, falling back to CP949.
///
/// A leading UTF-8 byte order mark is dropped.
pub fn decode_text(bytes: &[u8]) -> Result<String> {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    match std::str::from_utf8(body) {
        Ok(text) => Ok(text.to_string()),
        Err(utf8_error) => {
            warn!(
                "input is not valid UTF-8 ({}), retrying as CP949",
                utf8_error
            );
            EUC_KR
                .decode_without_bom_handling_and_without_replacement(body)
                .map(|text| text.into_owned())
                .ok_or_else(|| BindoError::decode("input is neither valid UTF-8 nor CP949"))
        }
    }
}
