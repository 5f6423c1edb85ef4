//! Error types for the Bindo library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`BindoError`] enum.
//!
//! # Examples
//!
//! ```
//! use bindo::error::{BindoError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(BindoError::config("ngram_size must be at least 1"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Bindo operations.
///
/// Uses `thiserror` for the `Error` implementation and offers constructor
/// helpers for the string-carrying variants.
#[derive(Error, Debug)]
pub enum BindoError {
    /// I/O errors (reading the corpus, writing artifacts)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid configuration, detected before any processing starts
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input bytes that neither UTF-8 nor the fallback encoding accept
    #[error("Decode error: {0}")]
    Decode(String),

    /// Analysis-related errors (tokenization, morphological tagging)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Word cloud rendering errors
    #[error("Render error: {0}")]
    Render(String),

    /// Artifact export errors
    #[error("Export error: {0}")]
    Export(String),

    /// CSV serialization errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with BindoError.
pub type Result<T> = std::result::Result<T, BindoError>;

impl BindoError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        BindoError::Config(msg.into())
    }

    /// Create a new decode error.
    pub fn decode<S: Into<String>>(msg: S) -> Self {
        BindoError::Decode(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        BindoError::Analysis(msg.into())
    }

    /// Create a new render error.
    pub fn render<S: Into<String>>(msg: S) -> Self {
        BindoError::Render(msg.into())
    }

    /// Create a new export error.
    pub fn export<S: Into<String>>(msg: S) -> Self {
        BindoError::Export(msg.into())
    }

    /// Whether this error was raised by configuration validation.
    pub fn is_config(&self) -> bool {
        matches!(self, BindoError::Config(_))
    }
}
