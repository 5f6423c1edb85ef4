//! Morphological analyzer boundary.
//!
//! Morphological tagging is delegated: anything that maps cleaned text to an
//! ordered list of `(surface, tag)` pairs can drive the morphological
//! pipeline. Closures qualify through a blanket implementation, which keeps
//! tests and alternative taggers free of boilerplate.
//!
//! The Lindera-backed Korean analyzer lives in [`lindera`] and is compiled
//! with the `lindera` cargo feature.
//!
//! # Examples
//!
//! ```
//! use bindo::analysis::morph::{MorphAnalyzer, Morpheme};
//! use bindo::error::Result;
//!
//! let tagger = |text: &str| -> Result<Vec<Morpheme>> {
//!     Ok(text
//!         .split_whitespace()
//!         .map(|word| Morpheme::new(word, "NNG"))
//!         .collect())
//! };
//!
//! let morphemes = tagger.tag("가을 하늘").unwrap();
//! assert_eq!(morphemes[1], Morpheme::new("하늘", "NNG"));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[cfg(feature = "lindera")]
pub mod lindera;

/// A surface form paired with its grammatical category.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Morpheme {
    /// Surface form as it appears in the text
    pub surface: String,

    /// Part-of-speech tag, e.g. `NNG` or `VV` in the ko-dic tag set
    pub tag: String,
}

impl Morpheme {
    /// Create a new morpheme.
    pub fn new<S: Into<String>, T: Into<String>>(surface: S, tag: T) -> Self {
        Morpheme {
            surface: surface.into(),
            tag: tag.into(),
        }
    }
}

/// Trait for morphological analyzers.
///
/// An analyzer is built once per run and handed to the pipeline explicitly.
pub trait MorphAnalyzer: Send + Sync {
    /// Tag the given text, preserving the order of the morphemes.
    fn tag(&self, text: &str) -> Result<Vec<Morpheme>>;

    /// Get the name of this analyzer.
    fn name(&self) -> &'static str {
        "morph"
    }
}

impl<F> MorphAnalyzer for F
where
    F: Fn(&str) -> Result<Vec<Morpheme>> + Send + Sync,
{
    fn tag(&self, text: &str) -> Result<Vec<Morpheme>> {
        self(text)
    }

    fn name(&self) -> &'static str {
        "fn"
    }
}
