use std::borrow::Cow;
use std::str::FromStr;

use lindera::dictionary::{load_dictionary, load_user_dictionary};
use lindera::mode::Mode;
use lindera::segmenter::Segmenter;

use crate::analysis::morph::{MorphAnalyzer, Morpheme};
use crate::error::{BindoError, Result};

/// Dictionary URI of the embedded mecab-ko-dic.
pub const KO_DIC_URI: &str = "embedded://ko-dic";

/// Tag reported when the dictionary has no part-of-speech detail.
pub const UNKNOWN_TAG: &str = "UNK";

/// Korean morphological analyzer backed by Lindera.
pub struct LinderaAnalyzer {
    inner: Segmenter,
}

impl LinderaAnalyzer {
    /// Create a new Lindera analyzer.
    pub fn new(mode_str: &str, dict_uri: &str, user_dict_uri: Option<&str>) -> Result<Self> {
        let mode = Mode::from_str(mode_str)
            .map_err(|e| BindoError::analysis(format!("Invalid mode '{}': {}", mode_str, e)))?;
        let dict = load_dictionary(dict_uri)
            .map_err(|e| BindoError::analysis(format!("Failed to load dictionary: {}", e)))?;
        let metadata = &dict.metadata;
        let user_dict = match user_dict_uri {
            Some(uri) => Some(load_user_dictionary(uri, metadata).map_err(|e| {
                BindoError::analysis(format!("Failed to load user dictionary: {}", e))
            })?),
            None => None,
        };
        let inner = Segmenter::new(mode, dict, user_dict);

        Ok(Self { inner })
    }

    /// Analyzer over the embedded ko-dic in normal mode.
    pub fn korean(user_dict_uri: Option<&str>) -> Result<Self> {
        Self::new("normal", KO_DIC_URI, user_dict_uri)
    }
}

impl MorphAnalyzer for LinderaAnalyzer {
    fn tag(&self, text: &str) -> Result<Vec<Morpheme>> {
        let tokens = self
            .inner
            .segment(Cow::Borrowed(text))
            .map_err(|e| BindoError::analysis(format!("Failed to segment text: {}", e)))?;

        let mut morphemes = Vec::with_capacity(tokens.len());
        for mut token in tokens {
            // ko-dic stores the part-of-speech tag as the first detail field
            let tag = token.get_detail(0).unwrap_or(UNKNOWN_TAG).to_string();
            morphemes.push(Morpheme::new(token.surface.as_ref(), tag));
        }

        Ok(morphemes)
    }

    fn name(&self) -> &'static str {
        "lindera"
    }
}
