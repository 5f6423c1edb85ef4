//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows from a tokenizer through the token
//! filters and finally into a frequency table. Morphological tokenizers
//! attach the part-of-speech tag reported by the analyzer; whitespace
//! tokenization leaves it empty.
//!
//! # Examples
//!
//! ```
//! use bindo::analysis::token::Token;
//!
//! let token = Token::new("하늘").with_tag("NNG");
//! assert_eq!(token.text, "하늘");
//! assert_eq!(token.char_len(), 2);
//! assert_eq!(token.tag(), Some("NNG"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// Part-of-speech tag assigned by a morphological analyzer
    pub tag: Option<String>,
}

impl Token {
    /// Create a new untagged token.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Token {
            text: text.into(),
            tag: None,
        }
    }

    /// Attach a part-of-speech tag.
    pub fn with_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Get the part-of-speech tag, if any.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Length of the token text in characters.
    ///
    /// Length filters count characters, not bytes: a Hangul syllable is
    /// one character but three UTF-8 bytes.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "{}/{}", self.text, tag),
            None => write!(f, "{}", self.text),
        }
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
