//! Part-of-speech filter implementation.
//!
//! Keeps the content words of a tagged token stream. The default prefixes
//! select nouns (`N*`), predicates (`V*`) and roots (`XR`) of the ko-dic tag
//! set; untagged tokens never pass.

use super::Filter;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Tag prefixes of nouns, predicates and roots.
pub const CONTENT_TAG_PREFIXES: &[&str] = &["N", "V", "XR"];

/// A filter that keeps tokens whose tag starts with one of a set of prefixes.
#[derive(Clone, Debug)]
pub struct PosFilter {
    prefixes: Vec<String>,
}

impl PosFilter {
    /// Create a filter with custom tag prefixes.
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PosFilter {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a filter for nouns, predicates and roots.
    pub fn content_words() -> Self {
        Self::new(CONTENT_TAG_PREFIXES.iter().copied())
    }

    /// Get the accepted tag prefixes.
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Whether the given tag starts with an accepted prefix.
    pub fn accepts(&self, tag: &str) -> bool {
        self.prefixes.iter().any(|prefix| tag.starts_with(prefix.as_str()))
    }
}

impl Default for PosFilter {
    fn default() -> Self {
        Self::content_words()
    }
}

impl Filter for PosFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| token.tag().is_some_and(|tag| self.accepts(tag)))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "pos"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_words() {
        let filter = PosFilter::content_words();
        let tokens = vec![
            Token::new("하늘").with_tag("NNG"),
            Token::new("이").with_tag("JKS"),
            Token::new("높").with_tag("VA"),
            Token::new("고").with_tag("EC"),
            Token::new("공활").with_tag("XR"),
            Token::new("하").with_tag("XSA"),
            Token::new("raw"),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
        let texts: Vec<&str> = result.iter().map(|t| t.text.as_str()).collect();

        assert_eq!(texts, vec!["하늘", "높", "공활"]);
    }

    #[test]
    fn test_prefix_matching() {
        let filter = PosFilter::content_words();
        assert!(filter.accepts("NNP"));
        assert!(filter.accepts("VV+EP"));
        assert!(filter.accepts("XR"));
        assert!(!filter.accepts("XSN"));
        assert!(!filter.accepts("SF"));
    }

    #[test]
    fn test_custom_prefixes() {
        let filter = PosFilter::new(["Noun"]);
        assert!(filter.accepts("Noun"));
        assert!(!filter.accepts("Verb"));
        assert_eq!(filter.prefixes(), &["Noun".to_string()]);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(PosFilter::default().name(), "pos");
    }
}
