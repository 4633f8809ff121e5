//! Punctuation filter implementation.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// ASCII punctuation characters, in code point order.
pub const ASCII_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Drops tokens made only of punctuation.
///
/// A token is dropped when it occurs as a contiguous substring of
/// [`ASCII_PUNCTUATION`], so `.` and `,` go away and so do `()` and `{|}`,
/// while `...`, `--` and the quote tokens ``` `` ``` / `''` survive. Empty
/// tokens are dropped as well.
#[derive(Clone, Debug)]
pub struct PunctuationFilter {
    punctuation: String,
}

impl PunctuationFilter {
    /// Create a filter over [`ASCII_PUNCTUATION`].
    pub fn new() -> Self {
        Self::with_punctuation(ASCII_PUNCTUATION)
    }

    /// Create a filter over a custom punctuation string.
    pub fn with_punctuation<S: Into<String>>(punctuation: S) -> Self {
        PunctuationFilter {
            punctuation: punctuation.into(),
        }
    }

    /// Whether the filter would drop `text`.
    pub fn is_punctuation(&self, text: &str) -> bool {
        self.punctuation.contains(text)
    }
}

impl Default for PunctuationFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for PunctuationFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| token.is_stopped() || !self.is_punctuation(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}
