//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, SaplingError};

/// Pattern that keeps runs of word characters and runs of punctuation apart.
pub const WORD_PUNCT_PATTERN: &str = r"\w+|[^\w\s]+";

/// A tokenizer that extracts tokens using a regular expression.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
    /// Whether to extract gaps (text between matches) instead of matches
    gaps: bool,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default pattern `\w+`.
    pub fn new() -> Result<Self> {
        Self::with_pattern(r"\w+")
    }

    /// Create a tokenizer that splits `"can't stop!"` into
    /// `can`, `'`, `t`, `stop`, `!`. Review corpora are read this way.
    pub fn word_punct() -> Result<Self> {
        Self::with_pattern(WORD_PUNCT_PATTERN)
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| SaplingError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
            gaps: false,
        })
    }

    /// Create a tokenizer that extracts gaps (text between matches) instead of matches.
    pub fn with_gaps(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| SaplingError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
            gaps: true,
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Check if this tokenizer extracts gaps.
    pub fn gaps(&self) -> bool {
        self.gaps
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = if self.gaps {
            let mut tokens = Vec::new();
            let mut last_end = 0;

            for mat in self.pattern.find_iter(text) {
                if mat.start() > last_end {
                    tokens.push(Token::with_offsets(
                        &text[last_end..mat.start()],
                        tokens.len(),
                        last_end,
                        mat.start(),
                    ));
                }
                last_end = mat.end();
            }

            if last_end < text.len() {
                tokens.push(Token::with_offsets(
                    &text[last_end..],
                    tokens.len(),
                    last_end,
                    text.len(),
                ));
            }

            tokens
        } else {
            self.pattern
                .find_iter(text)
                .enumerate()
                .map(|(position, mat)| {
                    Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
                })
                .collect()
        };

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_tokenizer() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("hello world").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 5);

        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 6);
        assert_eq!(tokens[1].end_offset, 11);
    }

    #[test]
    fn test_word_punct_tokenizer() {
        let tokenizer = RegexTokenizer::word_punct().unwrap();
        let tokens: Vec<String> = tokenizer
            .tokenize("it's a (truly) great film!!")
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(
            tokens,
            vec!["it", "'", "s", "a", "(", "truly", ")", "great", "film", "!!"]
        );
    }

    #[test]
    fn test_regex_tokenizer_with_gaps() {
        let tokenizer = RegexTokenizer::with_gaps(r"\s+").unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize(" hello  world").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(RegexTokenizer::with_pattern("(").is_err());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(RegexTokenizer::new().unwrap().name(), "regex");
    }
}
