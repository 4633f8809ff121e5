//! Stop filter implementation.
//!
//! Removes common words (stop words) that carry little meaning on their own.
//! The default list is the 179-word English list used by the classic NLP
//! toolkits, including the fragments (`s`, `t`, `ll`, `don`)
//! that word tokenization produces.
//!
//! ```
//! use sapling::analysis::token_filter::Filter;
//! use sapling::analysis::token_filter::stop::StopFilter;
//! use sapling::analysis::token::Token;
//!
//! let filter = StopFilter::new();
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("global", 1),
//!     Token::new("economy", 2)
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "global");
//! ```

use std::sync::{Arc, LazyLock};

use ahash::AHashSet;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default English stop words list.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Default English stop words as a set.
pub static ENGLISH_STOP_WORDS_SET: LazyLock<AHashSet<String>> = LazyLock::new(|| {
    ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes stop words from the token stream.
///
/// Matching is exact, so lowercase the stream first when the input may be
/// capitalized. Stop words can be removed entirely or only marked as
/// stopped while kept in the stream.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<AHashSet<String>>,
    /// Whether to remove stopped tokens entirely or just mark them as stopped
    remove_stopped: bool,
}

impl StopFilter {
    /// Create a new stop filter with the default English stop words.
    pub fn new() -> Self {
        Self::with_stop_words(ENGLISH_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: AHashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
            remove_stopped: true,
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Set whether to remove stopped tokens entirely or just mark them as stopped.
    pub fn remove_stopped(mut self, remove: bool) -> Self {
        self.remove_stopped = remove;
        self
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter_map(|token| {
                if token.is_stopped() {
                    Some(token)
                } else if self.is_stop_word(&token.text) {
                    if self.remove_stopped {
                        None
                    } else {
                        Some(token.stop())
                    }
                } else {
                    Some(token)
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_list() {
        let filter = StopFilter::new();
        assert_eq!(filter.len(), 179);
        assert!(filter.is_stop_word("the"));
        assert!(filter.is_stop_word("don't"));
        assert!(filter.is_stop_word("s"));
        assert!(!filter.is_stop_word("ai"));
        assert!(!filter.is_stop_word("The"));
    }

    #[test]
    fn test_stop_filter() {
        let filter = StopFilter::from_words(vec!["the", "and", "or"]);
        let tokens = vec![
            Token::new("hello", 0),
            Token::new("the", 1),
            Token::new("world", 2),
            Token::new("and", 3),
            Token::new("test", 4),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
        assert_eq!(result[2].text, "test");
    }

    #[test]
    fn test_stop_filter_preserve_stopped() {
        let filter = StopFilter::from_words(vec!["the", "and"]).remove_stopped(false);
        let tokens = vec![
            Token::new("hello", 0),
            Token::new("the", 1),
            Token::new("world", 2),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert!(!result[0].is_stopped());
        assert!(result[1].is_stopped());
        assert!(!result[2].is_stopped());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::new().name(), "stop");
    }
}
