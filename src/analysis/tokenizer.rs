//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step in the analysis pipeline, responsible for
//! splitting input text into tokens.
//!
//! # Available Tokenizers
//!
//! - [`regex::RegexTokenizer`] - Pattern-based extraction (`\w+`, word-punct)
//! - [`sentence::SentenceTokenizer`] - Sentence boundaries (UAX #29)
//! - [`word::WordTokenizer`] - Treebank-style words, punctuation and clitics
//!
//! # Examples
//!
//! ```
//! use sapling::analysis::tokenizer::Tokenizer;
//! use sapling::analysis::tokenizer::word::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world.").unwrap().collect();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[2].text, ".");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared by the
/// parallel corpus loader.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod regex;
pub mod sentence;
pub mod word;

// Re-export all tokenizers for convenient access
pub use regex::RegexTokenizer;
pub use sentence::SentenceTokenizer;
pub use word::WordTokenizer;
