//! Analyzers that combine tokenizers and filters.
//!
//! An analyzer is a complete text processing pipeline:
//!
//! ```text
//! Raw Text → Analyzer → Token Stream
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use sapling::analysis::analyzer::Analyzer;
//! use sapling::analysis::token::TokenStream;
//! use sapling::error::Result;
//!
//! struct NothingAnalyzer;
//!
//! impl Analyzer for NothingAnalyzer {
//!     fn analyze(&self, _text: &str) -> Result<TokenStream> {
//!         Ok(Box::new(std::iter::empty()))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "nothing"
//!     }
//! }
//! ```

pub mod frequency;
pub mod pipeline;

pub use frequency::FrequencyAnalyzer;
pub use pipeline::PipelineAnalyzer;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
