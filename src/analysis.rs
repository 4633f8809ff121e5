//! Text analysis module for Sapling.
//!
//! This module provides tokenization, token filtering, analysis pipelines and
//! frequency counting. Taggers, lemmatizers and sentiment scorers all start
//! from the token streams produced here.

pub mod analyzer;
pub mod frequency;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use frequency::FrequencyDistribution;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
