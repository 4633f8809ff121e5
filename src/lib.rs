//! # Sapling
//!
//! Classic machine learning and natural language processing pipelines for
//! Rust.
//!
//! ## Features
//!
//! - Tokenization, stop word filtering and frequency counting
//! - Rule-based part-of-speech tagging and named-entity chunking
//! - POS-aware lemmatization
//! - VADER sentiment scoring and a trainable bag-of-words naive Bayes
//! - Ordinal encoding, CART decision trees and categorical naive Bayes
//! - Ready-made pipelines in [`lessons`] with a CLI on top

pub mod analysis;
pub mod chunk;
pub mod cli;
pub mod config;
pub mod error;
pub mod lemmatize;
pub mod lessons;
pub mod ml;
pub mod sentiment;
pub mod tagging;

pub mod prelude {
    pub use crate::analysis::{Analyzer, FrequencyAnalyzer, FrequencyDistribution};
    pub use crate::chunk::{EntityLabel, ne_chunk};
    pub use crate::config::SaplingConfig;
    pub use crate::error::{Result, SaplingError};
    pub use crate::lemmatize::{Lemmatizer, WordNetPos};
    pub use crate::ml::{CategoricalNb, Classifier, DecisionTreeClassifier};
    pub use crate::sentiment::{NaiveBayesClassifier, SentimentIntensityAnalyzer, SentimentLabel};
    pub use crate::tagging::{PosTag, Tagger, pos_tag};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
