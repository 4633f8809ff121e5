//! Pipeline analyzer that combines a tokenizer with a chain of filters.
//!
//! ```
//! use sapling::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use sapling::analysis::tokenizer::RegexTokenizer;
//! use sapling::analysis::token_filter::{LowercaseFilter, StopFilter};
//! use std::sync::Arc;
//!
//! let tokenizer = Arc::new(RegexTokenizer::new().unwrap());
//! let analyzer = PipelineAnalyzer::new(tokenizer)
//!     .add_filter(Arc::new(LowercaseFilter::new()))
//!     .add_filter(Arc::new(StopFilter::from_words(vec!["the", "and"])));
//!
//! let tokens: Vec<_> = analyzer.analyze("Hello THE world AND test").unwrap().collect();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "hello");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable analyzer: one tokenizer, then filters in insertion order.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// The configured name (the trait's `name` is static).
    pub fn label(&self) -> &str {
        &self.name
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;
    use crate::analysis::token_filter::{LowercaseFilter, PunctuationFilter, StopFilter};
    use crate::analysis::tokenizer::{RegexTokenizer, WordTokenizer};

    #[test]
    fn test_pipeline_analyzer() {
        let tokenizer = Arc::new(RegexTokenizer::new().unwrap());
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::from_words(vec!["the", "and"])));

        let tokens: Vec<Token> = analyzer
            .analyze("Hello THE world AND test")
            .unwrap()
            .collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "test");
    }

    #[test]
    fn test_filter_order_matters() {
        // Stop words are matched before lowercasing, so "The" survives.
        let analyzer = PipelineAnalyzer::new(Arc::new(WordTokenizer::new()))
            .add_filter(Arc::new(StopFilter::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(PunctuationFilter::new()));

        let tokens: Vec<String> = analyzer
            .analyze("The bats hang.")
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(tokens, vec!["the", "bats", "hang"]);
    }

    #[test]
    fn test_debug_lists_stages() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WordTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("custom");

        let debug = format!("{analyzer:?}");
        assert!(debug.contains("custom"));
        assert!(debug.contains("word"));
        assert!(debug.contains("lowercase"));
        assert_eq!(analyzer.label(), "custom");
    }
}
