use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{LowercaseFilter, PunctuationFilter, StopFilter};
use crate::analysis::tokenizer::WordTokenizer;
use crate::error::Result;

/// Word tokenization, lowercasing, English stop words and punctuation
/// removal: the token stream used for word-frequency counts.
pub struct FrequencyAnalyzer {
    inner: PipelineAnalyzer,
}

impl FrequencyAnalyzer {
    pub fn new() -> Self {
        Self::with_stop_filter(StopFilter::new())
    }

    pub fn with_stop_filter(stop_filter: StopFilter) -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(WordTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(stop_filter))
            .add_filter(Arc::new(PunctuationFilter::new()))
            .with_name("frequency");

        Self { inner: analyzer }
    }
}

impl Default for FrequencyAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for FrequencyAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "frequency"
    }
}

impl Debug for FrequencyAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrequencyAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_frequency_analyzer() {
        let analyzer = FrequencyAnalyzer::new();

        let tokens: Vec<Token> = analyzer
            .analyze("The AI systems are safe, and AI is here.")
            .unwrap()
            .collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["ai", "systems", "safe", "ai"]);
    }

    #[test]
    fn test_frequency_analyzer_name() {
        assert_eq!(FrequencyAnalyzer::new().name(), "frequency");
    }
}
