//! Lexicon-based sentiment of one sentence.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SaplingConfig;
use crate::error::Result;
use crate::sentiment::{PolarityScores, SentimentIntensityAnalyzer, SentimentLabel, VaderLexicon};

pub const DEFAULT_SENTENCE: &str = "My name is Ali.";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    pub sentence: String,
    pub scores: PolarityScores,
    pub label: SentimentLabel,
}

impl fmt::Display for SentimentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sentence: {}", self.sentence)?;
        write!(f, "Predicted Sentiment: {}", self.label)
    }
}

/// Build an analyzer from `config`: the built-in lexicon, or the file named
/// by `vader.lexicon_path`.
pub fn analyzer(config: &SaplingConfig) -> Result<SentimentIntensityAnalyzer> {
    Ok(match &config.vader.lexicon_path {
        Some(path) => SentimentIntensityAnalyzer::with_lexicon(VaderLexicon::from_file(path)?),
        None => SentimentIntensityAnalyzer::new(),
    })
}

pub fn run(sentence: &str, config: &SaplingConfig) -> Result<SentimentReport> {
    let scores = analyzer(config)?.polarity_scores(sentence);
    let label = SentimentLabel::from_compound(
        scores.compound,
        config.vader.positive_threshold,
        config.vader.negative_threshold,
    );
    log::debug!("{scores}");

    Ok(SentimentReport {
        sentence: sentence.to_string(),
        scores,
        label,
    })
}
