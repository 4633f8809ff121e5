//! Sentiment analysis.
//!
//! Two approaches live here:
//!
//! - [`vader`]: lexicon and rule based scoring of short texts, producing
//!   [`PolarityScores`] without any training.
//! - [`naive_bayes`]: a bag-of-words [`NaiveBayesClassifier`] trained on a
//!   labelled [`ReviewCorpus`].
//!
//! ```
//! use sapling::sentiment::{SentimentIntensityAnalyzer, SentimentLabel};
//!
//! let analyzer = SentimentIntensityAnalyzer::new();
//! let scores = analyzer.polarity_scores("good");
//! assert_eq!(scores.compound, 0.4404);
//! assert_eq!(SentimentLabel::from_compound(scores.compound, 0.05, -0.05), SentimentLabel::Positive);
//! ```

pub mod corpus;
pub mod features;
pub mod lexicon;
pub mod naive_bayes;
pub mod vader;

pub use corpus::ReviewCorpus;
pub use features::{FeatureSet, LabeledDocument, document_features};
pub use lexicon::VaderLexicon;
pub use naive_bayes::{InformativeFeature, NaiveBayesClassifier, accuracy};
pub use vader::{PolarityScores, SentimentIntensityAnalyzer};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse sentiment derived from a compound score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Classify a compound score. `compound >= positive` is positive,
    /// `compound <= negative` is negative, anything in between is neutral.
    pub fn from_compound(compound: f64, positive: f64, negative: f64) -> Self {
        if compound >= positive {
            SentimentLabel::Positive
        } else if compound <= negative {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_thresholds() {
        assert_eq!(
            SentimentLabel::from_compound(0.05, 0.05, -0.05),
            SentimentLabel::Positive
        );
        assert_eq!(
            SentimentLabel::from_compound(-0.05, 0.05, -0.05),
            SentimentLabel::Negative
        );
        assert_eq!(
            SentimentLabel::from_compound(0.0, 0.05, -0.05),
            SentimentLabel::Neutral
        );
        assert_eq!(
            SentimentLabel::from_compound(0.3, 0.5, -0.5),
            SentimentLabel::Neutral
        );
    }

    #[test]
    fn test_label_display() {
        assert_eq!(SentimentLabel::Negative.to_string(), "Negative");
        assert_eq!(
            serde_json::to_string(&SentimentLabel::Neutral).unwrap(),
            "\"Neutral\""
        );
    }
}
