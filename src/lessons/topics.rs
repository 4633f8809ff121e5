//! Topic words: the most frequent nouns of a text.

use crate::analysis::FrequencyDistribution;
use crate::config::SaplingConfig;
use crate::error::Result;
use crate::tagging::pos_tag;

use super::FrequencyReport;

pub const DEFAULT_TEXT: &str =
    "Artificial intelligence and machine learning are transforming industries worldwide.";

pub fn run(text: &str, config: &SaplingConfig) -> Result<FrequencyReport> {
    let freq: FrequencyDistribution = pos_tag(text)?
        .into_iter()
        .filter(|token| token.tag.is_noun())
        .map(|token| token.word)
        .collect();

    Ok(FrequencyReport {
        top: freq.most_common(config.topics.top_n),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_text() {
        let report = run(DEFAULT_TEXT, &SaplingConfig::default()).unwrap();
        assert_eq!(
            report.top,
            vec![
                ("intelligence".to_string(), 1),
                ("machine".to_string(), 1),
                ("learning".to_string(), 1),
                ("industries".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_repeated_nouns_rank_first() {
        let report = run(
            "The model beat the baseline. The model was fast.",
            &SaplingConfig::default(),
        )
        .unwrap();
        assert_eq!(report.top[0], ("model".to_string(), 2));
    }
}
