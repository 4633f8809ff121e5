//! Word frequencies after stop word and punctuation removal.

use crate::analysis::{Analyzer, FrequencyAnalyzer, FrequencyDistribution};
use crate::config::SaplingConfig;
use crate::error::Result;

use super::FrequencyReport;

pub const DEFAULT_TEXT: &str = "
Artificial intelligence continues transforming industries in 2025.
Companies like OpenAI, Google, and Meta are releasing new models
that enhance productivity and reshape the global economy.
Governments in the United States and Europe are debating regulations
to ensure safe deployment of advanced AI systems.
";

/// Count every token [`FrequencyAnalyzer`] keeps.
pub fn distribution(text: &str) -> Result<FrequencyDistribution> {
    let freq: FrequencyDistribution = FrequencyAnalyzer::new()
        .analyze(text)?
        .map(|token| token.text)
        .collect();
    log::debug!("{} distinct tokens, {} total", freq.len(), freq.total());
    Ok(freq)
}

pub fn run(text: &str, config: &SaplingConfig) -> Result<FrequencyReport> {
    Ok(FrequencyReport {
        top: distribution(text)?.most_common(config.frequency.top_n),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_filter::stop::ENGLISH_STOP_WORDS;

    #[test]
    fn test_default_text() {
        let freq = distribution(DEFAULT_TEXT).unwrap();
        assert!(freq.iter().all(|(_, count)| count == 1));
        assert_eq!(freq.get("ai"), 1);
        assert_eq!(freq.max_count(), Some(1));

        let report = run(DEFAULT_TEXT, &SaplingConfig::default()).unwrap();
        assert_eq!(report.top.len(), 20);
        assert_eq!(report.top[0], ("artificial".to_string(), 1));
        assert_eq!(report.top[1], ("intelligence".to_string(), 1));

        let first_seen: Vec<String> = freq.iter().take(20).map(|(w, _)| w.to_string()).collect();
        let ranked: Vec<String> = report.top.into_iter().map(|(w, _)| w).collect();
        assert_eq!(ranked, first_seen);
    }

    #[test]
    fn test_no_stopwords_or_punctuation() {
        let freq = distribution(DEFAULT_TEXT).unwrap();
        for (word, _) in freq.iter() {
            assert!(!ENGLISH_STOP_WORDS.contains(&word), "{word}");
            assert!(word.chars().any(char::is_alphanumeric), "{word}");
        }
    }

    #[test]
    fn test_top_n() {
        let mut config = SaplingConfig::default();
        config.frequency.top_n = 3;
        let report = run("b a b c a b", &config).unwrap();
        assert_eq!(
            report.top,
            vec![
                ("b".to_string(), 3),
                ("c".to_string(), 1),
            ]
        );
    }
}
