//! Integration tests for the text pipelines: tokens, tagging, entities,
//! lemmas and VADER sentiment

use sapling::analysis::{SentenceTokenizer, StopFilter, Tokenizer, WordTokenizer};
use sapling::chunk::extract_entities;
use sapling::config::SaplingConfig;
use sapling::lessons::{FrequencyReport, lemmatization, ner, sentiment, tokens, topics};
use sapling::prelude::*;
use sapling::sentiment::VaderLexicon;
use tempfile::TempDir;

#[test]
fn test_word_and_sentence_tokenizers() -> Result<()> {
    let words = WordTokenizer::new().words("\"I don't know,\" she said.");
    assert_eq!(
        words,
        vec!["``", "I", "do", "n't", "know", ",", "''", "she", "said", "."]
    );

    let sentences: Vec<String> = SentenceTokenizer::new()
        .tokenize(ner::DEFAULT_TEXT)?
        .map(|token| token.text)
        .collect();
    assert_eq!(
        sentences,
        vec![
            "Barack Obama was born in Hawaii.",
            "He was elected president of the USA."
        ]
    );
    Ok(())
}

#[test]
fn test_token_frequencies_of_default_paragraph() -> Result<()> {
    let report = tokens::run(tokens::DEFAULT_TEXT, &SaplingConfig::default())?;
    assert_eq!(report.top.len(), 20);
    assert!(report.top.iter().all(|(_, count)| *count == 1));

    let freq = tokens::distribution(tokens::DEFAULT_TEXT)?;
    assert_eq!(freq.get("ai"), 1);
    assert_eq!(freq.get("the"), 0);
    assert_eq!(freq.get("."), 0);
    assert!(freq.get("openai") == 1 && freq.get("2025") == 1);
    Ok(())
}

#[test]
fn test_custom_stop_words() -> Result<()> {
    let analyzer = FrequencyAnalyzer::with_stop_filter(StopFilter::from_words(["models"]));
    let texts: Vec<String> = analyzer
        .analyze("The models are new models.")?
        .map(|token| token.text)
        .collect();
    assert_eq!(texts, vec!["the", "are", "new"]);
    Ok(())
}

#[test]
fn test_topic_words() -> Result<()> {
    let report = topics::run(topics::DEFAULT_TEXT, &SaplingConfig::default())?;
    assert_eq!(
        report,
        FrequencyReport {
            top: vec![
                ("intelligence".to_string(), 1),
                ("machine".to_string(), 1),
                ("learning".to_string(), 1),
                ("industries".to_string(), 1),
            ]
        }
    );
    assert_eq!(
        report.to_string(),
        "[('intelligence', 1), ('machine', 1), ('learning', 1), ('industries', 1)]"
    );
    Ok(())
}

#[test]
fn test_entities_and_tags() -> Result<()> {
    let tagged = pos_tag(ner::DEFAULT_TEXT)?;
    let tags: Vec<&str> = tagged.iter().map(|token| token.tag.as_str()).collect();
    assert_eq!(
        tags,
        vec![
            "NNP", "NNP", "VBD", "VBN", "IN", "NNP", ".", "PRP", "VBD", "VBN", "NN", "IN", "DT",
            "NNP", "."
        ]
    );

    let tree = ne_chunk(&tagged)?;
    assert_eq!(
        extract_entities(&tree, &[EntityLabel::Person]),
        vec![("Barack Obama".to_string(), EntityLabel::Person)]
    );

    let report = ner::run(ner::DEFAULT_TEXT, &SaplingConfig::default())?;
    assert_eq!(report.entities.len(), 3);
    Ok(())
}

#[test]
fn test_lemmas() -> Result<()> {
    let report = lemmatization::run(lemmatization::DEFAULT_TEXT)?;
    assert_eq!(
        report.lemmas,
        vec!["The", "striped", "bat", "be", "hang", "on", "their", "foot", "for", "best", "."]
    );

    let lemmatizer = Lemmatizer::new();
    assert_eq!(lemmatizer.lemmatize("children", WordNetPos::Noun), "child");
    assert_eq!(lemmatizer.lemmatize("went", WordNetPos::Verb), "go");
    assert_eq!(lemmatizer.lemmatize("running", WordNetPos::Verb), "run");
    Ok(())
}

#[test]
fn test_vader_sentiment() -> Result<()> {
    let config = SaplingConfig::default();
    let report = sentiment::run(sentiment::DEFAULT_SENTENCE, &config)?;
    assert_eq!(report.label, SentimentLabel::Neutral);

    let analyzer = SentimentIntensityAnalyzer::new();
    assert_eq!(analyzer.polarity_scores("good").compound, 0.4404);

    let json = serde_json::to_value(&report)?;
    assert_eq!(json["label"], "Neutral");
    assert_eq!(json["scores"]["neu"], 1.0);
    Ok(())
}

#[test]
fn test_vader_lexicon_file() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vader_lexicon.txt");
    std::fs::write(
        &path,
        "ali\t2.0\t0.5\t[2, 2, 2, 2, 2, 2, 2, 2, 2, 2]\nname\t0.0\t0.0\t[0, 0, 0, 0, 0, 0, 0, 0, 0, 0]\n",
    )?;

    let lexicon = VaderLexicon::from_file(&path)?;
    assert_eq!(lexicon.len(), 2);

    let mut config = SaplingConfig::default();
    config.vader.lexicon_path = Some(path);
    let report = sentiment::run(sentiment::DEFAULT_SENTENCE, &config)?;
    assert_eq!(report.label, SentimentLabel::Positive);
    Ok(())
}
