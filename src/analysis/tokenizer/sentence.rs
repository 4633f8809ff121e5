//! Sentence tokenizer built on Unicode sentence boundaries (UAX #29).

use std::sync::LazyLock;

use ahash::AHashSet;
use unicode_segmentation::UnicodeSegmentation;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Splits text into sentences. Each token is one trimmed sentence whose
/// offsets point back into the original text.
#[derive(Clone, Debug, Default)]
pub struct SentenceTokenizer;

impl SentenceTokenizer {
    /// Create a new sentence tokenizer.
    pub fn new() -> Self {
        SentenceTokenizer
    }

    /// Convenience wrapper returning the sentence strings.
    pub fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        Self::spans(text)
            .into_iter()
            .map(|(start, end)| &text[start..end])
            .collect()
    }

    /// Byte spans of the trimmed sentences.
    ///
    /// UAX #29 also breaks at bare line feeds and after abbreviations such as
    /// `Dr.`; a segment that does not end a sentence is joined with the next
    /// one.
    fn spans(text: &str) -> Vec<(usize, usize)> {
        let mut spans = Vec::new();
        let mut pending: Option<(usize, usize)> = None;

        for (start, segment) in text.split_sentence_bound_indices() {
            let trimmed = segment.trim();
            if trimmed.is_empty() {
                continue;
            }
            let begin = start + (segment.len() - segment.trim_start().len());
            let end = begin + trimmed.len();

            let span = match pending.take() {
                Some((first, _)) => (first, end),
                None => (begin, end),
            };

            if ends_sentence(trimmed) {
                spans.push(span);
            } else {
                pending = Some(span);
            }
        }

        spans.extend(pending);
        spans
    }
}

/// Abbreviations whose period does not end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "st", "vs", "etc", "inc", "jr", "sr",
];

static ABBREVIATION_SET: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| ABBREVIATIONS.iter().copied().collect());

fn ends_sentence(segment: &str) -> bool {
    let segment = segment.trim_end_matches(['"', '\'', ')', ']', '}']);
    if let Some(body) = segment.strip_suffix('.') {
        let last_word = body
            .rsplit(|c: char| c.is_whitespace() || c == '(')
            .next()
            .unwrap_or_default();
        return !ABBREVIATION_SET.contains(last_word.to_lowercase().as_str());
    }
    segment.ends_with(['!', '?'])
}

impl Tokenizer for SentenceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = Self::spans(text)
            .into_iter()
            .enumerate()
            .map(|(position, (start, end))| {
                Token::with_offsets(&text[start..end], position, start, end)
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "sentence"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_sentences() {
        let text = "Barack Obama was born in Hawaii. He was elected president of the USA.";
        let tokens: Vec<Token> = SentenceTokenizer::new().tokenize(text).unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "Barack Obama was born in Hawaii.");
        assert_eq!(tokens[1].text, "He was elected president of the USA.");
        assert_eq!(&text[tokens[1].start_offset..tokens[1].end_offset], tokens[1].text);
    }

    #[test]
    fn test_blank_text() {
        let tokenizer = SentenceTokenizer::new();
        assert_eq!(tokenizer.tokenize("  \n ").unwrap().count(), 0);
        assert!(tokenizer.sentences("").is_empty());
    }

    #[test]
    fn test_abbreviations_do_not_end_sentences() {
        let text = "Dr. Alan Turing met Mr. Smith. They talked.";
        let sentences = SentenceTokenizer::new().sentences(text);

        assert_eq!(sentences, vec!["Dr. Alan Turing met Mr. Smith.", "They talked."]);
        assert!(ends_sentence("in the U.S."));
        assert!(!ends_sentence("Mrs."));
    }

    #[test]
    fn test_newlines_inside_paragraph() {
        let text = "\nAI is here.\nCompanies like Google are\nreleasing models.\n";
        let sentences = SentenceTokenizer::new().sentences(text);

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "AI is here.");
        assert!(sentences[1].starts_with("Companies"));
        assert!(sentences[1].ends_with("models."));
    }
}
