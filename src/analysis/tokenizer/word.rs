//! Treebank-style word tokenizer.
//!
//! The text is first split into sentences, then each sentence is rewritten
//! by an ordered list of regex rules that pad punctuation and clitics with
//! spaces, and finally split on whitespace:
//!
//! - opening `"` becomes ``` `` ```, closing `"` becomes `''`
//! - `, ; : @ # $ % & ? ! ( ) [ ] { } < >`, `...` and `--` are split off
//! - commas followed by a digit (`1,000`) stay attached
//! - only the sentence-final period is split (`U.S.` and `3.14` survive)
//! - `n't 's 'm 'd 're 've 'll` are split, `cannot` becomes `can not`
//!
//! ```
//! use sapling::analysis::tokenizer::word::WordTokenizer;
//!
//! let words = WordTokenizer::new().words("They don't live in the U.S. anymore.");
//! assert_eq!(
//!     words,
//!     vec!["They", "do", "n't", "live", "in", "the", "U.S.", "anymore", "."]
//! );
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::Tokenizer;
use super::sentence::SentenceTokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Ordered rewrite rules: (pattern, replacement).
const RULES: &[(&str, &str)] = &[
    // starting quotes
    (r#"^\s*""#, " `` "),
    (r#"([ (\[{<])""#, "${1} `` "),
    (r"(``)", " ${1} "),
    // punctuation
    (r"\.\.\.", " ... "),
    (r"([:,])([^\d])", " ${1} ${2}"),
    (r"([:,])$", " ${1} "),
    (r"[;@#$%&]", " ${0} "),
    (r#"([^\.])(\.)([\]\)}>"']*)\s*$"#, "${1} ${2} ${3} "),
    (r"[?!]", " ${0} "),
    (r"([^'])' ", "${1} ' "),
    // brackets
    (r"[\]\[\(\)\{\}<>]", " ${0} "),
    (r"--", " -- "),
    // ending quotes
    (r#"""#, " '' "),
    (r"(\S)('')", "${1} ${2} "),
    (r"([^' ])('[sS]|'[mM]|'[dD]|') ", "${1} ${2} "),
    (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "${1} ${2} "),
    // contractions
    (r"(?i)\b(can)(not)\b", " ${1} ${2} "),
    (r"(?i)\b(gon)(na)\b", " ${1} ${2} "),
    (r"(?i)\b(got)(ta)\b", " ${1} ${2} "),
    (r"(?i)\b(wan)(na)\b", " ${1} ${2} "),
    (r"(?i)\b(gim)(me)\b", " ${1} ${2} "),
    (r"(?i)\b(lem)(me)\b", " ${1} ${2} "),
];

static COMPILED_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    RULES
        .iter()
        .map(|(pattern, replacement)| {
            (
                Regex::new(pattern).expect("treebank rule patterns are valid"),
                *replacement,
            )
        })
        .collect()
});

/// Splits text into words and punctuation, sentence by sentence.
#[derive(Clone, Debug, Default)]
pub struct WordTokenizer {
    sentences: SentenceTokenizer,
}

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Self {
        WordTokenizer {
            sentences: SentenceTokenizer::new(),
        }
    }

    /// Tokenize a single sentence into word strings.
    pub fn tokenize_sentence(&self, sentence: &str) -> Vec<String> {
        let mut text = format!(" {sentence} ");
        for (regex, replacement) in COMPILED_RULES.iter() {
            text = regex.replace_all(&text, *replacement).into_owned();
        }
        text.split_whitespace().map(str::to_string).collect()
    }

    /// Tokenize arbitrary text into word strings.
    pub fn words(&self, text: &str) -> Vec<String> {
        self.sentences
            .sentences(text)
            .into_iter()
            .flat_map(|sentence| self.tokenize_sentence(sentence))
            .collect()
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();

        for sentence in self.sentences.tokenize(text)? {
            let mut cursor = 0;
            for word in self.tokenize_sentence(&sentence.text) {
                let (start, end) = locate(&sentence.text, &word, cursor);
                cursor = end;
                tokens.push(Token::with_offsets(
                    word,
                    tokens.len(),
                    sentence.start_offset + start,
                    sentence.start_offset + end,
                ));
            }
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

/// Find the byte span of `word` in `sentence` at or after `cursor`.
/// Converted quotes are matched against the original `"`.
fn locate(sentence: &str, word: &str, cursor: usize) -> (usize, usize) {
    let rest = &sentence[cursor..];
    let needle = match word {
        "``" | "''" if !rest.contains(word) => "\"",
        _ => word,
    };
    match rest.find(needle) {
        Some(index) => (cursor + index, cursor + index + needle.len()),
        None => (cursor, cursor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_period_and_commas() {
        let words = WordTokenizer::new().words("Companies like OpenAI, Google, and Meta grew in 2025.");
        assert_eq!(
            words,
            vec![
                "Companies", "like", "OpenAI", ",", "Google", ",", "and", "Meta", "grew", "in",
                "2025", "."
            ]
        );
    }

    #[test]
    fn test_two_sentences() {
        let words = WordTokenizer::new()
            .words("Barack Obama was born in Hawaii. He was elected president of the USA.");
        assert_eq!(
            words,
            vec![
                "Barack", "Obama", "was", "born", "in", "Hawaii", ".", "He", "was", "elected",
                "president", "of", "the", "USA", "."
            ]
        );
    }

    #[test]
    fn test_title_abbreviation_kept_whole() {
        let words = WordTokenizer::new().words("Dr. Alan Turing was born in London.");
        assert_eq!(
            words,
            vec!["Dr.", "Alan", "Turing", "was", "born", "in", "London", "."]
        );
    }

    #[test]
    fn test_numbers_keep_inner_punctuation() {
        let words = WordTokenizer::new().words("It costs $1,000 or 3.14 units!");
        assert_eq!(
            words,
            vec!["It", "costs", "$", "1,000", "or", "3.14", "units", "!"]
        );
    }

    #[test]
    fn test_quotes_and_clitics() {
        let words = WordTokenizer::new().words("\"I can't go,\" she said.");
        assert_eq!(
            words,
            vec!["``", "I", "ca", "n't", "go", ",", "''", "she", "said", "."]
        );
    }

    #[test]
    fn test_cannot_and_brackets() {
        let words = WordTokenizer::new().words("We cannot (really) stop -- ever");
        assert_eq!(
            words,
            vec!["We", "can", "not", "(", "really", ")", "stop", "--", "ever"]
        );
    }

    #[test]
    fn test_offsets_point_into_text() {
        let text = "He said \"hi\". Then left.";
        let tokens: Vec<Token> = WordTokenizer::new().tokenize(text).unwrap().collect();

        for token in &tokens {
            let slice = &text[token.start_offset..token.end_offset];
            match token.text.as_str() {
                "``" | "''" => assert_eq!(slice, "\""),
                other => assert_eq!(slice, other),
            }
        }
        assert_eq!(tokens.last().unwrap().text, ".");
        assert_eq!(tokens.iter().map(|t| t.position).max(), Some(tokens.len() - 1));
    }

    #[test]
    fn test_empty_text() {
        assert!(WordTokenizer::new().words("").is_empty());
    }
}
