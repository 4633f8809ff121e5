//! POS-aware lemmatization.
//!
//! ```
//! use sapling::lemmatize::{Lemmatizer, WordNetPos};
//!
//! let lemmatizer = Lemmatizer::new();
//! assert_eq!(lemmatizer.lemmatize("bats", WordNetPos::Noun), "bat");
//! assert_eq!(lemmatizer.lemmatize("are", WordNetPos::Verb), "be");
//! assert_eq!(lemmatizer.lemmatize("hanging", WordNetPos::Verb), "hang");
//! ```

pub mod morphy;
pub mod tables;

pub use morphy::Lemmatizer;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tagging::{PosTag, TaggedToken};

/// The four word classes the lemmatizer distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordNetPos {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl WordNetPos {
    /// Map a treebank tag to a word class. Adjective tags start with `J`,
    /// verbs with `V`, nouns with `N`, adverbs with `R`; everything else is
    /// treated as a noun.
    pub fn from_tag(tag: PosTag) -> Self {
        Self::from_tag_str(tag.as_str())
    }

    /// Same as [`from_tag`](Self::from_tag) for a raw tag string.
    pub fn from_tag_str(tag: &str) -> Self {
        if tag.starts_with('J') {
            WordNetPos::Adjective
        } else if tag.starts_with('V') {
            WordNetPos::Verb
        } else if tag.starts_with('N') {
            WordNetPos::Noun
        } else if tag.starts_with('R') {
            WordNetPos::Adverb
        } else {
            WordNetPos::Noun
        }
    }

    /// The single-letter code used by WordNet (`n`, `v`, `a`, `r`).
    pub fn code(&self) -> char {
        match self {
            WordNetPos::Noun => 'n',
            WordNetPos::Verb => 'v',
            WordNetPos::Adjective => 'a',
            WordNetPos::Adverb => 'r',
        }
    }
}

impl fmt::Display for WordNetPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Lemmatize every tagged token with the word class derived from its tag.
pub fn lemmatize_tagged(lemmatizer: &Lemmatizer, tokens: &[TaggedToken]) -> Vec<String> {
    tokens
        .iter()
        .map(|token| lemmatizer.lemmatize(&token.word, WordNetPos::from_tag(token.tag)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(WordNetPos::from_tag(PosTag::Jjs), WordNetPos::Adjective);
        assert_eq!(WordNetPos::from_tag(PosTag::Vbg), WordNetPos::Verb);
        assert_eq!(WordNetPos::from_tag(PosTag::Nns), WordNetPos::Noun);
        assert_eq!(WordNetPos::from_tag(PosTag::Rb), WordNetPos::Adverb);
        assert_eq!(WordNetPos::from_tag(PosTag::Dt), WordNetPos::Noun);
        assert_eq!(WordNetPos::from_tag(PosTag::PrpPossessive), WordNetPos::Noun);
        assert_eq!(WordNetPos::from_tag(PosTag::Period), WordNetPos::Noun);
    }

    #[test]
    fn test_from_tag_str() {
        assert_eq!(WordNetPos::from_tag_str("JJR"), WordNetPos::Adjective);
        assert_eq!(WordNetPos::from_tag_str("WRB"), WordNetPos::Noun);
        assert_eq!(WordNetPos::from_tag_str(""), WordNetPos::Noun);
    }

    #[test]
    fn test_lemmatize_tagged() {
        let tokens = vec![
            TaggedToken::new("The", PosTag::Dt),
            TaggedToken::new("striped", PosTag::Jj),
            TaggedToken::new("bats", PosTag::Nns),
            TaggedToken::new("are", PosTag::Vbp),
            TaggedToken::new("hanging", PosTag::Vbg),
            TaggedToken::new("on", PosTag::In),
            TaggedToken::new("their", PosTag::PrpPossessive),
            TaggedToken::new("feet", PosTag::Nns),
            TaggedToken::new("for", PosTag::In),
            TaggedToken::new("best", PosTag::Jjs),
            TaggedToken::new(".", PosTag::Period),
        ];

        assert_eq!(
            lemmatize_tagged(&Lemmatizer::new(), &tokens),
            vec![
                "The", "striped", "bat", "be", "hang", "on", "their", "foot", "for", "best", "."
            ]
        );
    }
}
