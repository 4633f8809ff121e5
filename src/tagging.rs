//! Part-of-speech tagging.
//!
//! A [`Tagger`] assigns a Penn Treebank [`PosTag`] to every word of a
//! tokenized sentence. The default implementation is [`RuleTagger`].
//!
//! ```
//! use sapling::tagging::{pos_tag, PosTag};
//!
//! let tagged = pos_tag("The striped bats are hanging.").unwrap();
//! assert_eq!(tagged[2].word, "bats");
//! assert_eq!(tagged[2].tag, PosTag::Nns);
//! ```

pub mod lexicon;
pub mod rule;
pub mod tag;

pub use rule::RuleTagger;
pub use tag::PosTag;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::WordTokenizer;
use crate::error::Result;

/// A word together with its part-of-speech tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub word: String,
    pub tag: PosTag,
}

impl TaggedToken {
    pub fn new<S: Into<String>>(word: S, tag: PosTag) -> Self {
        TaggedToken {
            word: word.into(),
            tag,
        }
    }
}

impl fmt::Display for TaggedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.word, self.tag)
    }
}

/// Trait for part-of-speech taggers.
pub trait Tagger: Send + Sync {
    /// Tag a sequence of words. The output has one entry per input word.
    fn tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>>;

    /// Get the name of this tagger (for debugging and logging).
    fn name(&self) -> &'static str;
}

/// Word-tokenize `text` and tag it with the default [`RuleTagger`].
pub fn pos_tag(text: &str) -> Result<Vec<TaggedToken>> {
    let words = WordTokenizer::new().words(text);
    RuleTagger::new().tag(&words)
}
