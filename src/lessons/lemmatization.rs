//! POS-aware lemmatization of a sentence.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::quoted_list;
use crate::error::Result;
use crate::lemmatize::{Lemmatizer, lemmatize_tagged};
use crate::tagging::pos_tag;

pub const DEFAULT_TEXT: &str = "The striped bats are hanging on their feet for best.";

/// One lemma per token, punctuation included.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LemmaReport {
    pub lemmas: Vec<String>,
}

impl fmt::Display for LemmaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&quoted_list(&self.lemmas))
    }
}

pub fn run(text: &str) -> Result<LemmaReport> {
    let tagged = pos_tag(text)?;
    let lemmas = lemmatize_tagged(&Lemmatizer::new(), &tagged);
    Ok(LemmaReport { lemmas })
}
