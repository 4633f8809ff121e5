//! Bag-of-words feature extraction.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Feature name to value. Features missing from a set carry the implicit
/// value `None` during training.
pub type FeatureSet = AHashMap<String, bool>;

/// A tokenized document with its category label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledDocument {
    pub words: Vec<String>,
    pub label: String,
}

impl LabeledDocument {
    pub fn new<S: Into<String>>(words: Vec<String>, label: S) -> Self {
        LabeledDocument {
            words,
            label: label.into(),
        }
    }

    /// Featurize this document for training or evaluation.
    pub fn to_labeled_features(&self) -> (FeatureSet, String) {
        (document_features(&self.words), self.label.clone())
    }
}

/// Map every distinct word to `true`.
pub fn document_features<S: AsRef<str>>(words: &[S]) -> FeatureSet {
    words
        .iter()
        .map(|word| (word.as_ref().to_string(), true))
        .collect()
}
