//! Categorized review corpora on disk.
//!
//! The expected layout is one directory per category:
//!
//! ```text
//! movie_reviews/
//! ├── neg/
//! │   ├── cv000_29416.txt
//! │   └── ...
//! └── pos/
//!     ├── cv000_29590.txt
//!     └── ...
//! ```
//!
//! Files are read and tokenized in parallel. Hidden entries are skipped.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rayon::prelude::*;

use super::features::{FeatureSet, LabeledDocument};
use crate::analysis::token::texts;
use crate::analysis::token_filter::LowercaseFilter;
use crate::analysis::tokenizer::RegexTokenizer;
use crate::analysis::{Analyzer, PipelineAnalyzer};
use crate::error::{Result, SaplingError};

/// All documents of a corpus, grouped by sorted category and file name.
#[derive(Clone, Debug)]
pub struct ReviewCorpus {
    categories: Vec<String>,
    documents: Vec<LabeledDocument>,
}

impl ReviewCorpus {
    /// Load every document under `root`.
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(SaplingError::corpus(format!(
                "corpus directory not found: {}",
                root.display()
            )));
        }

        let categories = sorted_entries(root, true)?;
        let mut files: Vec<(PathBuf, String)> = Vec::new();
        for category in &categories {
            for file in sorted_entries(&root.join(category), false)? {
                files.push((root.join(category).join(file), category.clone()));
            }
        }
        if files.is_empty() {
            return Err(SaplingError::corpus(format!(
                "no documents found under {}",
                root.display()
            )));
        }

        let analyzer = review_analyzer()?;
        let documents = files
            .par_iter()
            .map(|(path, category)| {
                let text = fs::read_to_string(path).map_err(|e| {
                    SaplingError::corpus(format!("cannot read {}: {e}", path.display()))
                })?;
                let words = texts(analyzer.analyze(&text)?);
                Ok(LabeledDocument::new(words, category.as_str()))
            })
            .collect::<Result<Vec<_>>>()?;

        log::info!(
            "Loaded {} documents in {} categories from {}",
            documents.len(),
            categories.len(),
            root.display()
        );

        Ok(ReviewCorpus {
            categories,
            documents,
        })
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn documents(&self) -> &[LabeledDocument] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn into_documents(self) -> Vec<LabeledDocument> {
        self.documents
    }
}

/// Featurize documents in parallel, preserving order.
pub fn featurize(documents: &[LabeledDocument]) -> Vec<(FeatureSet, String)> {
    documents
        .par_iter()
        .map(LabeledDocument::to_labeled_features)
        .collect()
}

/// Word/punctuation runs, lowercased.
fn review_analyzer() -> Result<PipelineAnalyzer> {
    Ok(
        PipelineAnalyzer::new(Arc::new(RegexTokenizer::word_punct()?))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("review"),
    )
}

/// Names of the visible subdirectories (`dirs`) or regular files of `dir`.
fn sorted_entries(dir: &Path, dirs: bool) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let wanted = if dirs {
            file_type.is_dir()
        } else {
            file_type.is_file()
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        if wanted && !name.starts_with('.') {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}
