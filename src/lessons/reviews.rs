//! Bag-of-words naive Bayes trained on a review corpus.
//!
//! Documents are shuffled, featurized, split into a training prefix of
//! `reviews.train_size` documents and a test remainder, then evaluated.

use std::fmt;
use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::config::SaplingConfig;
use crate::error::Result;
use crate::sentiment::corpus::featurize;
use crate::sentiment::{InformativeFeature, NaiveBayesClassifier, ReviewCorpus, accuracy};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReviewReport {
    pub documents: usize,
    pub train: usize,
    pub test: usize,
    /// `None` when every document went into training.
    pub accuracy: Option<f64>,
    pub informative_features: Vec<InformativeFeature>,
}

impl fmt::Display for ReviewReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.accuracy {
            Some(accuracy) => writeln!(f, "Accuracy: {accuracy}")?,
            None => writeln!(f, "Accuracy: n/a (empty test set)")?,
        }
        write!(f, "Most Informative Features")?;
        for feature in &self.informative_features {
            write!(f, "\n{feature}")?;
        }
        Ok(())
    }
}

/// Train and evaluate on the corpus under `corpus_root`.
pub fn run<P: AsRef<Path>>(corpus_root: P, config: &SaplingConfig) -> Result<ReviewReport> {
    let mut documents = ReviewCorpus::load(corpus_root)?.into_documents();

    let mut rng = match config.reviews.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    documents.shuffle(&mut rng);

    let featuresets = featurize(&documents);
    let split = config.reviews.train_size.min(featuresets.len());
    let (train_set, test_set) = featuresets.split_at(split);
    log::info!(
        "Training on {} documents, testing on {}",
        train_set.len(),
        test_set.len()
    );

    let classifier = NaiveBayesClassifier::train(train_set)?;
    log::debug!(
        "Classifier knows {} features over labels {:?}",
        classifier.feature_count(),
        classifier.labels()
    );

    Ok(ReviewReport {
        documents: featuresets.len(),
        train: train_set.len(),
        test: test_set.len(),
        accuracy: accuracy(&classifier, test_set),
        informative_features: classifier
            .informative_features(config.reviews.informative_features),
    })
}
