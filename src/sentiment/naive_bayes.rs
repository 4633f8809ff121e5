//! Naive Bayes classifier over boolean feature sets.
//!
//! Probabilities use expected likelihood estimation (add 0.5 smoothing):
//!
//! ```text
//! P(value | label) = (count(label, feature, value) + 0.5) / (N(label) + 0.5 * bins(feature))
//! ```
//!
//! where `bins` is the number of distinct values observed for the feature.
//! A feature that a training instance does not mention takes the implicit
//! value `None`. At classification time only the features present in the
//! instance are scored, and feature names never seen in training are
//! ignored.

use std::fmt;

use ahash::AHashMap;
use serde::Serialize;

use super::features::FeatureSet;
use crate::error::{Result, SaplingError};

/// Value slots: implicit `None`, `false`, `true`.
const SLOTS: usize = 3;

fn slot(value: Option<bool>) -> usize {
    match value {
        None => 0,
        Some(false) => 1,
        Some(true) => 2,
    }
}

fn slot_value(slot: usize) -> Option<bool> {
    match slot {
        1 => Some(false),
        2 => Some(true),
        _ => None,
    }
}

fn value_repr(value: Option<bool>) -> &'static str {
    match value {
        None => "None",
        Some(false) => "False",
        Some(true) => "True",
    }
}

#[derive(Clone, Debug)]
struct FeatureCounts {
    /// `per_label[label][slot]`
    per_label: Vec<[usize; SLOTS]>,
    /// Number of distinct values seen across all labels.
    bins: usize,
}

/// A feature ranked by how strongly it separates two labels.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InformativeFeature {
    pub name: String,
    pub value: Option<bool>,
    /// Label under which the value is most likely.
    pub numerator: String,
    /// Label under which the value is least likely.
    pub denominator: String,
    /// `P(value | numerator) / P(value | denominator)`.
    pub ratio: f64,
}

impl fmt::Display for InformativeFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numerator: String = self.numerator.chars().take(6).collect();
        let denominator: String = self.denominator.chars().take(6).collect();
        write!(
            f,
            "{:>24} = {:<14} {:>6} : {:<6} = {:8.1} : 1.0",
            self.name,
            value_repr(self.value),
            numerator,
            denominator,
            self.ratio
        )
    }
}

/// Trained naive Bayes model.
#[derive(Clone, Debug)]
pub struct NaiveBayesClassifier {
    /// Labels in first-seen order.
    labels: Vec<String>,
    label_counts: Vec<usize>,
    features: AHashMap<String, FeatureCounts>,
}

impl NaiveBayesClassifier {
    /// Train on labelled feature sets.
    pub fn train(labeled: &[(FeatureSet, String)]) -> Result<Self> {
        if labeled.is_empty() {
            return Err(SaplingError::model(
                "cannot train a naive Bayes classifier on an empty set",
            ));
        }

        let mut labels: Vec<String> = Vec::new();
        let mut label_index: AHashMap<&str, usize> = AHashMap::new();
        for (_, label) in labeled {
            if !label_index.contains_key(label.as_str()) {
                label_index.insert(label.as_str(), labels.len());
                labels.push(label.clone());
            }
        }

        let mut label_counts = vec![0usize; labels.len()];
        let mut features: AHashMap<String, FeatureCounts> = AHashMap::new();
        for (featureset, label) in labeled {
            let l = label_index[label.as_str()];
            label_counts[l] += 1;
            for (name, &value) in featureset {
                let counts = features
                    .entry(name.clone())
                    .or_insert_with(|| FeatureCounts {
                        per_label: vec![[0; SLOTS]; labels.len()],
                        bins: 0,
                    });
                counts.per_label[l][slot(Some(value))] += 1;
            }
        }

        for counts in features.values_mut() {
            for (l, slots) in counts.per_label.iter_mut().enumerate() {
                let seen: usize = slots.iter().sum();
                slots[slot(None)] += label_counts[l] - seen;
            }
            counts.bins = (0..SLOTS)
                .filter(|&s| counts.per_label.iter().any(|slots| slots[s] > 0))
                .count();
        }

        log::info!(
            "Trained naive Bayes on {} instances: {} labels, {} features",
            labeled.len(),
            labels.len(),
            features.len()
        );

        Ok(NaiveBayesClassifier {
            labels,
            label_counts,
            features,
        })
    }

    /// Labels in first-seen order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of distinct feature names seen in training.
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    fn label_prob(&self, l: usize) -> f64 {
        let total: usize = self.label_counts.iter().sum();
        (self.label_counts[l] as f64 + 0.5) / (total as f64 + 0.5 * self.labels.len() as f64)
    }

    fn value_prob(&self, counts: &FeatureCounts, l: usize, slot: usize) -> f64 {
        (counts.per_label[l][slot] as f64 + 0.5)
            / (self.label_counts[l] as f64 + 0.5 * counts.bins as f64)
    }

    /// Normalised probability of every label, in label order.
    pub fn prob_classify(&self, featureset: &FeatureSet) -> Vec<(String, f64)> {
        let mut logprob: Vec<f64> = (0..self.labels.len())
            .map(|l| self.label_prob(l).ln())
            .collect();

        for (name, &value) in featureset {
            let Some(counts) = self.features.get(name) else {
                continue;
            };
            for (l, lp) in logprob.iter_mut().enumerate() {
                *lp += self.value_prob(counts, l, slot(Some(value))).ln();
            }
        }

        let max = logprob.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let weights: Vec<f64> = logprob.iter().map(|lp| (lp - max).exp()).collect();
        let sum: f64 = weights.iter().sum();

        self.labels
            .iter()
            .cloned()
            .zip(weights.into_iter().map(|w| w / sum))
            .collect()
    }

    /// Most probable label. Ties go to the label seen first in training.
    pub fn classify(&self, featureset: &FeatureSet) -> &str {
        let probs = self.prob_classify(featureset);
        let mut best = 0;
        for (l, (_, p)) in probs.iter().enumerate() {
            if *p > probs[best].1 {
                best = l;
            }
        }
        &self.labels[best]
    }

    /// The `n` feature/value pairs with the lowest ratio between their
    /// smallest and largest per-label probability. Ties are ordered by
    /// feature name, then by value.
    pub fn most_informative_features(&self, n: usize) -> Vec<(String, Option<bool>)> {
        let mut ranked: Vec<(f64, &str, Option<bool>)> = Vec::new();

        for (name, counts) in &self.features {
            for s in 0..SLOTS {
                let mut min = 1.0f64;
                let mut max = 0.0f64;
                let mut observed = false;
                for l in 0..self.labels.len() {
                    if counts.per_label[l][s] == 0 {
                        continue;
                    }
                    let p = self.value_prob(counts, l, s);
                    min = min.min(p);
                    max = max.max(p);
                    observed = true;
                }
                if observed {
                    ranked.push((min / max, name.as_str(), slot_value(s)));
                }
            }
        }

        ranked.sort_by(|a, b| {
            a.0.total_cmp(&b.0)
                .then_with(|| a.1.cmp(b.1))
                .then_with(|| value_repr(a.2).to_lowercase().cmp(&value_repr(b.2).to_lowercase()))
        });

        ranked
            .into_iter()
            .take(n)
            .map(|(_, name, value)| (name.to_string(), value))
            .collect()
    }

    /// Rows for the top `n` informative features. Features whose value was
    /// observed under a single label are skipped, so fewer than `n` rows may
    /// be returned.
    pub fn informative_features(&self, n: usize) -> Vec<InformativeFeature> {
        let mut rows = Vec::new();

        for (name, value) in self.most_informative_features(n) {
            let Some(counts) = self.features.get(&name) else {
                continue;
            };
            let s = slot(value);
            let mut observed: Vec<(usize, f64)> = (0..self.labels.len())
                .filter(|&l| counts.per_label[l][s] > 0)
                .map(|l| (l, self.value_prob(counts, l, s)))
                .collect();
            if observed.len() < 2 {
                continue;
            }
            observed.sort_by(|a, b| {
                a.1.total_cmp(&b.1)
                    .then_with(|| self.labels[b.0].cmp(&self.labels[a.0]))
            });

            let (low, low_p) = observed[0];
            let (high, high_p) = observed[observed.len() - 1];
            rows.push(InformativeFeature {
                name,
                value,
                numerator: self.labels[high].clone(),
                denominator: self.labels[low].clone(),
                ratio: high_p / low_p,
            });
        }

        rows
    }

    /// Printable table of [`informative_features`](Self::informative_features).
    pub fn show_most_informative_features(&self, n: usize) -> String {
        let mut out = String::from("Most Informative Features");
        for row in self.informative_features(n) {
            out.push('\n');
            out.push_str(&row.to_string());
        }
        out
    }
}

/// Fraction of `test_set` classified correctly, `None` for an empty set.
pub fn accuracy(classifier: &NaiveBayesClassifier, test_set: &[(FeatureSet, String)]) -> Option<f64> {
    if test_set.is_empty() {
        return None;
    }
    let correct = test_set
        .iter()
        .filter(|(features, label)| classifier.classify(features) == label.as_str())
        .count();
    Some(correct as f64 / test_set.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::features::document_features;

    fn training_set() -> Vec<(FeatureSet, String)> {
        vec![
            (document_features(&["a"]), "pos".to_string()),
            (document_features(&["a", "b"]), "pos".to_string()),
            (document_features(&["b"]), "neg".to_string()),
        ]
    }

    #[test]
    fn test_train_and_classify() {
        let classifier = NaiveBayesClassifier::train(&training_set()).unwrap();

        assert_eq!(classifier.labels(), &["pos".to_string(), "neg".to_string()]);
        assert_eq!(classifier.feature_count(), 2);
        assert_eq!(classifier.classify(&document_features(&["a"])), "pos");

        let probs = classifier.prob_classify(&document_features(&["a"]));
        // pos: 0.625 * 2.5/3, neg: 0.375 * 0.5/2
        let expected = (0.625 * 2.5 / 3.0) / (0.625 * 2.5 / 3.0 + 0.375 * 0.25);
        assert!((probs[0].1 - expected).abs() < 1e-9);
        assert!((probs[0].1 + probs[1].1 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_unseen_features_are_ignored() {
        let classifier = NaiveBayesClassifier::train(&training_set()).unwrap();
        let with_unknown = classifier.prob_classify(&document_features(&["b", "zzz"]));
        let without = classifier.prob_classify(&document_features(&["b"]));
        assert!((with_unknown[0].1 - without[0].1).abs() < 1e-12);
    }

    #[test]
    fn test_most_informative_features() {
        let classifier = NaiveBayesClassifier::train(&training_set()).unwrap();

        let top = classifier.most_informative_features(2);
        assert_eq!(top[0], ("b".to_string(), Some(true)));
        assert_eq!(top[1], ("a".to_string(), None));

        let rows = classifier.informative_features(4);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].numerator, "neg");
        assert_eq!(rows[0].denominator, "pos");
        assert!((rows[0].ratio - 1.5).abs() < 1e-9);

        let line = rows[0].to_string();
        assert!(line.trim_start().starts_with("b = True"));
        assert!(line.contains("neg : pos"));
        assert!(line.ends_with("1.5 : 1.0"));
    }

    #[test]
    fn test_show_header() {
        let classifier = NaiveBayesClassifier::train(&training_set()).unwrap();
        let table = classifier.show_most_informative_features(4);
        assert!(table.starts_with("Most Informative Features\n"));
        assert_eq!(table.lines().count(), 2);
    }

    #[test]
    fn test_accuracy() {
        let classifier = NaiveBayesClassifier::train(&training_set()).unwrap();
        let test_set = vec![
            (document_features(&["a"]), "pos".to_string()),
            (document_features(&["a"]), "neg".to_string()),
        ];
        assert_eq!(accuracy(&classifier, &test_set), Some(0.5));
        assert_eq!(accuracy(&classifier, &[]), None);
    }

    #[test]
    fn test_empty_training_set() {
        assert!(NaiveBayesClassifier::train(&[]).is_err());
    }
}
