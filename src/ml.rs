//! Classic supervised learning on small categorical datasets.
//!
//! The flow mirrors a typical tabular notebook:
//!
//! 1. hold the raw records in a [`Table`];
//! 2. turn feature columns into numeric codes with an [`OrdinalEncoder`] and
//!    the target column with a [`LabelEncoder`];
//! 3. fit a [`Classifier`] ([`DecisionTreeClassifier`] or [`CategoricalNb`])
//!    and decode its predictions back into labels.
//!
//! ```
//! use sapling::ml::{Classifier, DecisionTreeClassifier, LabelEncoder, OrdinalEncoder, symptom_table};
//!
//! let table = symptom_table();
//! let mut encoder = OrdinalEncoder::new();
//! let x = encoder.fit_transform(&table.select(&["Symptom 1", "Symptom 2"]).unwrap()).unwrap();
//! let mut labels = LabelEncoder::new();
//! let y = labels.fit_transform(&table.column("Disease").unwrap()).unwrap();
//!
//! let mut tree = DecisionTreeClassifier::new();
//! tree.fit(&x, &y).unwrap();
//!
//! let query = encoder.transform(&[vec!["Paralysis", "Vomiting"]]).unwrap();
//! let predicted = labels.inverse_transform(&tree.predict(&query).unwrap()).unwrap();
//! assert_eq!(predicted, vec!["Ritengitis"]);
//! ```

pub mod dataset;
pub mod encoding;
pub mod naive_bayes;
pub mod tree;

pub use dataset::{Table, symptom_table};
pub use encoding::{LabelEncoder, OrdinalEncoder};
pub use naive_bayes::CategoricalNb;
pub use tree::{Criterion, DecisionTreeClassifier};

use crate::error::{Result, SaplingError};

/// Common interface of the classifiers. Samples are rows of numeric codes,
/// targets are class codes.
pub trait Classifier: Send + Sync {
    /// Learn from `x` (one row per sample) and the matching targets `y`.
    fn fit(&mut self, x: &[Vec<f64>], y: &[usize]) -> Result<()>;

    /// Predict one class code per row.
    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<usize>>;

    /// Get the name of this classifier (for debugging and logging).
    fn name(&self) -> &'static str;
}

/// Fraction of positions where `y_true` and `y_pred` agree.
pub fn accuracy_score<T: PartialEq>(y_true: &[T], y_pred: &[T]) -> Result<f64> {
    if y_true.len() != y_pred.len() {
        return Err(SaplingError::invalid_argument(format!(
            "found inputs with inconsistent numbers of samples: [{}, {}]",
            y_true.len(),
            y_pred.len()
        )));
    }
    if y_true.is_empty() {
        return Err(SaplingError::invalid_argument(
            "accuracy of an empty prediction set is undefined",
        ));
    }

    let correct = y_true.iter().zip(y_pred).filter(|(a, b)| a == b).count();
    Ok(correct as f64 / y_true.len() as f64)
}

/// Validate a training set: non-empty, rectangular, one target per row.
pub(crate) fn check_training_set(x: &[Vec<f64>], y: &[usize]) -> Result<usize> {
    if x.is_empty() {
        return Err(SaplingError::model("cannot fit on an empty training set"));
    }
    if x.len() != y.len() {
        return Err(SaplingError::model(format!(
            "{} samples but {} targets",
            x.len(),
            y.len()
        )));
    }
    check_rows(x, x[0].len())?;
    Ok(x[0].len())
}

/// Every row must have `width` finite values.
pub(crate) fn check_rows(x: &[Vec<f64>], width: usize) -> Result<()> {
    for (i, row) in x.iter().enumerate() {
        if row.len() != width {
            return Err(SaplingError::model(format!(
                "row {i} has {} features, expected {width}",
                row.len()
            )));
        }
        if row.iter().any(|v| !v.is_finite()) {
            return Err(SaplingError::model(format!("row {i} has a non-finite value")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_score() {
        assert_eq!(accuracy_score(&[0, 1, 1, 0], &[0, 1, 0, 0]).unwrap(), 0.75);
        assert_eq!(accuracy_score(&["a"], &["a"]).unwrap(), 1.0);
        assert!(accuracy_score(&[0, 1], &[0]).is_err());
        assert!(accuracy_score::<usize>(&[], &[]).is_err());
    }

    #[test]
    fn test_check_training_set() {
        assert_eq!(
            check_training_set(&[vec![0.0, 1.0], vec![1.0, 0.0]], &[0, 1]).unwrap(),
            2
        );
        assert!(check_training_set(&[], &[]).is_err());
        assert!(check_training_set(&[vec![0.0]], &[0, 1]).is_err());
        assert!(check_training_set(&[vec![0.0], vec![0.0, 1.0]], &[0, 1]).is_err());
        assert!(check_training_set(&[vec![f64::NAN]], &[0]).is_err());
    }
}
