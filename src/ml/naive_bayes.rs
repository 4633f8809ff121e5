//! Naive Bayes for categorically encoded features.
//!
//! For class `c` and feature `i` with `n_i` categories:
//!
//! ```text
//! P(x_i = k | c) = (N_cik + alpha) / (N_c + alpha * n_i)
//! ```
//!
//! and the prediction maximises `log P(c) + sum_i log P(x_i | c)`.

use serde::{Deserialize, Serialize};

use super::{Classifier, check_rows, check_training_set};
use crate::error::{Result, SaplingError};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct FittedModel {
    /// Sorted distinct target codes.
    classes: Vec<usize>,
    class_counts: Vec<usize>,
    class_log_prior: Vec<f64>,
    /// `category_counts[feature][class][category]`
    category_counts: Vec<Vec<Vec<usize>>>,
}

/// Categorical naive Bayes with additive smoothing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CategoricalNb {
    alpha: f64,
    fit_prior: bool,
    model: Option<FittedModel>,
}

impl Default for CategoricalNb {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoricalNb {
    /// Laplace smoothing (`alpha = 1`) with priors learned from the data.
    pub fn new() -> Self {
        CategoricalNb {
            alpha: 1.0,
            fit_prior: true,
            model: None,
        }
    }

    /// Set the smoothing parameter. It must be positive.
    pub fn with_alpha(mut self, alpha: f64) -> Result<Self> {
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(SaplingError::invalid_argument(format!(
                "alpha must be a positive number, got {alpha}"
            )));
        }
        self.alpha = alpha;
        Ok(self)
    }

    /// Learn class priors from frequencies (`true`) or use uniform priors.
    pub fn with_fit_prior(mut self, fit_prior: bool) -> Self {
        self.fit_prior = fit_prior;
        self
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    fn model(&self) -> Result<&FittedModel> {
        self.model
            .as_ref()
            .ok_or(SaplingError::NotFitted("CategoricalNb"))
    }

    /// Sorted target codes seen during `fit`.
    pub fn classes(&self) -> Result<&[usize]> {
        Ok(&self.model()?.classes)
    }

    fn category_log_prob(&self, model: &FittedModel, feature: usize, class: usize, code: f64) -> f64 {
        let counts = &model.category_counts[feature][class];
        let n_categories = counts.len() as f64;
        let observed = if code >= 0.0 && (code as usize) < counts.len() {
            counts[code as usize] as f64
        } else {
            0.0
        };
        ((observed + self.alpha) / (model.class_counts[class] as f64 + self.alpha * n_categories)).ln()
    }

    /// Unnormalised joint log likelihood per row and class.
    fn joint_log_likelihood(&self, x: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        let model = self.model()?;
        check_rows(x, model.category_counts.len())?;

        Ok(x.iter()
            .map(|row| {
                (0..model.classes.len())
                    .map(|class| {
                        model.class_log_prior[class]
                            + row
                                .iter()
                                .enumerate()
                                .map(|(feature, &code)| {
                                    self.category_log_prob(model, feature, class, code)
                                })
                                .sum::<f64>()
                    })
                    .collect()
            })
            .collect())
    }

    /// Normalised log probabilities per row, columns in class order.
    pub fn predict_log_proba(&self, x: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        Ok(self
            .joint_log_likelihood(x)?
            .into_iter()
            .map(|jll| {
                let max = jll.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                let log_norm = max + jll.iter().map(|v| (v - max).exp()).sum::<f64>().ln();
                jll.iter().map(|v| v - log_norm).collect()
            })
            .collect())
    }

    /// Class probabilities per row, columns in class order.
    pub fn predict_proba(&self, x: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        Ok(self
            .predict_log_proba(x)?
            .into_iter()
            .map(|row| row.into_iter().map(f64::exp).collect())
            .collect())
    }
}

impl Classifier for CategoricalNb {
    fn fit(&mut self, x: &[Vec<f64>], y: &[usize]) -> Result<()> {
        let n_features = check_training_set(x, y)?;
        if x.iter().flatten().any(|&v| v < 0.0 || v.fract() != 0.0) {
            return Err(SaplingError::model(
                "categorical features must be non-negative integer codes",
            ));
        }

        let mut classes = y.to_vec();
        classes.sort_unstable();
        classes.dedup();

        let n_categories: Vec<usize> = (0..n_features)
            .map(|feature| {
                x.iter()
                    .map(|row| row[feature] as usize)
                    .max()
                    .map_or(0, |max| max + 1)
            })
            .collect();

        let mut class_counts = vec![0usize; classes.len()];
        let mut category_counts: Vec<Vec<Vec<usize>>> = n_categories
            .iter()
            .map(|&n| vec![vec![0usize; n]; classes.len()])
            .collect();

        for (row, label) in x.iter().zip(y) {
            let class = classes.binary_search(label).unwrap_or_default();
            class_counts[class] += 1;
            for (feature, &code) in row.iter().enumerate() {
                category_counts[feature][class][code as usize] += 1;
            }
        }

        let class_log_prior = if self.fit_prior {
            class_counts
                .iter()
                .map(|&count| (count as f64 / x.len() as f64).ln())
                .collect()
        } else {
            vec![-(classes.len() as f64).ln(); classes.len()]
        };

        log::debug!(
            "Fitted categorical naive Bayes: {} classes, categories per feature {:?}",
            classes.len(),
            n_categories
        );

        self.model = Some(FittedModel {
            classes,
            class_counts,
            class_log_prior,
            category_counts,
        });
        Ok(())
    }

    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<usize>> {
        let classes = &self.model()?.classes;
        Ok(self
            .joint_log_likelihood(x)?
            .iter()
            .map(|jll| {
                let mut best = 0;
                for (class, &value) in jll.iter().enumerate() {
                    if value > jll[best] {
                        best = class;
                    }
                }
                classes[best]
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "categorical_nb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symptoms() -> (Vec<Vec<f64>>, Vec<usize>) {
        (
            vec![
                vec![0.0, 0.0],
                vec![0.0, 2.0],
                vec![1.0, 1.0],
                vec![1.0, 2.0],
                vec![1.0, 2.0],
            ],
            vec![0, 0, 0, 1, 1],
        )
    }

    #[test]
    fn test_symptom_predictions() {
        let (x, y) = symptoms();
        let mut model = CategoricalNb::new();
        model.fit(&x, &y).unwrap();

        assert_eq!(model.predict(&[vec![1.0, 2.0]]).unwrap(), vec![1]);
        assert_eq!(model.predict(&[vec![0.0, 0.0]]).unwrap(), vec![0]);
    }

    #[test]
    fn test_predict_proba() {
        let (x, y) = symptoms();
        let mut model = CategoricalNb::new();
        model.fit(&x, &y).unwrap();

        // Paralysis + Vomiting: 0.6 * 2/5 * 2/6 = 0.08 vs 0.4 * 3/4 * 3/5 = 0.18
        let proba = model.predict_proba(&[vec![1.0, 2.0]]).unwrap();
        assert!((proba[0][0] - 0.08 / 0.26).abs() < 1e-9);
        assert!((proba[0][1] - 0.18 / 0.26).abs() < 1e-9);

        let log_proba = model.predict_log_proba(&[vec![1.0, 2.0]]).unwrap();
        assert!((log_proba[0][1].exp() - proba[0][1]).abs() < 1e-12);
    }

    #[test]
    fn test_uniform_prior() {
        let (x, y) = symptoms();
        let mut model = CategoricalNb::new().with_fit_prior(false);
        model.fit(&x, &y).unwrap();

        // 0.5 * 2/5 * 2/6 vs 0.5 * 3/4 * 3/5
        let proba = model.predict_proba(&[vec![1.0, 2.0]]).unwrap();
        let (m, r) = (0.5 * 0.4 * (2.0 / 6.0), 0.5 * 0.75 * 0.6);
        assert!((proba[0][1] - r / (m + r)).abs() < 1e-9);
    }

    #[test]
    fn test_code_beyond_training_range() {
        let (x, y) = symptoms();
        let mut model = CategoricalNb::new();
        model.fit(&x, &y).unwrap();

        let proba = model.predict_proba(&[vec![5.0, 2.0]]).unwrap();
        assert!((proba[0][0] + proba[0][1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(CategoricalNb::new().with_alpha(0.0).is_err());
        assert!(CategoricalNb::new().with_alpha(f64::NAN).is_err());
        assert_eq!(CategoricalNb::new().with_alpha(0.5).unwrap().alpha(), 0.5);

        let mut model = CategoricalNb::new();
        assert!(model.fit(&[vec![-1.0]], &[0]).is_err());
        assert!(matches!(
            model.predict(&[vec![0.0]]),
            Err(SaplingError::NotFitted(_))
        ));
    }
}
