//! CART decision tree classifier.
//!
//! Each internal node tests `feature <= threshold`, with thresholds placed
//! midway between consecutive distinct values of the samples reaching the
//! node. The split with the largest impurity decrease wins; ties go to the
//! lowest feature index, then the lowest threshold. With
//! [`Criterion::Entropy`] this is the information gain rule of ID3.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Classifier, check_rows, check_training_set};
use crate::error::{Result, SaplingError};

/// Gains closer than this are treated as equal.
const GAIN_TOLERANCE: f64 = 1e-12;

/// Node impurity measure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    /// Shannon entropy in bits.
    #[default]
    Entropy,
    /// Gini impurity.
    Gini,
}

impl Criterion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Entropy => "entropy",
            Criterion::Gini => "gini",
        }
    }

    /// Impurity of a node holding `counts` samples per class.
    pub fn impurity(&self, counts: &[usize]) -> f64 {
        let total: usize = counts.iter().sum();
        if total == 0 {
            return 0.0;
        }
        let proportions = counts
            .iter()
            .filter(|&&count| count > 0)
            .map(|&count| count as f64 / total as f64);

        match self {
            Criterion::Entropy => proportions.map(|p| -p * p.log2()).sum(),
            Criterion::Gini => 1.0 - proportions.map(|p| p * p).sum::<f64>(),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Criterion {
    type Err = SaplingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "entropy" => Ok(Criterion::Entropy),
            "gini" => Ok(Criterion::Gini),
            other => Err(SaplingError::invalid_argument(format!(
                "unknown split criterion {other:?} (expected entropy or gini)"
            ))),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
enum TreeNode {
    Leaf {
        /// Training samples per class index.
        counts: Vec<usize>,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

impl TreeNode {
    fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 0,
            TreeNode::Split { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Split { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    fn leaf_for(&self, row: &[f64]) -> &[usize] {
        match self {
            TreeNode::Leaf { counts } => counts,
            TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                if row[*feature] <= *threshold {
                    left.leaf_for(row)
                } else {
                    right.leaf_for(row)
                }
            }
        }
    }
}

/// Majority class index. Ties go to the lowest index.
fn majority(counts: &[usize]) -> usize {
    let mut best = 0;
    for (class, &count) in counts.iter().enumerate() {
        if count > counts[best] {
            best = class;
        }
    }
    best
}

struct BestSplit {
    feature: usize,
    threshold: f64,
    gain: f64,
    left: Vec<usize>,
    right: Vec<usize>,
}

/// Decision tree for categorical or numeric features.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    criterion: Criterion,
    max_depth: Option<usize>,
    min_samples_split: usize,
    min_samples_leaf: usize,
    /// Sorted distinct target codes seen by `fit`.
    classes: Vec<usize>,
    n_features: usize,
    root: Option<TreeNode>,
}

impl Default for DecisionTreeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionTreeClassifier {
    /// Create an unfitted tree splitting on entropy with no depth limit.
    pub fn new() -> Self {
        DecisionTreeClassifier {
            criterion: Criterion::Entropy,
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
            classes: Vec::new(),
            n_features: 0,
            root: None,
        }
    }

    pub fn with_criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Minimum samples a node needs before it may be split (at least 2).
    pub fn with_min_samples_split(mut self, min_samples_split: usize) -> Self {
        self.min_samples_split = min_samples_split.max(2);
        self
    }

    /// Minimum samples each child of a split must keep (at least 1).
    pub fn with_min_samples_leaf(mut self, min_samples_leaf: usize) -> Self {
        self.min_samples_leaf = min_samples_leaf.max(1);
        self
    }

    pub fn criterion(&self) -> Criterion {
        self.criterion
    }

    /// Sorted target codes seen during `fit`.
    pub fn classes(&self) -> &[usize] {
        &self.classes
    }

    fn root(&self) -> Result<&TreeNode> {
        self.root
            .as_ref()
            .ok_or(SaplingError::NotFitted("DecisionTreeClassifier"))
    }

    /// Longest root-to-leaf path; a single leaf has depth 0.
    pub fn depth(&self) -> Result<usize> {
        Ok(self.root()?.depth())
    }

    pub fn leaf_count(&self) -> Result<usize> {
        Ok(self.root()?.leaf_count())
    }

    /// Class membership probabilities per row, columns in [`classes`](Self::classes) order.
    pub fn predict_proba(&self, x: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        let root = self.root()?;
        check_rows(x, self.n_features)?;

        Ok(x.iter()
            .map(|row| {
                let counts = root.leaf_for(row);
                let total: usize = counts.iter().sum();
                counts
                    .iter()
                    .map(|&count| count as f64 / total as f64)
                    .collect()
            })
            .collect())
    }

    /// Render the learned rules, one line per node:
    ///
    /// ```text
    /// |--- Symptom 1 <= 0.50
    /// |   |--- class: Mesiopathy
    /// |--- Symptom 1 >  0.50
    /// ...
    /// ```
    pub fn export_text(&self, feature_names: &[&str], class_names: &[&str]) -> Result<String> {
        let root = self.root()?;
        if feature_names.len() != self.n_features {
            return Err(SaplingError::invalid_argument(format!(
                "{} feature names given for {} features",
                feature_names.len(),
                self.n_features
            )));
        }
        if class_names.len() != self.classes.len() {
            return Err(SaplingError::invalid_argument(format!(
                "{} class names given for {} classes",
                class_names.len(),
                self.classes.len()
            )));
        }

        let mut out = String::new();
        render(root, 0, feature_names, class_names, &mut out);
        Ok(out)
    }

    fn build(&self, x: &[Vec<f64>], y: &[usize], indices: Vec<usize>, depth: usize) -> TreeNode {
        let mut counts = vec![0usize; self.classes.len()];
        for &i in &indices {
            counts[y[i]] += 1;
        }

        let impurity = self.criterion.impurity(&counts);
        let depth_reached = self.max_depth.is_some_and(|max| depth >= max);
        if impurity <= GAIN_TOLERANCE
            || depth_reached
            || indices.len() < self.min_samples_split
            || indices.len() < 2 * self.min_samples_leaf
        {
            return TreeNode::Leaf { counts };
        }

        match self.best_split(x, y, &indices, impurity) {
            Some(split) => {
                log::debug!(
                    "depth {depth}: split feature {} at {:.2} (gain {:.4})",
                    split.feature,
                    split.threshold,
                    split.gain
                );
                TreeNode::Split {
                    feature: split.feature,
                    threshold: split.threshold,
                    left: Box::new(self.build(x, y, split.left, depth + 1)),
                    right: Box::new(self.build(x, y, split.right, depth + 1)),
                }
            }
            None => TreeNode::Leaf { counts },
        }
    }

    fn best_split(
        &self,
        x: &[Vec<f64>],
        y: &[usize],
        indices: &[usize],
        impurity: f64,
    ) -> Option<BestSplit> {
        let n = indices.len() as f64;
        let mut best: Option<BestSplit> = None;

        for feature in 0..self.n_features {
            let mut values: Vec<(f64, usize)> =
                indices.iter().map(|&i| (x[i][feature], i)).collect();
            values.sort_by(|a, b| a.0.total_cmp(&b.0));

            let mut left_counts = vec![0usize; self.classes.len()];
            let mut right_counts = vec![0usize; self.classes.len()];
            for &(_, i) in &values {
                right_counts[y[i]] += 1;
            }

            for split_at in 1..values.len() {
                let moved = values[split_at - 1].1;
                left_counts[y[moved]] += 1;
                right_counts[y[moved]] -= 1;

                if values[split_at - 1].0 == values[split_at].0
                    || split_at < self.min_samples_leaf
                    || values.len() - split_at < self.min_samples_leaf
                {
                    continue;
                }

                let weighted = split_at as f64 / n * self.criterion.impurity(&left_counts)
                    + (values.len() - split_at) as f64 / n * self.criterion.impurity(&right_counts);
                let gain = impurity - weighted;

                if best
                    .as_ref()
                    .is_none_or(|current| gain > current.gain + GAIN_TOLERANCE)
                {
                    best = Some(BestSplit {
                        feature,
                        threshold: (values[split_at - 1].0 + values[split_at].0) / 2.0,
                        gain,
                        left: values[..split_at].iter().map(|&(_, i)| i).collect(),
                        right: values[split_at..].iter().map(|&(_, i)| i).collect(),
                    });
                }
            }
        }

        best
    }
}

fn render(node: &TreeNode, depth: usize, features: &[&str], classes: &[&str], out: &mut String) {
    let indent = "|   ".repeat(depth);
    match node {
        TreeNode::Leaf { counts } => {
            out.push_str(&format!("{indent}|--- class: {}\n", classes[majority(counts)]));
        }
        TreeNode::Split {
            feature,
            threshold,
            left,
            right,
        } => {
            out.push_str(&format!("{indent}|--- {} <= {threshold:.2}\n", features[*feature]));
            render(left, depth + 1, features, classes, out);
            out.push_str(&format!("{indent}|--- {} >  {threshold:.2}\n", features[*feature]));
            render(right, depth + 1, features, classes, out);
        }
    }
}

impl Classifier for DecisionTreeClassifier {
    fn fit(&mut self, x: &[Vec<f64>], y: &[usize]) -> Result<()> {
        let n_features = check_training_set(x, y)?;

        let mut classes = y.to_vec();
        classes.sort_unstable();
        classes.dedup();
        let encoded: Vec<usize> = y
            .iter()
            .map(|label| classes.binary_search(label).unwrap_or_default())
            .collect();

        self.classes = classes;
        self.n_features = n_features;
        let root = self.build(x, &encoded, (0..x.len()).collect(), 0);

        log::debug!(
            "Fitted decision tree ({}): depth {}, {} leaves",
            self.criterion,
            root.depth(),
            root.leaf_count()
        );
        self.root = Some(root);
        Ok(())
    }

    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<usize>> {
        let root = self.root()?;
        check_rows(x, self.n_features)?;

        Ok(x.iter()
            .map(|row| self.classes[majority(root.leaf_for(row))])
            .collect())
    }

    fn name(&self) -> &'static str {
        "decision_tree"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Encoded symptom records: (Symptom 1, Symptom 2) -> Disease.
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
    fn test_impurity() {
        assert_eq!(Criterion::Entropy.impurity(&[2, 2]), 1.0);
        assert_eq!(Criterion::Entropy.impurity(&[3, 0]), 0.0);
        assert!((Criterion::Gini.impurity(&[3, 2]) - 0.48).abs() < 1e-12);
        assert_eq!(Criterion::Gini.impurity(&[]), 0.0);
    }

    #[test]
    fn test_symptom_predictions() {
        let (x, y) = symptoms();
        let mut tree = DecisionTreeClassifier::new();
        tree.fit(&x, &y).unwrap();

        assert_eq!(tree.predict(&[vec![1.0, 2.0]]).unwrap(), vec![1]);
        assert_eq!(tree.predict(&[vec![0.0, 0.0]]).unwrap(), vec![0]);
        assert_eq!(tree.predict(&x).unwrap(), y);
        assert_eq!(tree.depth().unwrap(), 2);
        assert_eq!(tree.leaf_count().unwrap(), 3);
    }

    #[test]
    fn test_export_text() {
        let (x, y) = symptoms();
        let mut tree = DecisionTreeClassifier::new();
        tree.fit(&x, &y).unwrap();

        let text = tree
            .export_text(&["Symptom 1", "Symptom 2"], &["Mesiopathy", "Ritengitis"])
            .unwrap();
        assert_eq!(
            text,
            "|--- Symptom 1 <= 0.50\n\
             |   |--- class: Mesiopathy\n\
             |--- Symptom 1 >  0.50\n\
             |   |--- Symptom 2 <= 1.50\n\
             |   |   |--- class: Mesiopathy\n\
             |   |--- Symptom 2 >  1.50\n\
             |   |   |--- class: Ritengitis\n"
        );
        assert!(tree.export_text(&["Symptom 1"], &["a", "b"]).is_err());
    }

    #[test]
    fn test_predict_proba() {
        let (x, y) = symptoms();
        let mut tree = DecisionTreeClassifier::new().with_max_depth(Some(1));
        tree.fit(&x, &y).unwrap();

        let proba = tree.predict_proba(&[vec![1.0, 2.0], vec![0.0, 2.0]]).unwrap();
        assert!((proba[0][0] - 1.0 / 3.0).abs() < 1e-12);
        assert!((proba[0][1] - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(proba[1], vec![1.0, 0.0]);
        assert_eq!(tree.depth().unwrap(), 1);
    }

    #[test]
    fn test_min_samples_leaf_blocks_splits() {
        let (x, y) = symptoms();
        let mut tree = DecisionTreeClassifier::new().with_min_samples_leaf(3);
        tree.fit(&x, &y).unwrap();

        assert_eq!(tree.leaf_count().unwrap(), 1);
        assert_eq!(tree.predict(&[vec![1.0, 2.0]]).unwrap(), vec![0]);
    }

    #[test]
    fn test_gini_agrees_on_symptoms() {
        let (x, y) = symptoms();
        let mut tree = DecisionTreeClassifier::new().with_criterion(Criterion::Gini);
        tree.fit(&x, &y).unwrap();
        assert_eq!(tree.predict(&x).unwrap(), y);
    }

    #[test]
    fn test_sparse_class_codes() {
        let mut tree = DecisionTreeClassifier::new();
        tree.fit(&[vec![0.0], vec![1.0]], &[7, 3]).unwrap();
        assert_eq!(tree.classes(), &[3, 7]);
        assert_eq!(tree.predict(&[vec![0.0], vec![5.0]]).unwrap(), vec![7, 3]);
    }

    #[test]
    fn test_errors() {
        let tree = DecisionTreeClassifier::new();
        assert!(matches!(
            tree.predict(&[vec![0.0]]),
            Err(SaplingError::NotFitted(_))
        ));

        let (x, y) = symptoms();
        let mut tree = DecisionTreeClassifier::new();
        tree.fit(&x, &y).unwrap();
        assert!(tree.predict(&[vec![0.0]]).is_err());
        assert_eq!("GINI".parse::<Criterion>().unwrap(), Criterion::Gini);
        assert!("chaos".parse::<Criterion>().is_err());
    }
}
