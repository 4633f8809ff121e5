//! Runtime configuration.
//!
//! Every section has defaults, so a JSON file only needs the keys it
//! changes:
//!
//! ```
//! use sapling::config::SaplingConfig;
//!
//! let config = SaplingConfig::from_json(r#"{ "naive_bayes": { "alpha": 0.5 } }"#).unwrap();
//! assert_eq!(config.naive_bayes.alpha, 0.5);
//! assert!(config.naive_bayes.fit_prior);
//! assert_eq!(config.frequency.top_n, 20);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::chunk::EntityLabel;
use crate::error::{Result, SaplingError};
use crate::ml::{CategoricalNb, Criterion, DecisionTreeClassifier};

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaplingConfig {
    pub tree: TreeConfig,
    pub naive_bayes: CategoricalNbConfig,
    pub vader: VaderConfig,
    pub frequency: FrequencyConfig,
    pub topics: TopicConfig,
    pub entities: EntityConfig,
    pub reviews: ReviewConfig,
}

/// Decision tree hyperparameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    pub criterion: Criterion,
    pub max_depth: Option<usize>,
    pub min_samples_split: usize,
    pub min_samples_leaf: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            criterion: Criterion::Entropy,
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
        }
    }
}

impl TreeConfig {
    /// An unfitted classifier with these hyperparameters.
    pub fn build(&self) -> DecisionTreeClassifier {
        DecisionTreeClassifier::new()
            .with_criterion(self.criterion)
            .with_max_depth(self.max_depth)
            .with_min_samples_split(self.min_samples_split)
            .with_min_samples_leaf(self.min_samples_leaf)
    }
}

/// Categorical naive Bayes hyperparameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoricalNbConfig {
    pub alpha: f64,
    pub fit_prior: bool,
}

impl Default for CategoricalNbConfig {
    fn default() -> Self {
        CategoricalNbConfig {
            alpha: 1.0,
            fit_prior: true,
        }
    }
}

impl CategoricalNbConfig {
    pub fn build(&self) -> Result<CategoricalNb> {
        Ok(CategoricalNb::new()
            .with_alpha(self.alpha)?
            .with_fit_prior(self.fit_prior))
    }
}

/// VADER labelling thresholds and an optional full lexicon file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaderConfig {
    pub positive_threshold: f64,
    pub negative_threshold: f64,
    pub lexicon_path: Option<PathBuf>,
}

impl Default for VaderConfig {
    fn default() -> Self {
        VaderConfig {
            positive_threshold: 0.05,
            negative_threshold: -0.05,
            lexicon_path: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrequencyConfig {
    pub top_n: usize,
}

impl Default for FrequencyConfig {
    fn default() -> Self {
        FrequencyConfig { top_n: 20 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicConfig {
    pub top_n: usize,
}

impl Default for TopicConfig {
    fn default() -> Self {
        TopicConfig { top_n: 10 }
    }
}

/// Entity types reported by the NER pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityConfig {
    pub labels: Vec<EntityLabel>,
}

impl Default for EntityConfig {
    fn default() -> Self {
        EntityConfig {
            labels: vec![EntityLabel::Person, EntityLabel::Gpe],
        }
    }
}

/// Movie review training run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Number of shuffled documents used for training; the rest is test data.
    pub train_size: usize,
    /// Shuffle seed. `None` shuffles from OS entropy.
    pub seed: Option<u64>,
    pub informative_features: usize,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        ReviewConfig {
            train_size: 1500,
            seed: None,
            informative_features: 10,
        }
    }
}

impl SaplingConfig {
    /// Load and validate a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SaplingError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = Self::from_json(&content)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a JSON configuration string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SaplingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// The file's configuration when a path is given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Reject values the pipelines cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.tree.min_samples_split < 2 {
            return Err(SaplingError::config(format!(
                "tree.min_samples_split must be at least 2, got {}",
                self.tree.min_samples_split
            )));
        }
        if self.tree.min_samples_leaf < 1 {
            return Err(SaplingError::config("tree.min_samples_leaf must be at least 1"));
        }
        if self.tree.max_depth == Some(0) {
            return Err(SaplingError::config("tree.max_depth must be positive"));
        }

        let alpha = self.naive_bayes.alpha;
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(SaplingError::config(format!(
                "naive_bayes.alpha must be a positive number, got {alpha}"
            )));
        }

        let (positive, negative) = (self.vader.positive_threshold, self.vader.negative_threshold);
        if !(-1.0..=1.0).contains(&positive) || !(-1.0..=1.0).contains(&negative) {
            return Err(SaplingError::config(
                "vader thresholds must lie within [-1, 1]",
            ));
        }
        if negative >= positive {
            return Err(SaplingError::config(format!(
                "vader.negative_threshold ({negative}) must be below vader.positive_threshold ({positive})"
            )));
        }

        if self.frequency.top_n == 0 || self.topics.top_n == 0 {
            return Err(SaplingError::config("top_n must be positive"));
        }
        if self.entities.labels.is_empty() {
            return Err(SaplingError::config("entities.labels must not be empty"));
        }
        Ok(())
    }
}
