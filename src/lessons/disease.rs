//! Disease prediction from two categorical symptoms.
//!
//! The symptom columns are ordinal-encoded, the disease column is
//! label-encoded, and either a decision tree or a categorical naive Bayes
//! model is fitted on the result. A symptom that never appears in the
//! table fails with [`SaplingError::UnknownCategory`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SaplingConfig;
use crate::error::{Result, SaplingError};
use crate::ml::{
    CategoricalNb, Classifier, DecisionTreeClassifier, LabelEncoder, OrdinalEncoder, Table,
};

/// Feature columns, in encoding order.
pub const FEATURES: [&str; 2] = ["Symptom 1", "Symptom 2"];

/// Target column.
pub const TARGET: &str = "Disease";

/// Which classifier to fit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiseaseModel {
    DecisionTree,
    NaiveBayes,
}

impl DiseaseModel {
    /// Result banner used by the console output.
    pub fn title(&self) -> &'static str {
        match self {
            DiseaseModel::DecisionTree => "DECISION TREE (ID3) PREDICTION RESULT",
            DiseaseModel::NaiveBayes => "NAIVE BAYES PREDICTION RESULT",
        }
    }
}

/// The symptoms a patient can report, in order of first appearance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomOptions {
    pub symptom1: Vec<String>,
    pub symptom2: Vec<String>,
}

impl fmt::Display for SymptomOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Available Symptom 1 options: {}", bare_list(&self.symptom1))?;
        write!(f, "Available Symptom 2 options: {}", bare_list(&self.symptom2))
    }
}

fn bare_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("'{item}'")).collect();
    format!("[{}]", quoted.join(" "))
}

/// List the symptoms present in `table`.
pub fn options(table: &Table) -> Result<SymptomOptions> {
    let unique = |column: &str| -> Result<Vec<String>> {
        Ok(table
            .unique(column)?
            .into_iter()
            .map(str::to_string)
            .collect())
    };
    Ok(SymptomOptions {
        symptom1: unique(FEATURES[0])?,
        symptom2: unique(FEATURES[1])?,
    })
}

/// A fitted prediction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseasePrediction {
    pub model: DiseaseModel,
    pub symptoms: [String; 2],
    pub disease: String,
}

impl fmt::Display for DiseasePrediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- {} ---", self.model.title())?;
        let [first, second] = &self.symptoms;
        match self.model {
            DiseaseModel::DecisionTree => writeln!(f, "Symptoms Entered: {first}, {second}")?,
            DiseaseModel::NaiveBayes => writeln!(
                f,
                "Symptoms Entered: Symptom 1 = {first}, Symptom 2 = {second}"
            )?,
        }
        write!(f, "Predicted Disease: {}", self.disease)
    }
}

/// Friendly diagnostic for a symptom that is not in the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownSymptom {
    pub model: DiseaseModel,
    pub details: String,
    pub options: SymptomOptions,
}

impl UnknownSymptom {
    pub fn new(model: DiseaseModel, error: &SaplingError, options: SymptomOptions) -> Self {
        UnknownSymptom {
            model,
            details: error.to_string(),
            options,
        }
    }
}

impl fmt::Display for UnknownSymptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ERROR: Unknown symptom entered.")?;
        match self.model {
            DiseaseModel::DecisionTree => {
                writeln!(f, "Please choose from the available symptom options.")?
            }
            DiseaseModel::NaiveBayes => {
                writeln!(f, "Please choose symptoms from the available options.")?
            }
        }
        write!(f, "Technical details: {}", self.details)
    }
}

enum FittedModel {
    Tree(DecisionTreeClassifier),
    Bayes(CategoricalNb),
}

impl FittedModel {
    fn classifier(&self) -> &dyn Classifier {
        match self {
            FittedModel::Tree(tree) => tree,
            FittedModel::Bayes(nb) => nb,
        }
    }
}

/// Encoders and a classifier fitted on a symptom table.
pub struct DiseaseClassifier {
    model: DiseaseModel,
    encoder: OrdinalEncoder,
    labels: LabelEncoder,
    fitted: FittedModel,
}

impl DiseaseClassifier {
    /// Encode `table` and fit `model` with the hyperparameters in `config`.
    pub fn fit(model: DiseaseModel, table: &Table, config: &SaplingConfig) -> Result<Self> {
        let mut encoder = OrdinalEncoder::new();
        let x = encoder.fit_transform(&table.select(&FEATURES)?)?;
        let mut labels = LabelEncoder::new();
        let y = labels.fit_transform(&table.column(TARGET)?)?;

        let fitted = match model {
            DiseaseModel::DecisionTree => {
                let mut tree = config.tree.build();
                tree.fit(&x, &y)?;
                FittedModel::Tree(tree)
            }
            DiseaseModel::NaiveBayes => {
                let mut nb = config.naive_bayes.build()?;
                nb.fit(&x, &y)?;
                FittedModel::Bayes(nb)
            }
        };
        log::info!(
            "Fitted {} on {} records",
            fitted.classifier().name(),
            table.row_count()
        );

        Ok(DiseaseClassifier {
            model,
            encoder,
            labels,
            fitted,
        })
    }

    pub fn model(&self) -> DiseaseModel {
        self.model
    }

    /// Predict the disease for one patient. Input is trimmed first.
    pub fn predict(&self, symptom1: &str, symptom2: &str) -> Result<DiseasePrediction> {
        let symptoms = [symptom1.trim().to_string(), symptom2.trim().to_string()];
        let x = self.encoder.transform(&[symptoms.to_vec()])?;
        let codes = self.fitted.classifier().predict(&x)?;
        let disease = self
            .labels
            .inverse_transform(&codes)?
            .into_iter()
            .next()
            .ok_or_else(|| SaplingError::model("classifier returned no prediction"))?;

        log::debug!("{symptoms:?} -> {disease}");
        Ok(DiseasePrediction {
            model: self.model,
            symptoms,
            disease,
        })
    }

    /// The learned decision rules, when the model is a tree.
    pub fn rules(&self) -> Result<Option<String>> {
        let FittedModel::Tree(tree) = &self.fitted else {
            return Ok(None);
        };
        let classes = self.labels.classes()?;
        let class_names: Vec<&str> = classes.iter().map(String::as_str).collect();
        tree.export_text(&FEATURES, &class_names).map(Some)
    }
}

/// Fit `model` on `table` and predict the disease for one patient.
pub fn predict(
    model: DiseaseModel,
    table: &Table,
    symptom1: &str,
    symptom2: &str,
    config: &SaplingConfig,
) -> Result<DiseasePrediction> {
    DiseaseClassifier::fit(model, table, config)?.predict(symptom1, symptom2)
}
