//! Categorical encoders.
//!
//! Both encoders learn their categories sorted, so codes do not depend on
//! the order of the training records:
//!
//! ```
//! use sapling::ml::OrdinalEncoder;
//!
//! let mut encoder = OrdinalEncoder::new();
//! let codes = encoder
//!     .fit_transform(&[vec!["Paralysis", "Vomiting"], vec!["Diarrhea", "Fever"]])
//!     .unwrap();
//! assert_eq!(codes, vec![vec![1.0, 1.0], vec![0.0, 0.0]]);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, SaplingError};

fn sorted_unique<'a, I: Iterator<Item = &'a str>>(values: I) -> Vec<String> {
    let mut unique: Vec<String> = values.map(str::to_string).collect();
    unique.sort();
    unique.dedup();
    unique
}

/// Encodes each feature column as `0..n_categories` floats.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OrdinalEncoder {
    categories: Option<Vec<Vec<String>>>,
}

impl OrdinalEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Learn the sorted categories of every column.
    pub fn fit<S: AsRef<str>>(&mut self, rows: &[Vec<S>]) -> Result<()> {
        let width = rectangular_width(rows)?;
        let categories = (0..width)
            .map(|column| sorted_unique(rows.iter().map(|row| row[column].as_ref())))
            .collect::<Vec<_>>();

        log::debug!(
            "OrdinalEncoder fitted {} columns: {:?}",
            width,
            categories.iter().map(Vec::len).collect::<Vec<_>>()
        );
        self.categories = Some(categories);
        Ok(())
    }

    /// Categories of every column, sorted.
    pub fn categories(&self) -> Result<&[Vec<String>]> {
        self.categories
            .as_deref()
            .ok_or(SaplingError::NotFitted("OrdinalEncoder"))
    }

    /// Encode rows. A value not seen by `fit` fails with
    /// [`SaplingError::UnknownCategory`] naming every unseen value of the
    /// first offending column.
    pub fn transform<S: AsRef<str>>(&self, rows: &[Vec<S>]) -> Result<Vec<Vec<f64>>> {
        let categories = self.categories()?;
        for (i, row) in rows.iter().enumerate() {
            if row.len() != categories.len() {
                return Err(SaplingError::dataset(format!(
                    "row {i} has {} values, the encoder was fitted on {} columns",
                    row.len(),
                    categories.len()
                )));
            }
        }

        for (column, known) in categories.iter().enumerate() {
            let unknown = sorted_unique(
                rows.iter()
                    .map(|row| row[column].as_ref())
                    .filter(|value| known.binary_search_by(|k| k.as_str().cmp(value)).is_err()),
            );
            if !unknown.is_empty() {
                return Err(SaplingError::unknown_category(column, unknown));
            }
        }

        Ok(rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(categories)
                    .map(|(value, known)| {
                        known
                            .binary_search_by(|k| k.as_str().cmp(value.as_ref()))
                            .map_or(0.0, |code| code as f64)
                    })
                    .collect()
            })
            .collect())
    }

    pub fn fit_transform<S: AsRef<str>>(&mut self, rows: &[Vec<S>]) -> Result<Vec<Vec<f64>>> {
        self.fit(rows)?;
        self.transform(rows)
    }

    /// Decode rows of codes back into category values.
    pub fn inverse_transform(&self, codes: &[Vec<f64>]) -> Result<Vec<Vec<String>>> {
        let categories = self.categories()?;
        codes
            .iter()
            .map(|row| {
                if row.len() != categories.len() {
                    return Err(SaplingError::dataset(format!(
                        "expected {} codes per row, got {}",
                        categories.len(),
                        row.len()
                    )));
                }
                row.iter()
                    .zip(categories)
                    .map(|(&code, known)| {
                        if code < 0.0 || code.fract() != 0.0 || code as usize >= known.len() {
                            return Err(SaplingError::invalid_argument(format!(
                                "code {code} is out of range for {} categories",
                                known.len()
                            )));
                        }
                        Ok(known[code as usize].clone())
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect()
    }
}

fn rectangular_width<S>(rows: &[Vec<S>]) -> Result<usize> {
    let Some(first) = rows.first() else {
        return Err(SaplingError::dataset("cannot fit an encoder on zero rows"));
    };
    if rows.iter().any(|row| row.len() != first.len()) {
        return Err(SaplingError::dataset("rows have different lengths"));
    }
    Ok(first.len())
}

/// Encodes target labels as `0..n_classes`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LabelEncoder {
    classes: Option<Vec<String>>,
}

impl LabelEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fit<S: AsRef<str>>(&mut self, labels: &[S]) -> Result<()> {
        if labels.is_empty() {
            return Err(SaplingError::dataset("cannot fit an encoder on zero labels"));
        }
        self.classes = Some(sorted_unique(labels.iter().map(AsRef::as_ref)));
        Ok(())
    }

    /// Sorted class names.
    pub fn classes(&self) -> Result<&[String]> {
        self.classes
            .as_deref()
            .ok_or(SaplingError::NotFitted("LabelEncoder"))
    }

    pub fn transform<S: AsRef<str>>(&self, labels: &[S]) -> Result<Vec<usize>> {
        let classes = self.classes()?;
        let unknown = sorted_unique(
            labels
                .iter()
                .map(AsRef::as_ref)
                .filter(|label| classes.binary_search_by(|c| c.as_str().cmp(label)).is_err()),
        );
        if !unknown.is_empty() {
            return Err(SaplingError::invalid_argument(format!(
                "y contains previously unseen labels: {unknown:?}"
            )));
        }

        Ok(labels
            .iter()
            .filter_map(|label| {
                classes
                    .binary_search_by(|c| c.as_str().cmp(label.as_ref()))
                    .ok()
            })
            .collect())
    }

    pub fn fit_transform<S: AsRef<str>>(&mut self, labels: &[S]) -> Result<Vec<usize>> {
        self.fit(labels)?;
        self.transform(labels)
    }

    /// Decode class codes. A code outside `0..n_classes` is an error.
    pub fn inverse_transform(&self, codes: &[usize]) -> Result<Vec<String>> {
        let classes = self.classes()?;
        codes
            .iter()
            .map(|&code| {
                classes.get(code).cloned().ok_or_else(|| {
                    SaplingError::invalid_argument(format!(
                        "code {code} is out of range for {} classes",
                        classes.len()
                    ))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::symptom_table;

    fn symptom_features() -> Vec<Vec<String>> {
        symptom_table().select(&["Symptom 1", "Symptom 2"]).unwrap()
    }

    #[test]
    fn test_ordinal_codes_are_sorted() {
        let mut encoder = OrdinalEncoder::new();
        let codes = encoder.fit_transform(&symptom_features()).unwrap();

        assert_eq!(
            encoder.categories().unwrap(),
            &[
                vec!["Diarrhea".to_string(), "Paralysis".to_string()],
                vec![
                    "Fever".to_string(),
                    "Headache".to_string(),
                    "Vomiting".to_string()
                ],
            ]
        );
        assert_eq!(codes[0], vec![0.0, 0.0]);
        assert_eq!(codes[2], vec![1.0, 1.0]);
        assert_eq!(codes[4], vec![1.0, 2.0]);
    }

    #[test]
    fn test_unknown_category() {
        let mut encoder = OrdinalEncoder::new();
        encoder.fit(&symptom_features()).unwrap();

        let error = encoder.transform(&[vec!["Paralysis", "Cough"]]).unwrap_err();
        assert!(error.is_unknown_category());
        assert_eq!(
            error.to_string(),
            "Found unknown categories ['Cough'] in column 1 during transform"
        );

        let error = encoder
            .transform(&[vec!["Rash", "Cough"], vec!["Chills", "Fever"]])
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "Found unknown categories ['Chills', 'Rash'] in column 0 during transform"
        );
    }

    #[test]
    fn test_ordinal_inverse_transform() {
        let mut encoder = OrdinalEncoder::new();
        encoder.fit(&symptom_features()).unwrap();

        assert_eq!(
            encoder.inverse_transform(&[vec![1.0, 2.0]]).unwrap(),
            vec![vec!["Paralysis".to_string(), "Vomiting".to_string()]]
        );
        assert!(encoder.inverse_transform(&[vec![2.0, 0.0]]).is_err());
        assert!(encoder.inverse_transform(&[vec![0.5, 0.0]]).is_err());
    }

    #[test]
    fn test_not_fitted() {
        let encoder = OrdinalEncoder::new();
        assert!(matches!(
            encoder.transform(&[vec!["Fever"]]),
            Err(SaplingError::NotFitted("OrdinalEncoder"))
        ));
        assert!(LabelEncoder::new().classes().is_err());
    }

    #[test]
    fn test_label_encoder() {
        let mut encoder = LabelEncoder::new();
        let codes = encoder
            .fit_transform(&symptom_table().column("Disease").unwrap())
            .unwrap();

        assert_eq!(codes, vec![0, 0, 0, 1, 1]);
        assert_eq!(encoder.classes().unwrap(), &["Mesiopathy", "Ritengitis"]);
        assert_eq!(encoder.inverse_transform(&[1, 0]).unwrap(), vec!["Ritengitis", "Mesiopathy"]);
        assert!(matches!(
            encoder.inverse_transform(&[2]),
            Err(SaplingError::InvalidArgument(_))
        ));
        assert!(encoder.transform(&["Flu"]).is_err());
    }
}
