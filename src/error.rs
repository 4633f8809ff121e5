//! Error types for the Sapling library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`SaplingError`] enum. Constructor helpers keep call sites short:
//!
//! ```
//! use sapling::error::{Result, SaplingError};
//!
//! fn check(alpha: f64) -> Result<()> {
//!     if alpha <= 0.0 {
//!         return Err(SaplingError::config("alpha must be positive"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(1.0).is_ok());
//! assert!(check(0.0).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Sapling operations.
#[derive(Error, Debug)]
pub enum SaplingError {
    /// I/O errors (config files, lexicons, corpora).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Part-of-speech tagging errors.
    #[error("Tagging error: {0}")]
    Tagging(String),

    /// Model fitting or prediction errors.
    #[error("Model error: {0}")]
    Model(String),

    /// Tabular dataset errors (missing columns, ragged rows).
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Invalid configuration values.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Corpus or lexicon loading errors.
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// A categorical value that was not seen while fitting an encoder.
    #[error("Found unknown categories [{}] in column {column} during transform", format_categories(.values))]
    UnknownCategory {
        /// Index of the offending column.
        column: usize,
        /// The unseen values of that column.
        values: Vec<String>,
    },

    /// A model or encoder was used before `fit`.
    #[error("This {0} instance is not fitted yet")]
    NotFitted(&'static str),

    /// Invalid argument passed to an operation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

fn format_categories(values: &[String]) -> String {
    values
        .iter()
        .map(|v| format!("'{v}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for operations that may fail with SaplingError.
pub type Result<T> = std::result::Result<T, SaplingError>;

impl SaplingError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SaplingError::Analysis(msg.into())
    }

    /// Create a new tagging error.
    pub fn tagging<S: Into<String>>(msg: S) -> Self {
        SaplingError::Tagging(msg.into())
    }

    /// Create a new model error.
    pub fn model<S: Into<String>>(msg: S) -> Self {
        SaplingError::Model(msg.into())
    }

    /// Create a new dataset error.
    pub fn dataset<S: Into<String>>(msg: S) -> Self {
        SaplingError::Dataset(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SaplingError::Config(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        SaplingError::Corpus(msg.into())
    }

    /// Create a new unknown category error.
    pub fn unknown_category(column: usize, values: Vec<String>) -> Self {
        SaplingError::UnknownCategory { column, values }
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SaplingError::InvalidArgument(msg.into())
    }

    /// Whether this error reports a category unseen during encoding fit.
    pub fn is_unknown_category(&self) -> bool {
        matches!(self, SaplingError::UnknownCategory { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SaplingError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = SaplingError::config("alpha must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid configuration: alpha must be positive"
        );

        let error = SaplingError::NotFitted("OrdinalEncoder");
        assert_eq!(
            error.to_string(),
            "This OrdinalEncoder instance is not fitted yet"
        );
    }

    #[test]
    fn test_unknown_category_message() {
        let error = SaplingError::unknown_category(0, vec!["Cough".to_string()]);
        assert_eq!(
            error.to_string(),
            "Found unknown categories ['Cough'] in column 0 during transform"
        );
        assert!(error.is_unknown_category());

        let error =
            SaplingError::unknown_category(1, vec!["Rash".to_string(), "Chills".to_string()]);
        assert_eq!(
            error.to_string(),
            "Found unknown categories ['Rash', 'Chills'] in column 1 during transform"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = SaplingError::from(io_error);

        match error {
            SaplingError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
