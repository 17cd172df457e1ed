//! Error types for the batch Elastic Net pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, ElasticNetError>;

/// Errors that can occur while loading data, training or predicting.
#[derive(Error, Debug)]
pub enum ElasticNetError {
    /// The input file could not be read.
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A row or value in delimited text could not be parsed.
    #[error("Parse error at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },
    /// The input contained no data rows.
    #[error("No data: {0}")]
    EmptyData(String),
    /// Training input has an unusable shape.
    #[error("Invalid input data: {0}")]
    InvalidInput(String),
    /// Unknown model, unknown parameter or an out-of-range value.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// Prediction input does not match the trained feature count.
    #[error("Dimension mismatch: expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    /// The model has not been trained yet.
    #[error("Model is not trained yet")]
    ModelNotTrained,
    /// The prediction does not have the shape `(test rows, dependent columns)`.
    #[error("Prediction shape {actual:?} does not match expected {expected:?}")]
    ShapeInvariant {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    /// An error reported by the csv reader itself.
    #[cfg(feature = "csv-reader")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// An error reported by smartcore.
    #[error("Backend error: {0}")]
    Backend(String),
    /// A model could not be serialized or deserialized.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<smartcore::error::Failed> for ElasticNetError {
    fn from(err: smartcore::error::Failed) -> Self {
        ElasticNetError::Backend(err.to_string())
    }
}

impl From<serde_json::Error> for ElasticNetError {
    fn from(err: serde_json::Error) -> Self {
        ElasticNetError::Serialization(err.to_string())
    }
}

