//! Batch Elastic Net regression over CSV data.
//!
//! Loads independent and dependent variables from delimited text, trains an
//! Elastic Net model, predicts a test set and checks that the prediction has
//! one row per test observation and one column per dependent variable.

pub mod config;
pub mod data_loading;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod pipeline;

pub use config::RunConfig;
pub use data_loading::{ColumnSelection, DataLoader, DataLoaderFactory, TextDataLoader};
#[cfg(feature = "csv-reader")]
pub use data_loading::CsvDataLoader;
pub use error::{ElasticNetError, Result};
pub use models::{ElasticNetModel, ElasticNetParams, RegressionModel};
pub use pipeline::{BatchDriver, Model, Predictor, RunOutput, Trainer, TrainerBuilder};
