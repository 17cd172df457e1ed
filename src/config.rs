use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::data_loading::ColumnSelection;
use crate::error::Result;

/// Configuration of one batch run.
///
/// The default reproduces the bundled example: 10 independent and
/// 2 dependent variables per observation, intercept fitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub train_file: PathBuf,
    pub test_file: PathBuf,
    pub feature_columns: ColumnSelection,
    pub target_columns: ColumnSelection,
    pub intercept_flag: bool,
    /// Engine name understood by [`crate::models::ModelFactory`].
    pub model: String,
    pub model_params: BTreeMap<String, String>,
    /// Loader name, `None` picks the fastest one compiled in.
    pub loader: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            train_file: PathBuf::from("./data/batch/linear_regression_train.csv"),
            test_file: PathBuf::from("./data/batch/linear_regression_test.csv"),
            feature_columns: ColumnSelection::span(0..10),
            target_columns: ColumnSelection::span(10..12),
            intercept_flag: true,
            model: "elastic_net".to_string(),
            model_params: BTreeMap::new(),
            loader: None,
        }
    }
}

impl RunConfig {
    /// Parses a JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
