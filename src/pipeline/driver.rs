use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;

use super::predictor::Predictor;
use super::trainer::Trainer;
use crate::config::RunConfig;
use crate::data_loading::DataLoaderFactory;
use crate::error::{ElasticNetError, Result};
use crate::evaluation::{EvaluationReport, ModelEvaluator};

/// Everything a batch run produces.
#[derive(Debug)]
pub struct RunOutput {
    pub prediction: DenseMatrix<f64>,
    pub ground_truth: DenseMatrix<f64>,
    pub report: EvaluationReport,
}

impl RunOutput {
    /// First `n` rows of `m` for display.
    pub fn head(m: &DenseMatrix<f64>, n: usize) -> Vec<Vec<f64>> {
        let (rows, cols) = m.shape();
        (0..rows.min(n))
            .map(|i| (0..cols).map(|j| *m.get((i, j))).collect())
            .collect()
    }

    pub fn format_head(m: &DenseMatrix<f64>, n: usize) -> String {
        Self::head(m, n)
            .iter()
            .map(|row| {
                let cells: Vec<String> = row.iter().map(|v| format!("{:>14.6}", v)).collect();
                format!("[{}]", cells.join(" "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Sequences load -> train -> load test -> predict -> shape check.
/// The first failing step aborts the run.
pub struct BatchDriver {
    config: RunConfig,
}

impl BatchDriver {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn run(&self) -> Result<RunOutput> {
        let config = &self.config;
        let loader = DataLoaderFactory::create_or_default(config.loader.as_deref())?;
        log::info!("Using {}", loader.get_name());

        let indep_data = loader.load(&config.train_file, &config.feature_columns)?;
        let dep_data = loader.load(&config.train_file, &config.target_columns)?;
        log::info!(
            "Loaded training data from {}: {:?} independent, {:?} dependent",
            config.train_file.display(),
            indep_data.shape(),
            dep_data.shape()
        );

        let mut builder = Trainer::builder()
            .model(&config.model)
            .intercept(config.intercept_flag);
        for (key, value) in &config.model_params {
            builder = builder.model_param(key, value);
        }
        let trainer = builder.build()?;
        let model = trainer.train(&indep_data, &dep_data)?;

        let pdata = loader.load(&config.test_file, &config.feature_columns)?;
        let ptdata = loader.load(&config.test_file, &config.target_columns)?;
        log::info!(
            "Loaded test data from {}: {} observations",
            config.test_file.display(),
            pdata.shape().0
        );

        let prediction = Predictor::new().predict(&pdata, &model)?;

        let expected = (pdata.shape().0, dep_data.shape().1);
        if prediction.shape() != expected {
            return Err(ElasticNetError::ShapeInvariant {
                expected,
                actual: prediction.shape(),
            });
        }

        let report = ModelEvaluator::evaluate_regression(&ptdata, &prediction, model.name())?;

        Ok(RunOutput {
            prediction,
            ground_truth: ptdata,
            report,
        })
    }
}
