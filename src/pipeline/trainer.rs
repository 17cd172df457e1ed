use std::fmt;

use smartcore::linalg::basic::matrix::DenseMatrix;

use super::builder::TrainerBuilder;
use crate::error::{ElasticNetError, Result};
use crate::models::factory::ModelFactory;
use crate::models::RegressionModel;

/// Trained model handed from the [`Trainer`] to the [`super::Predictor`].
///
/// The fitted engine stays private; callers only see its dimensions.
pub struct Model {
    engine: Box<dyn RegressionModel>,
    model_type: String,
    n_features: usize,
    n_targets: usize,
}

impl Model {
    pub fn name(&self) -> &str {
        self.engine.get_name()
    }

    pub fn model_type(&self) -> &str {
        &self.model_type
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn n_targets(&self) -> usize {
        self.n_targets
    }

    pub(crate) fn engine(&self) -> &dyn RegressionModel {
        self.engine.as_ref()
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("model_type", &self.model_type)
            .field("n_features", &self.n_features)
            .field("n_targets", &self.n_targets)
            .finish()
    }
}

/// Configured training step; every call to [`Trainer::train`] fits a fresh engine.
#[derive(Debug, Clone)]
pub struct Trainer {
    model_type: String,
    model_params: Vec<(String, String)>,
    intercept_flag: bool,
}

impl Trainer {
    pub(crate) fn new(
        model_type: String,
        model_params: Vec<(String, String)>,
        intercept_flag: bool,
    ) -> Self {
        Self {
            model_type,
            model_params,
            intercept_flag,
        }
    }

    pub fn builder() -> TrainerBuilder {
        TrainerBuilder::new()
    }

    pub fn model_type(&self) -> &str {
        &self.model_type
    }

    pub fn intercept_flag(&self) -> bool {
        self.intercept_flag
    }

    /// Fits `x` (n × p) against `y` (n × q).
    pub fn train(&self, x: &DenseMatrix<f64>, y: &DenseMatrix<f64>) -> Result<Model> {
        let mut engine = ModelFactory::create(&self.model_type)?;
        for (key, value) in &self.model_params {
            engine.set_param(key, value)?;
        }
        engine.set_param("intercept", &self.intercept_flag.to_string())?;

        engine.train(x, y)?;

        let n_features = engine.n_features().ok_or(ElasticNetError::ModelNotTrained)?;
        let n_targets = engine.n_targets().ok_or(ElasticNetError::ModelNotTrained)?;
        log::info!(
            "{} trained: {} features -> {} dependent variables",
            engine.get_name(),
            n_features,
            n_targets
        );

        Ok(Model {
            engine,
            model_type: self.model_type.clone(),
            n_features,
            n_targets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartcore::linalg::basic::arrays::Array;

    fn matrix(rows: usize, cols: usize, f: impl Fn(usize, usize) -> f64) -> DenseMatrix<f64> {
        let data: Vec<Vec<f64>> = (0..rows).map(|i| (0..cols).map(|j| f(i, j)).collect()).collect();
        DenseMatrix::from_2d_vec(&data).unwrap()
    }

    #[test]
    fn ten_features_two_targets() {
        let x = matrix(20, 10, |i, j| ((i * (j + 3)) % 11) as f64);
        let y = matrix(20, 2, |i, j| (i + j) as f64);
        let trainer = Trainer::builder().model("elastic_net").build().unwrap();

        let model = trainer.train(&x, &y).unwrap();
        assert_eq!(model.n_features(), 10);
        assert_eq!(model.n_targets(), 2);
        assert_eq!(model.model_type(), "elastic_net");
        assert!(model.engine().is_trained());
        assert_eq!(x.shape(), (20, 10));
    }

    #[test]
    fn mismatched_rows_fail() {
        let x = matrix(5, 3, |i, j| (i + j) as f64);
        let y = matrix(4, 1, |i, _| i as f64);
        let trainer = Trainer::builder().model("elastic_net").build().unwrap();
        assert!(matches!(trainer.train(&x, &y), Err(ElasticNetError::InvalidInput(_))));
    }
}
