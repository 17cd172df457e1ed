use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::elastic_net::{ElasticNet, ElasticNetParameters};

use super::params::{parse_bool, ElasticNetParams};
use super::{check_prediction_shape, check_training_shapes, column, from_columns, RegressionModel};
use crate::error::{ElasticNetError, Result};

type SmartcoreElasticNet = ElasticNet<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// Elastic Net delegated to smartcore, one fitted model per dependent variable.
///
/// smartcore always fits an intercept, so `intercept = false` is rejected.
pub struct SmartcoreElasticNetWrapper {
    models: Vec<SmartcoreElasticNet>,
    n_features: Option<usize>,
    params: ElasticNetParams,
    normalize: bool,
}

impl SmartcoreElasticNetWrapper {
    pub fn new() -> Self {
        Self {
            models: Vec::new(),
            n_features: None,
            params: ElasticNetParams::default(),
            normalize: true,
        }
    }

    fn parameters(&self) -> ElasticNetParameters {
        let mut parameters = ElasticNetParameters::default();
        parameters.alpha = self.params.alpha;
        parameters.l1_ratio = self.params.l1_ratio;
        parameters.normalize = self.normalize;
        parameters.tol = self.params.tol;
        parameters.max_iter = self.params.max_iter;
        parameters
    }
}

impl Default for SmartcoreElasticNetWrapper {
    fn default() -> Self {
        Self::new()
    }
}

impl RegressionModel for SmartcoreElasticNetWrapper {
    fn get_name(&self) -> &str {
        "Elastic Net (smartcore)"
    }

    fn get_supported_params(&self) -> Vec<&str> {
        let mut supported = ElasticNetParams::SUPPORTED.to_vec();
        supported.push("normalize");
        supported
    }

    fn set_param(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "normalize" => {
                self.normalize = parse_bool(key, value)?;
                Ok(())
            }
            "intercept" => {
                if !parse_bool(key, value)? {
                    return Err(ElasticNetError::InvalidParameter(
                        "the smartcore engine always fits an intercept".to_string(),
                    ));
                }
                Ok(())
            }
            _ => self.params.set(key, value),
        }
    }

    fn train(&mut self, x: &DenseMatrix<f64>, y: &DenseMatrix<f64>) -> Result<()> {
        let (n, p, q) = check_training_shapes(x, y)?;
        log::info!(
            "Training smartcore Elastic Net on {} observations, {} features, {} dependent variables",
            n, p, q
        );

        let models = (0..q)
            .map(|k| {
                let y_k = column(y, k);
                SmartcoreElasticNet::fit(x, &y_k, self.parameters()).map_err(ElasticNetError::from)
            })
            .collect::<Result<Vec<_>>>()?;

        self.models = models;
        self.n_features = Some(p);
        Ok(())
    }

    fn predict(&self, x: &DenseMatrix<f64>) -> Result<DenseMatrix<f64>> {
        let n_features = self.n_features.ok_or(ElasticNetError::ModelNotTrained)?;
        let m = check_prediction_shape(x, n_features)?;

        let columns = self
            .models
            .iter()
            .map(|model| model.predict(x).map_err(ElasticNetError::from))
            .collect::<Result<Vec<Vec<f64>>>>()?;

        from_columns(&columns, m)
    }

    fn n_features(&self) -> Option<usize> {
        self.n_features
    }

    fn n_targets(&self) -> Option<usize> {
        self.n_features.map(|_| self.models.len())
    }
}
