use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;

use super::coordinate_descent::{fit_target, DesignColumns};
use super::params::ElasticNetParams;
use super::{check_prediction_shape, check_training_shapes, column, RegressionModel};
use crate::error::{ElasticNetError, Result};

/// Fitted Elastic Net parameters, one coefficient row per dependent variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElasticNetModel {
    coefficients: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

impl ElasticNetModel {
    pub fn new(coefficients: Vec<Vec<f64>>, intercepts: Vec<f64>) -> Result<Self> {
        if coefficients.is_empty() || coefficients.len() != intercepts.len() {
            return Err(ElasticNetError::InvalidInput(format!(
                "{} coefficient rows for {} intercepts",
                coefficients.len(),
                intercepts.len()
            )));
        }
        let p = coefficients[0].len();
        if p == 0 || coefficients.iter().any(|row| row.len() != p) {
            return Err(ElasticNetError::InvalidInput(
                "coefficient rows must be non-empty and of equal length".to_string(),
            ));
        }
        Ok(Self {
            coefficients,
            intercepts,
        })
    }

    /// Coefficients for dependent variable `k`, `None` when out of range.
    pub fn coefficients(&self, k: usize) -> Option<&[f64]> {
        self.coefficients.get(k).map(Vec::as_slice)
    }

    pub fn intercepts(&self) -> &[f64] {
        &self.intercepts
    }

    pub fn n_features(&self) -> usize {
        self.coefficients[0].len()
    }

    pub fn n_targets(&self) -> usize {
        self.intercepts.len()
    }

    pub fn predict(&self, x: &DenseMatrix<f64>) -> Result<DenseMatrix<f64>> {
        let m = check_prediction_shape(x, self.n_features())?;
        let p = self.n_features();

        let rows: Vec<Vec<f64>> = (0..m)
            .map(|i| {
                self.coefficients
                    .iter()
                    .zip(&self.intercepts)
                    .map(|(beta, b)| b + (0..p).map(|j| beta[j] * *x.get((i, j))).sum::<f64>())
                    .collect()
            })
            .collect();

        Ok(DenseMatrix::from_2d_vec(&rows)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let model: Self = serde_json::from_str(json)?;
        // re-check invariants that serde cannot express
        Self::new(model.coefficients, model.intercepts)
    }
}

/// Elastic Net solved by the in-crate coordinate descent.
pub struct ElasticNetWrapper {
    pub(crate) model: Option<ElasticNetModel>,
    params: ElasticNetParams,
}

impl ElasticNetWrapper {
    pub fn new() -> Self {
        Self {
            model: None,
            params: ElasticNetParams::default(),
        }
    }

    pub fn with_params(params: ElasticNetParams) -> Self {
        Self { model: None, params }
    }

    pub fn params(&self) -> &ElasticNetParams {
        &self.params
    }

    pub fn model(&self) -> Option<&ElasticNetModel> {
        self.model.as_ref()
    }
}

impl Default for ElasticNetWrapper {
    fn default() -> Self {
        Self::new()
    }
}

impl RegressionModel for ElasticNetWrapper {
    fn get_name(&self) -> &str {
        "Elastic Net (coordinate descent)"
    }

    fn get_supported_params(&self) -> Vec<&str> {
        ElasticNetParams::SUPPORTED.to_vec()
    }

    fn set_param(&mut self, key: &str, value: &str) -> Result<()> {
        self.params.set(key, value)
    }

    fn train(&mut self, x: &DenseMatrix<f64>, y: &DenseMatrix<f64>) -> Result<()> {
        let (n, p, q) = check_training_shapes(x, y)?;
        log::info!(
            "Training Elastic Net on {} observations, {} features, {} dependent variables (alpha={}, l1_ratio={}, intercept={})",
            n, p, q, self.params.alpha, self.params.l1_ratio, self.params.fit_intercept
        );

        let design = DesignColumns::new(
            (0..p).map(|j| column(x, j)).collect(),
            n,
            self.params.fit_intercept,
        );

        let mut coefficients = Vec::with_capacity(q);
        let mut intercepts = Vec::with_capacity(q);
        for k in 0..q {
            let outcome = fit_target(&design, &column(y, k), &self.params);
            if outcome.converged {
                log::debug!("target {} converged after {} sweeps", k, outcome.iterations);
            } else {
                log::warn!(
                    "target {} did not converge within {} sweeps (tol={})",
                    k, self.params.max_iter, self.params.tol
                );
            }
            coefficients.push(outcome.coefficients);
            intercepts.push(outcome.intercept);
        }

        self.model = Some(ElasticNetModel::new(coefficients, intercepts)?);
        Ok(())
    }

    fn predict(&self, x: &DenseMatrix<f64>) -> Result<DenseMatrix<f64>> {
        self.model
            .as_ref()
            .ok_or(ElasticNetError::ModelNotTrained)?
            .predict(x)
    }

    fn n_features(&self) -> Option<usize> {
        self.model.as_ref().map(ElasticNetModel::n_features)
    }

    fn n_targets(&self) -> Option<usize> {
        self.model.as_ref().map(ElasticNetModel::n_targets)
    }
}
