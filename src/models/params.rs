use serde::{Deserialize, Serialize};

use crate::error::{ElasticNetError, Result};

/// Hyper-parameters shared by every Elastic Net engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElasticNetParams {
    /// Overall regularization strength.
    pub alpha: f64,
    /// Mix between L1 and L2 (0.0 = pure L2, 1.0 = pure L1).
    pub l1_ratio: f64,
    /// Maximum number of coordinate descent sweeps.
    pub max_iter: usize,
    /// Stop once the largest coefficient change in a sweep drops below this.
    pub tol: f64,
    /// Whether to fit an intercept term.
    pub fit_intercept: bool,
}

impl Default for ElasticNetParams {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            l1_ratio: 0.5,
            max_iter: 1000,
            tol: 1e-4,
            fit_intercept: true,
        }
    }
}

impl ElasticNetParams {
    pub const SUPPORTED: [&'static str; 5] = ["alpha", "l1_ratio", "max_iter", "tol", "intercept"];

    /// Applies one string key/value pair, validating the value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "alpha" => {
                let alpha = parse_f64(key, value)?;
                if !(alpha >= 0.0 && alpha.is_finite()) {
                    return Err(invalid(key, value, "must be a finite number >= 0"));
                }
                self.alpha = alpha;
            }
            "l1_ratio" => {
                let ratio = parse_f64(key, value)?;
                if !(0.0..=1.0).contains(&ratio) {
                    return Err(invalid(key, value, "must lie in [0, 1]"));
                }
                self.l1_ratio = ratio;
            }
            "max_iter" => {
                let max_iter = value
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| invalid(key, value, "must be a positive integer"))?;
                if max_iter == 0 {
                    return Err(invalid(key, value, "must be a positive integer"));
                }
                self.max_iter = max_iter;
            }
            "tol" => {
                let tol = parse_f64(key, value)?;
                if !(tol > 0.0 && tol.is_finite()) {
                    return Err(invalid(key, value, "must be a finite number > 0"));
                }
                self.tol = tol;
            }
            "intercept" => {
                self.fit_intercept = parse_bool(key, value)?;
            }
            _ => {
                return Err(ElasticNetError::InvalidParameter(format!(
                    "unknown parameter '{}'",
                    key
                )))
            }
        }
        Ok(())
    }

    pub fn l1_penalty(&self) -> f64 {
        self.alpha * self.l1_ratio
    }

    pub fn l2_penalty(&self) -> f64 {
        self.alpha * (1.0 - self.l1_ratio)
    }
}

pub(crate) fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(invalid(key, value, "must be true or false")),
    }
}

fn parse_f64(key: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| invalid(key, value, "must be a number"))
}

fn invalid(key: &str, value: &str, reason: &str) -> ElasticNetError {
    ElasticNetError::InvalidParameter(format!("{} = '{}' {}", key, value, reason))
}
