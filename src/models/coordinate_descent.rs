//! Cyclic coordinate descent for the Elastic Net objective
//!
//! ```text
//! minimize 1/(2n) * ||y - Xβ - b||² + α * ρ * ||β||₁ + α * (1 - ρ) / 2 * ||β||²
//! ```
//!
//! Each target column is solved independently. With an intercept the data is
//! centred first and `b = ȳ - x̄·β`.

use super::params::ElasticNetParams;

/// Columns whose squared norm falls below this keep a zero coefficient.
const MIN_COLUMN_NORM_SQ: f64 = 1e-12;

/// Feature columns prepared once and reused for every target.
pub struct DesignColumns {
    columns: Vec<Vec<f64>>,
    means: Vec<f64>,
    norms_sq: Vec<f64>,
    n_samples: usize,
}

impl DesignColumns {
    /// `columns` holds one vector per feature, each of length `n_samples`.
    pub fn new(mut columns: Vec<Vec<f64>>, n_samples: usize, center: bool) -> Self {
        let means: Vec<f64> = if center {
            columns
                .iter()
                .map(|c| c.iter().sum::<f64>() / n_samples as f64)
                .collect()
        } else {
            vec![0.0; columns.len()]
        };

        if center {
            for (col, mean) in columns.iter_mut().zip(&means) {
                for v in col.iter_mut() {
                    *v -= mean;
                }
            }
        }

        let norms_sq = columns
            .iter()
            .map(|c| c.iter().map(|v| v * v).sum())
            .collect();

        Self {
            columns,
            means,
            norms_sq,
            n_samples,
        }
    }

    pub fn n_features(&self) -> usize {
        self.columns.len()
    }
}

/// Solution for one target column.
#[derive(Debug, Clone)]
pub struct FitOutcome {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// Soft-thresholding operator used for the L1 part of the update.
pub fn soft_threshold(x: f64, lambda: f64) -> f64 {
    if x > lambda {
        x - lambda
    } else if x < -lambda {
        x + lambda
    } else {
        0.0
    }
}

pub fn fit_target(design: &DesignColumns, y: &[f64], params: &ElasticNetParams) -> FitOutcome {
    let n = design.n_samples as f64;
    let p = design.n_features();

    let y_mean = if params.fit_intercept {
        y.iter().sum::<f64>() / n
    } else {
        0.0
    };

    // residual = y_centered - Xβ, starting from β = 0
    let mut residual: Vec<f64> = y.iter().map(|v| v - y_mean).collect();
    let mut beta = vec![0.0; p];

    let l1 = params.l1_penalty();
    let l2 = params.l2_penalty();

    let mut iterations = 0;
    let mut converged = false;

    while iterations < params.max_iter {
        iterations += 1;
        let mut max_change = 0.0f64;

        for j in 0..p {
            let norm_sq = design.norms_sq[j];
            if norm_sq < MIN_COLUMN_NORM_SQ {
                continue;
            }
            let col = &design.columns[j];

            let rho: f64 = col
                .iter()
                .zip(&residual)
                .map(|(x, r)| x * r)
                .sum::<f64>()
                + norm_sq * beta[j];

            let old = beta[j];
            let new = soft_threshold(rho / n, l1) / (norm_sq / n + l2);
            let delta = new - old;

            if delta != 0.0 {
                for (r, x) in residual.iter_mut().zip(col) {
                    *r -= delta * x;
                }
                beta[j] = new;
                max_change = max_change.max(delta.abs());
            }
        }

        if max_change < params.tol {
            converged = true;
            break;
        }
    }

    let intercept = if params.fit_intercept {
        y_mean
            - beta
                .iter()
                .zip(&design.means)
                .map(|(b, m)| b * m)
                .sum::<f64>()
    } else {
        0.0
    };

    FitOutcome {
        coefficients: beta,
        intercept,
        iterations,
        converged,
    }
}
