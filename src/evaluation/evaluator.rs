use super::metrics::EvaluationReport;
use crate::error::{ElasticNetError, Result};
use crate::models::column;
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::metrics::{mean_absolute_error, mean_squared_error, r2};

pub struct ModelEvaluator;

impl ModelEvaluator {
    /// Computes regression metrics column by column
    pub fn evaluate_regression(
        y_true: &DenseMatrix<f64>,
        y_pred: &DenseMatrix<f64>,
        model_name: &str,
    ) -> Result<EvaluationReport> {
        if y_true.shape() != y_pred.shape() {
            return Err(ElasticNetError::ShapeInvariant {
                expected: y_true.shape(),
                actual: y_pred.shape(),
            });
        }

        let (_, q) = y_true.shape();
        let mut report = EvaluationReport::new(model_name.to_string(), q);

        for k in 0..q {
            let t = column(y_true, k);
            let p = column(y_pred, k);

            let mse = mean_squared_error(&t, &p);
            report.add_metric(k, "mse", mse);
            report.add_metric(k, "rmse", mse.sqrt());
            report.add_metric(k, "mae", mean_absolute_error(&t, &p));
            report.add_metric(k, "r2_score", r2(&t, &p));
            report.add_metric(k, "median_absolute_error", Self::median_absolute_error(&t, &p));
            report.add_metric(k, "pearson_correlation", Self::pearson_correlation(&t, &p));
        }

        Ok(report)
    }

    fn median_absolute_error(y_true: &[f64], y_pred: &[f64]) -> f64 {
        let mut errors: Vec<f64> = y_true
            .iter()
            .zip(y_pred)
            .map(|(t, p)| (t - p).abs())
            .collect();

        if errors.is_empty() {
            return 0.0;
        }

        errors.sort_by(|a, b| a.total_cmp(b));

        let n = errors.len();
        if n % 2 == 0 {
            (errors[n / 2 - 1] + errors[n / 2]) / 2.0
        } else {
            errors[n / 2]
        }
    }

    fn pearson_correlation(y_true: &[f64], y_pred: &[f64]) -> f64 {
        let n = y_true.len() as f64;
        if n == 0.0 {
            return 0.0;
        }

        let mean_true = y_true.iter().sum::<f64>() / n;
        let mean_pred = y_pred.iter().sum::<f64>() / n;

        let mut numerator = 0.0;
        let mut sum_sq_true = 0.0;
        let mut sum_sq_pred = 0.0;

        for (t, p) in y_true.iter().zip(y_pred) {
            let dt = t - mean_true;
            let dp = p - mean_pred;
            numerator += dt * dp;
            sum_sq_true += dt * dt;
            sum_sq_pred += dp * dp;
        }

        let denom = (sum_sq_true * sum_sq_pred).sqrt();
        if denom == 0.0 {
            return 0.0;
        }

        numerator / denom
    }
}
