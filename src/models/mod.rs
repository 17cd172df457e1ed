use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::{ElasticNetError, Result};

/// Common interface of the regression engines.
///
/// `x` is `n × p` (observations × features), `y` is `n × q`
/// (observations × dependent variables); predictions come back as `m × q`.
pub trait RegressionModel {
    fn get_name(&self) -> &str;

    fn get_supported_params(&self) -> Vec<&str>;

    fn set_param(&mut self, key: &str, value: &str) -> Result<()>;

    fn train(&mut self, x: &DenseMatrix<f64>, y: &DenseMatrix<f64>) -> Result<()>;

    fn predict(&self, x: &DenseMatrix<f64>) -> Result<DenseMatrix<f64>>;

    /// Feature count seen during training, `None` before training.
    fn n_features(&self) -> Option<usize>;

    /// Dependent-variable count seen during training, `None` before training.
    fn n_targets(&self) -> Option<usize>;

    fn is_trained(&self) -> bool {
        self.n_features().is_some()
    }
}

pub mod params;
pub mod coordinate_descent;
pub mod elastic_net;
pub mod smartcore_elastic_net;
pub mod factory;

pub use params::ElasticNetParams;
pub use elastic_net::{ElasticNetModel, ElasticNetWrapper};
pub use smartcore_elastic_net::SmartcoreElasticNetWrapper;
pub use factory::ModelFactory;

/// Validates training shapes and returns `(n, p, q)`.
pub(crate) fn check_training_shapes(
    x: &DenseMatrix<f64>,
    y: &DenseMatrix<f64>,
) -> Result<(usize, usize, usize)> {
    let (n, p) = x.shape();
    let (n_y, q) = y.shape();

    if n != n_y {
        return Err(ElasticNetError::InvalidInput(format!(
            "independent data has {} rows but dependent data has {}",
            n, n_y
        )));
    }
    if n == 0 || p == 0 || q == 0 {
        return Err(ElasticNetError::InvalidInput(format!(
            "cannot train on empty data (x: {}x{}, y: {}x{})",
            n, p, n_y, q
        )));
    }
    Ok((n, p, q))
}

/// Checks the feature count of prediction input against a trained model.
pub(crate) fn check_prediction_shape(x: &DenseMatrix<f64>, n_features: usize) -> Result<usize> {
    let (m, p) = x.shape();
    if p != n_features {
        return Err(ElasticNetError::DimensionMismatch {
            expected: n_features,
            actual: p,
        });
    }
    Ok(m)
}

/// Copies column `j` out of a dense matrix.
pub(crate) fn column(m: &DenseMatrix<f64>, j: usize) -> Vec<f64> {
    let (rows, _) = m.shape();
    (0..rows).map(|i| *m.get((i, j))).collect()
}

/// Builds an `m × q` matrix from `q` columns of length `m`.
pub(crate) fn from_columns(columns: &[Vec<f64>], m: usize) -> Result<DenseMatrix<f64>> {
    let rows: Vec<Vec<f64>> = (0..m)
        .map(|i| columns.iter().map(|c| c[i]).collect())
        .collect();
    Ok(DenseMatrix::from_2d_vec(&rows)?)
}
