use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;

use super::trainer::Model;
use crate::error::{ElasticNetError, Result};

/// Prediction step consuming a trained [`Model`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Predictor;

impl Predictor {
    pub fn new() -> Self {
        Self
    }

    /// Predicts `x` (m × p) and returns an `m × q` matrix.
    ///
    /// A feature count different from training fails instead of being
    /// truncated or padded.
    pub fn predict(&self, x: &DenseMatrix<f64>, model: &Model) -> Result<DenseMatrix<f64>> {
        let (m, p) = x.shape();
        if p != model.n_features() {
            return Err(ElasticNetError::DimensionMismatch {
                expected: model.n_features(),
                actual: p,
            });
        }

        let prediction = model.engine().predict(x)?;

        let expected = (m, model.n_targets());
        if prediction.shape() != expected {
            return Err(ElasticNetError::ShapeInvariant {
                expected,
                actual: prediction.shape(),
            });
        }
        log::debug!("predicted {} observations", m);
        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Trainer;

    fn fitted(p: usize) -> Model {
        let x: Vec<Vec<f64>> = (0..12)
            .map(|i| (0..p).map(|j| ((i + 1) * (j + 2) % 7) as f64).collect())
            .collect();
        let y: Vec<Vec<f64>> = (0..12).map(|i| vec![i as f64, 2.0 * i as f64]).collect();
        Trainer::builder()
            .model("elastic_net")
            .build()
            .unwrap()
            .train(
                &DenseMatrix::from_2d_vec(&x).unwrap(),
                &DenseMatrix::from_2d_vec(&y).unwrap(),
            )
            .unwrap()
    }

    #[test]
    fn output_has_rows_of_input_and_targets_of_training() {
        let model = fitted(4);
        let x = DenseMatrix::from_2d_vec(&vec![vec![1.0, 2.0, 3.0, 4.0]; 3]).unwrap();
        let pred = Predictor::new().predict(&x, &model).unwrap();
        assert_eq!(pred.shape(), (3, 2));
    }

    #[test]
    fn mismatched_feature_count_fails_deterministically() {
        let model = fitted(4);
        let x = DenseMatrix::from_2d_vec(&vec![vec![1.0, 2.0, 3.0]; 3]).unwrap();
        for _ in 0..3 {
            assert!(matches!(
                Predictor::new().predict(&x, &model),
                Err(ElasticNetError::DimensionMismatch { expected: 4, actual: 3 })
            ));
        }
    }
}
