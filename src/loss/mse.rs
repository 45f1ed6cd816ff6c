use crate::math::matrix::Matrix;

pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE over a whole batch: mean((predicted - expected)²) across
    /// every entry of the matrices.
    pub fn loss(predicted: &Matrix, expected: &Matrix) -> f64 {
        let n = (predicted.rows * predicted.cols) as f64;
        predicted.data.iter().zip(expected.data.iter())
            .flat_map(|(row_p, row_e)| row_p.iter().zip(row_e.iter()))
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>() / n
    }

    /// Per-entry gradient: predicted - expected.
    pub fn derivative(predicted: &Matrix, expected: &Matrix) -> Matrix {
        predicted.clone() - expected.clone()
    }
}
