use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{Error, Result};
use crate::math::matrix::Matrix;

/// Width of an input row: one value per logic operand.
pub const INPUT_WIDTH: usize = 2;
/// Width of an output row: one value per gate (XOR, AND, OR).
pub const OUTPUT_WIDTH: usize = 3;

/// The four trainable tensors of the 2→hidden→3 network.
///
/// Shapes are fixed at init time and never change; only the values mutate
/// during training. A `Parameters` value is exclusively owned by one
/// training run.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub w1: Matrix,
    pub b1: Matrix,
    pub w2: Matrix,
    pub b2: Matrix,
}

impl Parameters {
    /// Seeded initialization: `w1` and `w2` uniform on [-1, 1), biases zero.
    ///
    /// `w1` is drawn before `w2`, row-major each. That order is part of the
    /// determinism contract: the same `(hidden, seed)` pair always yields
    /// bit-identical parameters.
    pub fn init(hidden: usize, seed: u64) -> Result<Parameters> {
        if hidden == 0 {
            return Err(Error::Configuration("hidden width must be at least 1".into()));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let w1 = Matrix::uniform(INPUT_WIDTH, hidden, -1.0, 1.0, &mut rng);
        let b1 = Matrix::zeros(1, hidden);
        let w2 = Matrix::uniform(hidden, OUTPUT_WIDTH, -1.0, 1.0, &mut rng);
        let b2 = Matrix::zeros(1, OUTPUT_WIDTH);

        Ok(Parameters { w1, b1, w2, b2 })
    }

    pub fn hidden(&self) -> usize {
        self.w1.cols
    }

    /// Flattens w1, b1, w2, b2 — in that order, row-major — into the
    /// transport representation, each value narrowed to `f32`.
    ///
    /// The result carries no shape information; consumers reconstruct
    /// shapes from the hidden width they already know. Length is always
    /// `6·hidden + 3`.
    pub fn flatten(&self) -> Vec<f32> {
        let mut flat = Vec::with_capacity(
            self.w1.rows * self.w1.cols
                + self.b1.cols
                + self.w2.rows * self.w2.cols
                + self.b2.cols,
        );
        for tensor in [&self.w1, &self.b1, &self.w2, &self.b2] {
            for row in &tensor.data {
                flat.extend(row.iter().map(|&v| v as f32));
            }
        }
        flat
    }
}
