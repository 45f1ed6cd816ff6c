use crate::activation::ActivationFunction;
use crate::math::matrix::Matrix;
use crate::network::params::Parameters;

/// Activations produced by one forward pass. Lives for a single
/// forward/backward step; the training loop rebuilds it every epoch.
#[derive(Debug, Clone)]
pub struct ForwardCache {
    /// Hidden activations, tanh(inputs·W1 + b1), one row per sample.
    pub a1: Matrix,
    /// Output activations, sigmoid(a1·W2 + b2), in (0, 1).
    pub y_hat: Matrix,
}

/// Runs the network on a batch of input rows. Pure function of `inputs`
/// and `params`; used inside the training loop and for standalone replay
/// on arbitrary inputs.
pub fn forward(inputs: &Matrix, params: &Parameters) -> ForwardCache {
    let z1 = (inputs.clone() * params.w1.clone()).add_row(&params.b1);
    let a1 = z1.map(|x| ActivationFunction::Tanh.function(x));

    let z2 = (a1.clone() * params.w2.clone()).add_row(&params.b2);
    let y_hat = z2.map(|x| ActivationFunction::Sigmoid.function(x));

    ForwardCache { a1, y_hat }
}

/// Casts output activations to hard 0/1 predictions at the 0.5 boundary.
pub fn threshold_predictions(y_hat: &Matrix) -> Vec<Vec<u8>> {
    y_hat.data.iter()
        .map(|row| row.iter().map(|&v| if v > 0.5 { 1 } else { 0 }).collect())
        .collect()
}
