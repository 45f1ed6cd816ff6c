use crate::math::matrix::Matrix;
use crate::network::params::Parameters;

/// One gradient per parameter tensor, produced by a single backward pass.
#[derive(Debug, Clone)]
pub struct Gradients {
    pub dw1: Matrix,
    pub db1: Matrix,
    pub dw2: Matrix,
    pub db2: Matrix,
}

/// Plain gradient descent — no momentum, no decay.
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one descent step to every parameter tensor: `P -= lr · dP`.
    pub fn step(&self, params: &mut Parameters, grads: &Gradients) {
        let lr = self.learning_rate;
        params.w1 = params.w1.clone() - grads.dw1.map(|x| x * lr);
        params.b1 = params.b1.clone() - grads.db1.map(|x| x * lr);
        params.w2 = params.w2.clone() - grads.dw2.map(|x| x * lr);
        params.b2 = params.b2.clone() - grads.db2.map(|x| x * lr);
    }
}
