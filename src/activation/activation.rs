use serde::{Serialize, Deserialize};
use std::f64::consts::E;

/// The two activations the fixed 2→hidden→3 topology uses: tanh on the
/// hidden layer, sigmoid on the output layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActivationFunction {
    Tanh,
    Sigmoid,
}

impl ActivationFunction {
    /// Element-wise activation.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Tanh => x.tanh(),
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
        }
    }

    /// Element-wise derivative expressed in terms of the activation *output*
    /// `fx = function(x)`: `1 - t²` for tanh, `fx·(1 - fx)` for sigmoid.
    ///
    /// The backward pass only keeps activations (not pre-activations), and
    /// both derivatives happen to be cheap functions of the output.
    pub fn output_derivative(&self, fx: f64) -> f64 {
        match self {
            ActivationFunction::Tanh => 1.0 - fx * fx,
            ActivationFunction::Sigmoid => fx * (1.0 - fx),
        }
    }
}
