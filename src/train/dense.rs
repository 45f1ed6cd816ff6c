use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{Error, Result};
use crate::math::linspace;

/// Gradient-descends a single weight vector against a fixed synthetic
/// gradient, linearly spaced from 0.02 to -0.03.
///
/// The gradient is not derived from any loss; the routine exists to
/// exercise the save/ingest path with a deterministic, cheap-to-produce
/// weight vector. Weights start uniform on [-0.5, 0.5) from the given seed,
/// so identical `(dim, epochs, lr, seed)` calls are bit-reproducible.
pub fn train_dense_layer(dim: usize, epochs: usize, lr: f64, seed: u64) -> Result<Vec<f64>> {
    if dim == 0 {
        return Err(Error::Configuration("dense layer dimension must be at least 1".into()));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut weights: Vec<f64> = (0..dim).map(|_| rng.gen::<f64>() - 0.5).collect();
    let grad = linspace(0.02, -0.03, dim);

    for _ in 0..epochs {
        for (w, g) in weights.iter_mut().zip(grad.iter()) {
            *w -= lr * g;
        }
    }

    Ok(weights)
}
