use std::time::Instant;

use crate::activation::ActivationFunction;
use crate::dataset::logic::LogicDataset;
use crate::error::{Error, Result};
use crate::loss::mse::MseLoss;
use crate::math::matrix::hadamard;
use crate::network::forward::{forward, threshold_predictions};
use crate::network::params::Parameters;
use crate::optim::sgd::{Gradients, Sgd};
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

/// Final parameters of a training run plus the thresholded predictions for
/// the training inputs. Immutable once produced.
#[derive(Debug, Clone)]
pub struct TrainedModel {
    pub params: Parameters,
    /// One row per truth-table input, columns XOR, AND, OR, values 0/1.
    pub predictions: Vec<Vec<u8>>,
}

/// Trains the 2→hidden→3 network on the full dataset for exactly
/// `config.epochs` iterations and returns the result.
///
/// Every epoch is one full-batch pass: forward, analytic backward through
/// both layers, one gradient-descent update. No shuffling, no mini-batches,
/// no convergence check — the epoch count alone decides when to stop, which
/// keeps runs fully reproducible.
///
/// # Errors
/// `Error::Configuration` for a zero hidden width, a non-positive or
/// non-finite learning rate, or an empty dataset.
pub fn train_logic(dataset: &LogicDataset, config: &TrainConfig) -> Result<TrainedModel> {
    config.validate()?;
    if dataset.is_empty() {
        return Err(Error::Configuration("dataset must not be empty".into()));
    }

    let mut params = Parameters::init(config.hidden, config.seed)?;
    let optimizer = Sgd::new(config.learning_rate);

    let inputs = &dataset.inputs;
    let targets = &dataset.targets;
    let batch_scale = 2.0 / dataset.len() as f64;

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();

        let cache = forward(inputs, &params);

        // Output layer: MSE gradient with the sigmoid derivative folded in.
        // dz2 = (y_hat - targets) ⊙ y_hat ⊙ (1 - y_hat) · (2/N)
        let diff = MseLoss::derivative(&cache.y_hat, targets);
        let sig_prime = cache.y_hat.map(|y| ActivationFunction::Sigmoid.output_derivative(y));
        let dz2 = hadamard(&diff, &sig_prime).map(|v| v * batch_scale);

        let dw2 = cache.a1.transpose() * dz2.clone();
        let db2 = dz2.column_sums();

        // Hidden layer: propagate through W2, apply the tanh derivative.
        let da1 = dz2 * params.w2.transpose();
        let tanh_prime = cache.a1.map(|a| ActivationFunction::Tanh.output_derivative(a));
        let dz1 = hadamard(&da1, &tanh_prime);

        let dw1 = inputs.transpose() * dz1.clone();
        let db1 = dz1.column_sums();

        optimizer.step(&mut params, &Gradients { dw1, db1, dw2, db2 });

        if let Some(ref tx) = config.progress_tx {
            let stats = EpochStats {
                epoch,
                total_epochs: config.epochs,
                loss: MseLoss::loss(&cache.y_hat, targets),
                elapsed_ms: t_start.elapsed().as_millis() as u64,
            };
            // Observe-only channel: a dropped receiver must not cut the
            // run short, so send errors are ignored.
            let _ = tx.send(stats);
        }
    }

    let cache = forward(inputs, &params);
    let predictions = threshold_predictions(&cache.y_hat);

    Ok(TrainedModel { params, predictions })
}
