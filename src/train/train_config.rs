use std::sync::mpsc;

use crate::error::{Error, Result};
use crate::train::epoch_stats::EpochStats;

/// Compiled-in defaults; there is no environment configuration.
pub const DEFAULT_HIDDEN: usize = 4;
pub const DEFAULT_EPOCHS: usize = 8000;
pub const DEFAULT_LEARNING_RATE: f64 = 0.8;
pub const DEFAULT_SEED: u64 = 42;

/// Configuration for a `train_logic` run.
///
/// # Fields
/// - `hidden`        — hidden-layer width; must be at least 1
/// - `epochs`        — number of full-batch passes; the sole stopping
///                     criterion. `0` is a valid no-op run that returns the
///                     freshly initialized parameters.
/// - `learning_rate` — plain gradient-descent step size
/// - `seed`          — consumed by a generator constructed per run; no
///                     global generator state
/// - `progress_tx`   — optional channel sender; one `EpochStats` is sent per
///                     completed epoch. Observe-only: a dropped receiver
///                     never shortens the run.
pub struct TrainConfig {
    pub hidden: usize,
    pub epochs: usize,
    pub learning_rate: f64,
    pub seed: u64,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
}

impl TrainConfig {
    /// Creates a config with no progress channel.
    pub fn new(hidden: usize, epochs: usize, learning_rate: f64, seed: u64) -> Self {
        TrainConfig {
            hidden,
            epochs,
            learning_rate,
            seed,
            progress_tx: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.hidden == 0 {
            return Err(Error::Configuration("hidden width must be at least 1".into()));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(Error::Configuration(format!(
                "learning rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(DEFAULT_HIDDEN, DEFAULT_EPOCHS, DEFAULT_LEARNING_RATE, DEFAULT_SEED)
    }
}
