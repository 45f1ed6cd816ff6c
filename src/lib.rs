pub mod math;
pub mod activation;
pub mod dataset;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod ingest;
pub mod error;
pub mod util;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use dataset::logic::{LogicDataset, logic_dataset};
pub use network::forward::{ForwardCache, forward, threshold_predictions};
pub use network::params::Parameters;
pub use network::record::WeightsRecord;
pub use loss::mse::MseLoss;
pub use optim::sgd::Sgd;
pub use train::dense::train_dense_layer;
pub use train::epoch_stats::EpochStats;
pub use train::train_config::TrainConfig;
pub use train::trainer::{TrainedModel, train_logic};
pub use ingest::command::{CommandIngestor, Ingestor};
pub use ingest::payload::TensorPayload;
pub use error::{Error, Result};
