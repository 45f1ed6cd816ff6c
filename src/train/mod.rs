pub mod dense;
pub mod epoch_stats;
pub mod train_config;
pub mod trainer;

pub use dense::train_dense_layer;
pub use epoch_stats::EpochStats;
pub use train_config::TrainConfig;
pub use trainer::{TrainedModel, train_logic};
