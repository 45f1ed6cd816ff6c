pub mod command;
pub mod payload;

pub use command::{CommandIngestor, Ingestor};
pub use payload::TensorPayload;
