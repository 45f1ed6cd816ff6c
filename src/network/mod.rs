pub mod forward;
pub mod params;
pub mod record;

pub use forward::{ForwardCache, forward, threshold_predictions};
pub use params::{Parameters, INPUT_WIDTH, OUTPUT_WIDTH};
pub use record::{WeightsRecord, save_weights_json};
