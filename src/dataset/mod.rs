pub mod logic;

pub use logic::{LogicDataset, logic_dataset};
