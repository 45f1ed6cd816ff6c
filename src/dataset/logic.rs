use crate::math::matrix::Matrix;

/// The fixed 4-row truth table the network trains on.
///
/// Inputs are the four 2-bit combinations; each target row holds the
/// XOR, AND, OR outputs for that input, in that column order. Constructed
/// once, read-only for the lifetime of a training run.
#[derive(Debug, Clone)]
pub struct LogicDataset {
    pub inputs: Matrix,
    pub targets: Matrix,
}

impl LogicDataset {
    /// Number of samples. Inputs and targets are index-aligned.
    pub fn len(&self) -> usize {
        self.inputs.rows
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.rows == 0
    }
}

/// Returns the XOR/AND/OR truth table. Pure and deterministic.
pub fn logic_dataset() -> LogicDataset {
    let inputs = Matrix::from_data(vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ]);
    // Columns: XOR, AND, OR.
    let targets = Matrix::from_data(vec![
        vec![0.0, 0.0, 0.0],
        vec![1.0, 0.0, 1.0],
        vec![1.0, 0.0, 1.0],
        vec![0.0, 1.0, 1.0],
    ]);

    LogicDataset { inputs, targets }
}
