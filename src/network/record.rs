use serde::{Serialize, Deserialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::math::matrix::Matrix;
use crate::network::params::{Parameters, INPUT_WIDTH, OUTPUT_WIDTH};
use crate::util::write_atomic;

/// Self-describing snapshot of a trained network, suitable for lossless
/// JSON persistence: every tensor is stored as nested arrays under its own
/// key, with the thresholded predictions alongside.
///
/// Unlike `Parameters::flatten()`, which is order-dependent transport with
/// no shape information, a record can be turned back into `Parameters`
/// on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightsRecord {
    #[serde(rename = "W1")]
    pub w1: Vec<Vec<f64>>,
    pub b1: Vec<Vec<f64>>,
    #[serde(rename = "W2")]
    pub w2: Vec<Vec<f64>>,
    pub b2: Vec<Vec<f64>>,
    /// 4×3 matrix of 0/1, one row per truth-table input. Absent for
    /// records that only carry weights.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predictions: Option<Vec<Vec<u8>>>,
}

impl WeightsRecord {
    pub fn from_parameters(params: &Parameters, predictions: Option<Vec<Vec<u8>>>) -> WeightsRecord {
        WeightsRecord {
            w1: params.w1.data.clone(),
            b1: params.b1.data.clone(),
            w2: params.w2.data.clone(),
            b2: params.b2.data.clone(),
            predictions,
        }
    }

    /// Reconstructs `Parameters` from the stored arrays, validating that
    /// the shapes describe a 2→hidden→3 network.
    pub fn to_parameters(&self) -> Result<Parameters> {
        let w1 = matrix_from(&self.w1, "W1")?;
        let b1 = matrix_from(&self.b1, "b1")?;
        let w2 = matrix_from(&self.w2, "W2")?;
        let b2 = matrix_from(&self.b2, "b2")?;

        let hidden = w1.cols;
        if w1.rows != INPUT_WIDTH {
            return Err(shape_error("W1", INPUT_WIDTH, hidden, w1.rows, w1.cols));
        }
        if b1.rows != 1 || b1.cols != hidden {
            return Err(shape_error("b1", 1, hidden, b1.rows, b1.cols));
        }
        if w2.rows != hidden || w2.cols != OUTPUT_WIDTH {
            return Err(shape_error("W2", hidden, OUTPUT_WIDTH, w2.rows, w2.cols));
        }
        if b2.rows != 1 || b2.cols != OUTPUT_WIDTH {
            return Err(shape_error("b2", 1, OUTPUT_WIDTH, b2.rows, b2.cols));
        }

        Ok(Parameters { w1, b1, w2, b2 })
    }

    /// Serializes the record to a pretty-printed (2-space) JSON file.
    /// The write is atomic: a failure never leaves a partial baseline.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(self)?;
        write_atomic(path, &bytes)?;
        Ok(())
    }

    /// Deserializes a record from a JSON file previously written by
    /// `save_json`.
    pub fn load_json(path: &Path) -> Result<WeightsRecord> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

/// Writes a bare weight vector as a pretty-printed JSON array. Baseline
/// format of the auxiliary dense-layer trainer.
pub fn save_weights_json(path: &Path, weights: &[f64]) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(weights)?;
    write_atomic(path, &bytes)?;
    Ok(())
}

fn matrix_from(data: &[Vec<f64>], key: &str) -> Result<Matrix> {
    if data.is_empty() || data[0].is_empty() {
        return Err(Error::Configuration(format!("record tensor '{}' is empty", key)));
    }
    let cols = data[0].len();
    if data.iter().any(|row| row.len() != cols) {
        return Err(Error::Configuration(format!("record tensor '{}' has ragged rows", key)));
    }
    Ok(Matrix::from_data(data.to_vec()))
}

fn shape_error(key: &str, want_rows: usize, want_cols: usize, got_rows: usize, got_cols: usize) -> Error {
    Error::Configuration(format!(
        "record tensor '{}' has shape {}x{}, expected {}x{}",
        key, got_rows, got_cols, want_rows, want_cols
    ))
}
