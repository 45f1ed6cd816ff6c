use std::path::Path;

use crate::error::Result;
use crate::util::write_atomic;

/// Header of an ingest payload file. The value count (`cols`) is derived
/// from the data at write time; `rows` is a caller-supplied constant
/// describing the logical shape on the consumer side.
#[derive(Debug, Clone)]
pub struct TensorPayload {
    pub key: u64,
    pub name: String,
    pub rows: usize,
}

impl TensorPayload {
    pub fn new(key: u64, name: impl Into<String>, rows: usize) -> TensorPayload {
        TensorPayload { key, name: name.into(), rows }
    }

    /// Writes the two-line payload file the ingestion process consumes:
    ///
    /// ```text
    /// key,name,rows,cols
    /// v0,v1,...,v(cols-1)
    /// ```
    ///
    /// Values are formatted with exactly 6 digits after the decimal point,
    /// in the fixed W1, b1, W2, b2 flatten order.
    pub fn write(&self, path: &Path, values: &[f32]) -> Result<()> {
        let mut text = format!("{},{},{},{}\n", self.key, self.name, self.rows, values.len());
        let joined: Vec<String> = values.iter().map(|v| format!("{:.6}", v)).collect();
        text.push_str(&joined.join(","));

        write_atomic(path, text.as_bytes())?;
        Ok(())
    }
}
