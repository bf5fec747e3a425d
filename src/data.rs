//! DATA segment encoding.
//!
//! Measurements are written as `$DATATYPE/F/` with `$BYTEORD/1,2,3,4/`: every value
//! becomes a 4-byte IEEE-754 single precision float, little-endian, in row-major
//! order (one row per event, one column per parameter).

use byteorder::{ByteOrder, LittleEndian};
use serde::{Deserialize, Serialize};

/// Event-by-parameter matrix of measurements.
///
/// Rows are expected to share one length matching `$PAR`; this is not checked.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataMatrix(Vec<Vec<f32>>);

impl DataMatrix {
    #[must_use]
    pub fn new(rows: Vec<Vec<f32>>) -> Self {
        DataMatrix(rows)
    }

    /// Number of rows (events).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.0.len()
    }

    /// Total number of values across all rows.
    #[must_use]
    pub fn value_count(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }

    /// Byte length of the encoded DATA segment.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        self.value_count() * 4
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<f32>> {
        self.0.iter()
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<Vec<f32>> {
        self.0
    }
}

impl From<Vec<Vec<f32>>> for DataMatrix {
    fn from(rows: Vec<Vec<f32>>) -> Self {
        DataMatrix(rows)
    }
}

impl From<Vec<Vec<f64>>> for DataMatrix {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        DataMatrix(
            rows.into_iter()
                .map(|row| row.into_iter().map(|v| v as f32).collect())
                .collect(),
        )
    }
}

/// Encodes a matrix into the DATA segment bytes.
///
/// # Examples
///
/// ```rust
/// use fcs_writer::{encode_data, DataMatrix};
///
/// let data = DataMatrix::new(vec![vec![1.5, 2.5]]);
/// let bytes = encode_data(&data);
/// assert_eq!(bytes.len(), 8);
/// assert_eq!(&bytes[0..4], &1.5f32.to_le_bytes());
/// ```
#[must_use]
pub fn encode_data(data: &DataMatrix) -> Vec<u8> {
    let mut buf = vec![0u8; data.encoded_len()];
    let mut offset = 0;
    for row in data.iter() {
        let end = offset + row.len() * 4;
        LittleEndian::write_f32_into(row, &mut buf[offset..end]);
        offset = end;
    }
    buf
}
