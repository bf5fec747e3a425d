//! FCS serialization.
//!
//! This module provides the [`Serializer`] that runs the full encoding pipeline:
//!
//! 1. encode the DATA segment ([`encode_data`])
//! 2. resolve the TEXT segment and its boundaries ([`resolve_text_segment`])
//! 3. render the HEADER ([`format_header`])
//! 4. concatenate the three segments ([`assemble`])
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use fcs_writer::{keywords, to_bytes, DataMatrix, Header};
//!
//! let text = keywords! { "$PAR" => 1, "$TOT" => 1 };
//! let data = DataMatrix::new(vec![vec![1.0]]);
//! let bytes = to_bytes(&Header::default(), &text, &data).unwrap();
//! assert_eq!(&bytes[..6], b"FCS3.1");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use fcs_writer::{keywords, DataMatrix, Header, Serializer, WriteOptions};
//!
//! let mut serializer = Serializer::new(WriteOptions::new());
//! let bounds = serializer
//!     .serialize(&Header::default(), &keywords! { "$PAR" => 1 }, &DataMatrix::default())
//!     .unwrap();
//!
//! let bytes = serializer.into_inner();
//! assert_eq!(bounds.text_start, 58);
//! assert_eq!(bytes.len() as u64, bounds.data_start);
//! ```

use crate::{
    encode_data, format_header, resolve_text_segment, DataMatrix, Header, KeywordMap, Result,
    SegmentBounds, WriteOptions,
};
use log::debug;

/// The FCS serializer.
///
/// Encoding borrows its inputs; the keyword map is copied, never modified.
pub struct Serializer {
    output: Vec<u8>,
    options: WriteOptions,
}

impl Serializer {
    pub fn new(options: WriteOptions) -> Self {
        Serializer {
            output: Vec::new(),
            options,
        }
    }

    /// Encodes one FCS file into the serializer's buffer.
    ///
    /// Returns the segment boundaries declared in the HEADER and TEXT segments.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OffsetWidth`] if an offset does not fit the
    /// 12-digit TEXT fields.
    pub fn serialize(
        &mut self,
        header: &Header,
        text: &KeywordMap,
        data: &DataMatrix,
    ) -> Result<SegmentBounds> {
        let data_segment = encode_data(data);
        debug!(
            "Encoded {} values into a {} byte DATA segment",
            data.value_count(),
            data_segment.len()
        );

        let (text_segment, bounds) = resolve_text_segment(
            text,
            header.len() as u64,
            data_segment.len() as u64,
            self.options.delimiter,
        )?;
        let header_segment = format_header(header, &bounds);

        self.output = assemble(&header_segment, &text_segment, &data_segment);
        debug!("Assembled {} byte FCS file", self.output.len());
        Ok(bounds)
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.output
    }
}

/// Concatenates the HEADER, TEXT and DATA segments.
///
/// ```rust
/// use fcs_writer::assemble;
///
/// assert_eq!(assemble(b"H", b"*K*V", b"\x00"), b"H*K*V\x00");
/// ```
#[must_use]
pub fn assemble(header: &[u8], text: &[u8], data: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(header.len() + text.len() + data.len());
    output.extend_from_slice(header);
    output.extend_from_slice(text);
    output.extend_from_slice(data);
    output
}
