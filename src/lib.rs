//! # fcs_writer
//!
//! A writer for the Flow Cytometry Standard (FCS) binary file format.
//!
//! ## What is FCS?
//!
//! FCS files store flow cytometry measurements: a fixed-width ASCII HEADER, a TEXT
//! segment of keyword/value metadata, and a DATA segment holding one value per
//! event and parameter. The segments point at each other by byte offset, and the
//! TEXT segment contains its own offsets, so writing a file means solving for
//! offsets that depend on the length of the text that records them.
//!
//! ## Key Features
//!
//! - **Byte-exact output**: offsets in HEADER and TEXT always match the real layout
//! - **Canonical keyword order**: `$PAR`, required keywords, `$Pn` parameters by
//!   number, then free-form and `#` vendor keywords
//! - **Pure encoding**: the caller's keyword map is never modified
//! - **Pluggable sinks**: fire-and-forget downloads or chunked positioned writes
//!
//! ## Quick Start
//!
//! ```rust
//! use fcs_writer::{keywords, to_bytes, DataMatrix, Header};
//!
//! let text = keywords! {
//!     "$PAR" => 2,
//!     "$TOT" => 3,
//!     "$DATATYPE" => "F",
//!     "$BYTEORD" => "1,2,3,4",
//!     "$MODE" => "L",
//!     "$P1N" => "FSC-A",
//!     "$P1B" => 32,
//!     "$P1R" => 262144,
//!     "$P1E" => "0,0",
//!     "$P2N" => "SSC-A",
//!     "$P2B" => 32,
//!     "$P2R" => 262144,
//!     "$P2E" => "0,0",
//! };
//! let data = DataMatrix::new(vec![vec![1.5, 2.5], vec![3.5, 4.5], vec![5.5, 6.5]]);
//!
//! let bytes = to_bytes(&Header::default(), &text, &data).unwrap();
//! assert_eq!(&bytes[..10], b"FCS3.1    ");
//! assert_eq!(bytes[58], b'*');
//! ```
//!
//! ### Writing to a directory
//!
//! ```rust,no_run
//! use fcs_writer::{keywords, DataMatrix, Destination, FcsWriter, FsDirectory, Header};
//! use fcs_writer::{KeywordMap, WriteOptions};
//!
//! let writer = FcsWriter::new(
//!     Header::default(),
//!     keywords! { "$PAR" => 1, "$TOT" => 1 },
//!     DataMatrix::new(vec![vec![42.0]]),
//!     KeywordMap::new(),
//!     WriteOptions::new(),
//! );
//! let dir = FsDirectory::new("output");
//! writer.write_fcs("sample.fcs", Destination::Directory(&dir)).unwrap();
//! ```
//!
//! ## Format Details
//!
//! See the [`layout`] module for the byte layout this crate produces.

pub mod data;
pub mod error;
pub mod header;
pub mod import;
pub mod keyword;
pub mod layout;
pub mod macros;
pub mod map;
pub mod offsets;
pub mod options;
pub mod ser;
pub mod sink;
pub mod text;
pub mod value;
pub mod writer;

pub use data::{encode_data, DataMatrix};
pub use error::{Error, Result};
pub use header::{format_header, Header, DEFAULT_VERSION};
pub use import::{FcsDocument, FcsSource};
pub use keyword::{
    compare_keywords, normalize, pad_fixed_fields, sort_keywords, KeywordClass, ParameterIndex,
};
pub use map::KeywordMap;
pub use offsets::{resolve_text_segment, SegmentBounds};
pub use options::{Delimiter, WriteOptions, DEFAULT_CHUNK_SIZE};
pub use ser::{assemble, Serializer};
pub use sink::{
    write_chunked, Destination, Directory, Download, FsDirectory, FsDownload, WritableStream,
};
pub use text::format_text_segment;
pub use value::KeywordValue;
pub use writer::FcsWriter;

use std::io;

/// Encode an FCS file with default options.
///
/// # Errors
///
/// Returns [`Error::OffsetWidth`] if an offset does not fit the 12-digit TEXT fields.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_bytes(header: &Header, text: &KeywordMap, data: &DataMatrix) -> Result<Vec<u8>> {
    to_bytes_with_options(header, text, data, WriteOptions::default())
}

/// Encode an FCS file with custom options.
///
/// # Errors
///
/// Returns [`Error::OffsetWidth`] if an offset does not fit the 12-digit TEXT fields.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_bytes_with_options(
    header: &Header,
    text: &KeywordMap,
    data: &DataMatrix,
    options: WriteOptions,
) -> Result<Vec<u8>> {
    let mut serializer = Serializer::new(options);
    serializer.serialize(header, text, data)?;
    Ok(serializer.into_inner())
}

/// Encode an FCS file into a writer.
///
/// # Examples
///
/// ```rust
/// use fcs_writer::{keywords, to_writer, DataMatrix, Header};
///
/// let mut buffer = Vec::new();
/// to_writer(
///     &mut buffer,
///     &Header::default(),
///     &keywords! { "$PAR" => 1 },
///     &DataMatrix::new(vec![vec![0.5]]),
/// )
/// .unwrap();
/// assert!(buffer.ends_with(&0.5f32.to_le_bytes()));
/// ```
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, header: &Header, text: &KeywordMap, data: &DataMatrix) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, header, text, data, WriteOptions::default())
}

/// Encode an FCS file into a writer with custom options.
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(
    mut writer: W,
    header: &Header,
    text: &KeywordMap,
    data: &DataMatrix,
    options: WriteOptions,
) -> Result<()>
where
    W: io::Write,
{
    let bytes = to_bytes_with_options(header, text, data, options)?;
    writer.write_all(&bytes)?;
    Ok(())
}
