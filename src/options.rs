//! Configuration options for FCS output.
//!
//! - [`WriteOptions`]: Main configuration struct
//! - [`Delimiter`]: Byte that frames keywords and values in the TEXT segment
//!
//! ## Examples
//!
//! ```rust
//! use fcs_writer::{Delimiter, WriteOptions};
//!
//! let options = WriteOptions::new()
//!     .with_delimiter(Delimiter::Slash)
//!     .with_chunk_size(1024 * 1024);
//! assert_eq!(options.delimiter.as_byte(), b'/');
//! assert_eq!(options.chunk_size, 1024 * 1024);
//! ```

/// Default chunk size for directory sinks: 10 MiB.
pub const DEFAULT_CHUNK_SIZE: usize = 10 * 1024 * 1024;

/// Delimiter choice for the TEXT segment.
///
/// Any single byte is legal in FCS as long as it does not occur inside keywords or
/// values; values are never escaped.
///
/// # Examples
///
/// ```rust
/// use fcs_writer::Delimiter;
///
/// assert_eq!(Delimiter::Asterisk.as_byte(), b'*');
/// assert_eq!(Delimiter::Slash.as_byte(), b'/');
/// assert_eq!(Delimiter::Pipe.as_byte(), b'|');
/// assert_eq!(Delimiter::Custom(b'\x0c').as_byte(), 0x0c);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Asterisk,
    Slash,
    Pipe,
    Custom(u8),
}

impl Delimiter {
    /// Returns the byte written between keywords and values.
    #[must_use]
    pub const fn as_byte(&self) -> u8 {
        match self {
            Delimiter::Asterisk => b'*',
            Delimiter::Slash => b'/',
            Delimiter::Pipe => b'|',
            Delimiter::Custom(b) => *b,
        }
    }
}

/// Configuration options for FCS output.
///
/// # Examples
///
/// ```rust
/// use fcs_writer::WriteOptions;
///
/// let options = WriteOptions::new();
/// assert_eq!(options.chunk_size, 10 * 1024 * 1024);
/// ```
#[derive(Clone, Debug)]
pub struct WriteOptions {
    pub delimiter: Delimiter,
    /// Size of each positioned write issued to a directory sink.
    pub chunk_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            delimiter: Delimiter::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl WriteOptions {
    /// Creates default options (`*` delimiter, 10 MiB chunks).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the TEXT segment delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the chunk size used for directory sinks.
    ///
    /// A chunk size of zero is treated as one byte.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }
}
