//! Error types for FCS encoding and output.
//!
//! The encoder itself performs no validation of keyword maps or data matrices, so
//! the error surface is deliberately small:
//!
//! - **I/O Errors**: a sink failed to create, write or close the output file
//! - **Offset Width Errors**: a segment boundary no longer fits the fixed-width
//!   TEXT field, so the two renders of the TEXT segment disagree in length
//!
//! ## Examples
//!
//! ```rust
//! use fcs_writer::Error;
//!
//! let err = Error::offset_width(120, 121);
//! assert!(err.to_string().contains("120"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while writing an FCS file.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error raised by an output sink
    #[error("IO error: {0}")]
    Io(String),

    /// The TEXT segment changed length once the real offsets were injected
    #[error(
        "TEXT segment length changed from {first_pass} to {second_pass} bytes after offset injection\nHelp: segment offsets must fit in 12 digits"
    )]
    OffsetWidth { first_pass: usize, second_pass: usize },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an I/O error for sink failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates an offset width error from the two measured TEXT lengths.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fcs_writer::Error;
    ///
    /// let err = Error::offset_width(10, 11);
    /// assert!(matches!(err, Error::OffsetWidth { first_pass: 10, second_pass: 11 }));
    /// ```
    pub fn offset_width(first_pass: usize, second_pass: usize) -> Self {
        Error::OffsetWidth {
            first_pass,
            second_pass,
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
