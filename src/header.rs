//! HEADER segment rendering.
//!
//! The header is plain ASCII: the version identifier, four spaces, then six offsets
//! right-justified in 8-character fields (TEXT start/end, DATA start/end,
//! ANALYSIS start/end). With the standard 6-character identifier it is 58 bytes.

use crate::SegmentBounds;
use serde::{Deserialize, Serialize};

/// Version identifier written when none is supplied.
pub const DEFAULT_VERSION: &str = "FCS3.1";

const VERSION_PADDING: &str = "    ";
const OFFSET_FIELD_WIDTH: usize = 8;
const OFFSET_FIELD_COUNT: usize = 6;
const MAX_HEADER_OFFSET: u64 = 99_999_999;

/// Header information of an FCS file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    #[serde(rename = "FCSVersion", alias = "format_version")]
    pub format_version: String,
}

impl Header {
    #[must_use]
    pub fn new(format_version: impl Into<String>) -> Self {
        Header {
            format_version: format_version.into(),
        }
    }

    /// Byte length of the rendered header, which is also where TEXT begins.
    ///
    /// ```rust
    /// use fcs_writer::Header;
    ///
    /// assert_eq!(Header::default().len(), 58);
    /// assert_eq!(Header::new("FCS3.0").len(), 58);
    /// assert_eq!(Header::new("FCS3.10").len(), 59);
    /// ```
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.format_version.len()
            + VERSION_PADDING.len()
            + OFFSET_FIELD_WIDTH * OFFSET_FIELD_COUNT
    }
}

impl Default for Header {
    fn default() -> Self {
        Header::new(DEFAULT_VERSION)
    }
}

/// Renders the header for the given segment boundaries.
///
/// Offsets larger than 99,999,999 do not fit the 8-character fields and are written
/// as `0`; readers then take them from the TEXT keywords.
///
/// # Examples
///
/// ```rust
/// use fcs_writer::{format_header, Header, SegmentBounds};
///
/// let bounds = SegmentBounds::compute(58, 100, 24);
/// let header = format_header(&Header::default(), &bounds);
/// assert_eq!(
///     header,
///     b"FCS3.1          58     157     158     181       0       0"
/// );
/// ```
#[must_use]
pub fn format_header(header: &Header, bounds: &SegmentBounds) -> Vec<u8> {
    let mut output = String::with_capacity(header.len());
    output.push_str(&header.format_version);
    output.push_str(VERSION_PADDING);
    for offset in [
        bounds.text_start,
        bounds.text_end,
        bounds.data_start,
        bounds.data_end,
        0,
        0,
    ] {
        let offset = if offset > MAX_HEADER_OFFSET { 0 } else { offset };
        output.push_str(&format!("{:>width$}", offset, width = OFFSET_FIELD_WIDTH));
    }
    output.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_length_matches_len() {
        let bounds = SegmentBounds::compute(58, 1234, 5678);
        for version in ["FCS3.1", "FCS2.0", "FCS3.2"] {
            let header = Header::new(version);
            assert_eq!(format_header(&header, &bounds).len(), header.len());
        }
    }

    #[test]
    fn test_large_offsets_written_as_zero() {
        let bounds = SegmentBounds::compute(58, 1000, 200_000_000);
        let header = format_header(&Header::default(), &bounds);
        let text = String::from_utf8(header).unwrap();

        assert_eq!(text.len(), 58);
        assert_eq!(&text[26..34], "    1058");
        assert_eq!(&text[34..42], "       0");
    }

    #[test]
    fn test_version_json_field_name() {
        let header: Header = serde_json::from_str(r#"{"FCSVersion": "FCS3.0"}"#).unwrap();
        assert_eq!(header, Header::new("FCS3.0"));
    }
}
