//! Segment boundary resolution.
//!
//! The TEXT segment records the byte offsets of itself and of the DATA segment, so
//! its length depends on values that depend on its length. Offset keywords are
//! rendered at a fixed width of 12 digits (see [`pad_fixed_fields`]), which breaks
//! the cycle: rendering once with placeholder offsets yields the final length, and
//! rendering again with the real offsets yields the final bytes. Two passes always
//! suffice while every offset fits in 12 digits; [`resolve_text_segment`] checks
//! that the passes agree and reports [`Error::OffsetWidth`] otherwise.
//!
//! [`pad_fixed_fields`]: crate::pad_fixed_fields

use crate::keyword::normalize;
use crate::{format_text_segment, Delimiter, Error, KeywordMap, Result};
use log::debug;

/// Byte boundaries of the TEXT and DATA segments, 0-based and inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentBounds {
    pub text_start: u64,
    pub text_end: u64,
    pub data_start: u64,
    pub data_end: u64,
}

impl SegmentBounds {
    /// Lays out a TEXT segment of `text_len` bytes at `text_start`, followed
    /// directly by a DATA segment of `data_len` bytes.
    ///
    /// ```rust
    /// use fcs_writer::SegmentBounds;
    ///
    /// let bounds = SegmentBounds::compute(58, 100, 24);
    /// assert_eq!(bounds.text_end, 157);
    /// assert_eq!(bounds.data_start, 158);
    /// assert_eq!(bounds.data_end, 181);
    /// ```
    #[must_use]
    pub fn compute(text_start: u64, text_len: u64, data_len: u64) -> Self {
        // An empty segment ends one byte before it starts.
        let text_end = (text_start + text_len).saturating_sub(1);
        let data_start = text_end + 1;
        let data_end = (data_start + data_len).saturating_sub(1);
        SegmentBounds {
            text_start,
            text_end,
            data_start,
            data_end,
        }
    }

    /// Returns the map with these boundaries written into its offset keywords.
    ///
    /// The ANALYSIS offsets are forced to zero. Values are written unpadded; the
    /// next normalization pads them.
    #[must_use]
    pub fn inject(&self, map: &KeywordMap) -> KeywordMap {
        let mut updated = map.clone();
        updated.insert("$BEGINSTEXT", self.text_start);
        updated.insert("$ENDSTEXT", self.text_end);
        updated.insert("$BEGINDATA", self.data_start);
        updated.insert("$ENDDATA", self.data_end);
        updated.insert("$BEGINANALYSIS", 0);
        updated.insert("$ENDANALYSIS", 0);
        updated
    }
}

/// Renders the final TEXT segment and the boundaries it declares.
///
/// `text_start` is the length of the header in front of the TEXT segment and
/// `data_len` the byte length of the encoded DATA segment.
///
/// # Errors
///
/// Returns [`Error::OffsetWidth`] if injecting the real offsets changed the TEXT
/// length, which happens once an offset no longer fits in 12 digits.
pub fn resolve_text_segment(
    map: &KeywordMap,
    text_start: u64,
    data_len: u64,
    delimiter: Delimiter,
) -> Result<(Vec<u8>, SegmentBounds)> {
    let first_pass = format_text_segment(&normalize(map), delimiter);
    let bounds = SegmentBounds::compute(text_start, first_pass.len() as u64, data_len);
    debug!(
        "TEXT segment is {} bytes, resolved bounds {:?}",
        first_pass.len(),
        bounds
    );

    let second_pass = format_text_segment(&normalize(&bounds.inject(map)), delimiter);
    if second_pass.len() != first_pass.len() {
        return Err(Error::offset_width(first_pass.len(), second_pass.len()));
    }
    Ok((second_pass, bounds))
}
