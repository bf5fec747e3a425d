//! TEXT segment rendering.

use crate::{Delimiter, KeywordMap};

/// Renders a keyword map as `D key D value` pairs, in map order.
///
/// Values are coerced to text and written as single bytes per character; no
/// escaping is applied and no trailing delimiter is added.
///
/// # Examples
///
/// ```rust
/// use fcs_writer::{format_text_segment, keywords, Delimiter};
///
/// let map = keywords! { "$PAR" => 2, "$P1N" => "FSC-A" };
/// let text = format_text_segment(&map, Delimiter::Asterisk);
/// assert_eq!(text, b"*$PAR*2*$P1N*FSC-A");
/// ```
#[must_use]
pub fn format_text_segment(map: &KeywordMap, delimiter: Delimiter) -> Vec<u8> {
    let delimiter = delimiter.as_byte();
    let mut output = Vec::with_capacity(map.len() * 16);
    for (key, value) in map {
        output.push(delimiter);
        output.extend_from_slice(key.as_bytes());
        output.push(delimiter);
        output.extend_from_slice(value.to_string().as_bytes());
    }
    output
}
