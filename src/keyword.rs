//! Keyword normalization: fixed-width offset fields and canonical ordering.
//!
//! Both steps are pure: they take a map and return a new one.
//!
//! ## Fixed-width fields
//!
//! The TEXT segment stores its own byte offsets, so its length must not depend on
//! the offset values. [`pad_fixed_fields`] renders every offset keyword as exactly
//! 12 zero-padded digits, which makes the rendered width constant for any file
//! below 10^12 bytes.
//!
//! ## Ordering
//!
//! [`sort_keywords`] classifies each key once ([`KeywordClass`]) and sorts by a key
//! derived from the class:
//!
//! 1. `$PAR`
//! 2. reserved scalar keywords sorting below `$P` (`$BEGINANALYSIS` .. `$NEXTDATA`)
//! 3. parameter keywords `$Pn[BERSN]`, by `n` then by key
//! 4. reserved scalar keywords sorting above `$P` (`$TOT`)
//! 5. other keywords
//! 6. `#`-prefixed vendor keywords
//!
//! Ties inside a band fall back to a collation of the full key: punctuation before
//! symbols, symbols before digits, digits before letters, letters compared without
//! regard to case. A case-only difference puts lowercase first, and byte order
//! settles anything left.
//!
//! ```rust
//! use fcs_writer::{keywords, sort_keywords};
//!
//! let sorted = sort_keywords(keywords! {
//!     "#CYTOMETER" => "x",
//!     "$TOT" => 3,
//!     "$P12N" => "SSC-A",
//!     "SAMPLE" => "tube 1",
//!     "$P3N" => "FSC-A",
//!     "$PAR" => 2,
//!     "$BYTEORD" => "1,2,3,4",
//! });
//! let keys: Vec<_> = sorted.keys().map(String::as_str).collect();
//! assert_eq!(
//!     keys,
//!     ["$PAR", "$BYTEORD", "$P3N", "$P12N", "$TOT", "SAMPLE", "#CYTOMETER"]
//! );
//! ```

use crate::{KeywordMap, KeywordValue};
use std::cmp::Ordering;

/// Offset keywords that are rendered with a fixed width.
pub const FIXED_WIDTH_FIELDS: [&str; 7] = [
    "$BEGINSTEXT",
    "$ENDSTEXT",
    "$BEGINDATA",
    "$ENDDATA",
    "$BEGINANALYSIS",
    "$ENDANALYSIS",
    "$NEXTDATA",
];

/// Rendered width of every fixed-width offset field.
pub const FIXED_FIELD_WIDTH: usize = 12;

/// Required keywords other than `$Pn` parameters.
pub const RESERVED_KEYWORDS: [&str; 12] = [
    "$BEGINANALYSIS",
    "$BEGINDATA",
    "$BEGINSTEXT",
    "$BYTEORD",
    "$DATATYPE",
    "$ENDANALYSIS",
    "$ENDDATA",
    "$ENDSTEXT",
    "$MODE",
    "$NEXTDATA",
    "$PAR",
    "$TOT",
];

const PARAMETER_SUFFIXES: &[u8] = b"BERSN";

// ASCII punctuation and symbols in root collation order.
const PUNCTUATION: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Classification of a TEXT keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeywordClass<'a> {
    /// `$PAR`
    Par,
    /// Required keyword from [`RESERVED_KEYWORDS`] other than `$PAR`
    ReservedScalar,
    /// `$Pn[BERSN]`, holding the digits of `n`
    ReservedParameter(ParameterIndex<'a>),
    /// Any other keyword
    Plain,
    /// `#`-prefixed vendor keyword
    Vendor,
}

impl<'a> KeywordClass<'a> {
    /// Classifies a keyword.
    ///
    /// ```rust
    /// use fcs_writer::KeywordClass;
    ///
    /// assert_eq!(KeywordClass::of("$PAR"), KeywordClass::Par);
    /// assert_eq!(KeywordClass::of("$TOT"), KeywordClass::ReservedScalar);
    /// assert!(matches!(KeywordClass::of("$P7R"), KeywordClass::ReservedParameter(_)));
    /// assert_eq!(KeywordClass::of("$P7G"), KeywordClass::Plain);
    /// assert_eq!(KeywordClass::of("#FLOWRATE"), KeywordClass::Vendor);
    /// ```
    #[must_use]
    pub fn of(key: &'a str) -> Self {
        if key == "$PAR" {
            KeywordClass::Par
        } else if RESERVED_KEYWORDS.contains(&key) {
            KeywordClass::ReservedScalar
        } else if let Some(index) = ParameterIndex::parse(key) {
            KeywordClass::ReservedParameter(index)
        } else if key.starts_with('#') {
            KeywordClass::Vendor
        } else {
            KeywordClass::Plain
        }
    }

    /// Returns `true` for `$PAR`, reserved scalars and parameter keywords.
    #[must_use]
    pub fn is_reserved(&self) -> bool {
        matches!(
            self,
            KeywordClass::Par | KeywordClass::ReservedScalar | KeywordClass::ReservedParameter(_)
        )
    }
}

/// The `n` of a `$Pn` keyword, compared numerically without overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParameterIndex<'a>(&'a str);

impl<'a> ParameterIndex<'a> {
    fn parse(key: &'a str) -> Option<Self> {
        let rest = key.strip_prefix("$P")?;
        let (&suffix, digits) = rest.as_bytes().split_last()?;
        if digits.is_empty()
            || !digits.iter().all(u8::is_ascii_digit)
            || !PARAMETER_SUFFIXES.contains(&suffix)
        {
            return None;
        }
        let digits = &rest[..digits.len()];
        Some(ParameterIndex(digits.trim_start_matches('0')))
    }

    /// The index as an integer, if it fits in `u64`.
    #[must_use]
    pub fn value(&self) -> Option<u64> {
        if self.0.is_empty() {
            Some(0)
        } else {
            self.0.parse().ok()
        }
    }
}

impl Ord for ParameterIndex<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Leading zeros are stripped, so longer means larger.
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(other.0))
    }
}

impl PartialOrd for ParameterIndex<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct SortKey<'a> {
    band: u8,
    index: Option<ParameterIndex<'a>>,
    key: Collated<'a>,
}

impl<'a> SortKey<'a> {
    fn new(key: &'a str) -> Self {
        let class = KeywordClass::of(key);
        let (band, index) = match class {
            KeywordClass::Par => (0, None),
            // Scalars compare lexicographically against "$Pn" keys.
            KeywordClass::ReservedScalar if key < "$P" => (1, None),
            KeywordClass::ReservedParameter(index) => (2, Some(index)),
            KeywordClass::ReservedScalar => (3, None),
            KeywordClass::Plain => (4, None),
            KeywordClass::Vendor => (5, None),
        };
        SortKey {
            band,
            index,
            key: Collated(key),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Collated<'a>(&'a str);

impl Ord for Collated<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.0, other.0);
        a.chars()
            .map(primary_weight)
            .cmp(b.chars().map(primary_weight))
            .then_with(|| {
                a.chars()
                    .map(char::is_uppercase)
                    .cmp(b.chars().map(char::is_uppercase))
            })
            .then_with(|| a.cmp(b))
    }
}

impl PartialOrd for Collated<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn primary_weight(c: char) -> u32 {
    if c.is_whitespace() {
        0
    } else if let Some(i) = PUNCTUATION.find(c) {
        1 + i as u32
    } else if let Some(digit) = c.to_digit(10) {
        0x40 + digit
    } else if c.is_ascii_alphabetic() {
        0x60 + u32::from(c.to_ascii_lowercase() as u8 - b'a')
    } else {
        0x100 + c.to_lowercase().next().map_or(c as u32, u32::from)
    }
}

/// Compares two keywords in canonical TEXT order.
#[must_use]
pub fn compare_keywords(a: &str, b: &str) -> Ordering {
    SortKey::new(a).cmp(&SortKey::new(b))
}

/// Returns the map reordered into canonical TEXT order.
#[must_use]
pub fn sort_keywords(map: KeywordMap) -> KeywordMap {
    let mut entries: Vec<(String, KeywordValue)> = map.into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| compare_keywords(a, b));
    entries.into_iter().collect()
}

/// Returns the map with every offset keyword zero-padded to 12 characters.
///
/// Missing offset keywords are inserted as zero. Values already wider than 12
/// characters are kept as they are.
#[must_use]
pub fn pad_fixed_fields(map: &KeywordMap) -> KeywordMap {
    let mut padded = map.clone();
    for field in FIXED_WIDTH_FIELDS {
        let value = map
            .get(field)
            .map_or_else(|| "0".to_string(), ToString::to_string);
        padded.insert(field, pad_zero(&value));
    }
    padded
}

/// Pads and orders a keyword map, ready for rendering.
#[must_use]
pub fn normalize(map: &KeywordMap) -> KeywordMap {
    sort_keywords(pad_fixed_fields(map))
}

fn pad_zero(value: &str) -> String {
    format!("{:0>width$}", value, width = FIXED_FIELD_WIDTH)
}
