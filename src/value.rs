//! Keyword values of the TEXT segment.
//!
//! FCS stores every keyword value as text, but callers usually build maps from a
//! mix of strings and numbers. [`KeywordValue`] keeps the original kind so the map
//! can be inspected, and coerces to text only when the segment is rendered.
//!
//! ```rust
//! use fcs_writer::KeywordValue;
//!
//! assert_eq!(KeywordValue::from(2).to_string(), "2");
//! assert_eq!(KeywordValue::from(1.5).to_string(), "1.5");
//! assert_eq!(KeywordValue::from(1024.0).to_string(), "1024");
//! assert_eq!(KeywordValue::from("FSC-A").to_string(), "FSC-A");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single TEXT segment value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeywordValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl KeywordValue {
    /// Returns the value as a string slice if it is stored as text.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            KeywordValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as an integer, parsing text if necessary.
    ///
    /// Zero-padded offset fields parse as their numeric value.
    ///
    /// ```rust
    /// use fcs_writer::KeywordValue;
    ///
    /// assert_eq!(KeywordValue::from("000000000058").as_u64(), Some(58));
    /// assert_eq!(KeywordValue::from(7).as_u64(), Some(7));
    /// assert_eq!(KeywordValue::from("FSC").as_u64(), None);
    /// ```
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            KeywordValue::Integer(n) => u64::try_from(*n).ok(),
            KeywordValue::Float(_) => None,
            KeywordValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for KeywordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeywordValue::Integer(n) => write!(f, "{}", n),
            KeywordValue::Float(x) if x.is_nan() => f.write_str("NaN"),
            KeywordValue::Float(x) if x.is_infinite() => {
                f.write_str(if *x > 0.0 { "Infinity" } else { "-Infinity" })
            }
            KeywordValue::Float(x) => write!(f, "{}", x),
            KeywordValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for KeywordValue {
    fn from(v: &str) -> Self {
        KeywordValue::Text(v.to_string())
    }
}

impl From<String> for KeywordValue {
    fn from(v: String) -> Self {
        KeywordValue::Text(v)
    }
}

impl From<i32> for KeywordValue {
    fn from(v: i32) -> Self {
        KeywordValue::Integer(i64::from(v))
    }
}

impl From<i64> for KeywordValue {
    fn from(v: i64) -> Self {
        KeywordValue::Integer(v)
    }
}

impl From<u32> for KeywordValue {
    fn from(v: u32) -> Self {
        KeywordValue::Integer(i64::from(v))
    }
}

impl From<u64> for KeywordValue {
    fn from(v: u64) -> Self {
        match i64::try_from(v) {
            Ok(n) => KeywordValue::Integer(n),
            Err(_) => KeywordValue::Text(v.to_string()),
        }
    }
}

impl From<usize> for KeywordValue {
    fn from(v: usize) -> Self {
        KeywordValue::from(v as u64)
    }
}

impl From<f32> for KeywordValue {
    fn from(v: f32) -> Self {
        KeywordValue::Float(f64::from(v))
    }
}

impl From<f64> for KeywordValue {
    fn from(v: f64) -> Self {
        KeywordValue::Float(v)
    }
}
