//! Ordered keyword map for the TEXT segment.
//!
//! [`KeywordMap`] wraps an [`IndexMap`] so keywords render in exactly the order the
//! map holds them. The encoder reorders a copy into canonical FCS order before
//! rendering; the map a caller builds is never modified.
//!
//! ```rust
//! use fcs_writer::{KeywordMap, KeywordValue};
//!
//! let mut map = KeywordMap::new();
//! map.insert("$PAR", 2);
//! map.insert("$P1N", "FSC-A");
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("$PAR"), Some(&KeywordValue::Integer(2)));
//! ```

use crate::KeywordValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An insertion-ordered map of keywords to values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordMap(IndexMap<String, KeywordValue>);

impl KeywordMap {
    /// Creates an empty `KeywordMap`.
    #[must_use]
    pub fn new() -> Self {
        KeywordMap(IndexMap::new())
    }

    /// Creates an empty `KeywordMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        KeywordMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a keyword, returning the previous value if there was one.
    ///
    /// Replacing an existing keyword keeps its position.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<KeywordValue>
    where
        K: Into<String>,
        V: Into<KeywordValue>,
    {
        self.0.insert(key.into(), value.into())
    }

    /// Returns a reference to the value of a keyword.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&KeywordValue> {
        self.0.get(key)
    }

    /// Removes a keyword, preserving the order of the remaining ones.
    pub fn remove(&mut self, key: &str) -> Option<KeywordValue> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keywords, in map order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, KeywordValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in map order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, KeywordValue> {
        self.0.values()
    }

    /// Returns an iterator over the keyword-value pairs, in map order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, KeywordValue> {
        self.0.iter()
    }
}

impl From<HashMap<String, KeywordValue>> for KeywordMap {
    fn from(map: HashMap<String, KeywordValue>) -> Self {
        KeywordMap(map.into_iter().collect())
    }
}

impl From<KeywordMap> for HashMap<String, KeywordValue> {
    fn from(map: KeywordMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for KeywordMap {
    type Item = (String, KeywordValue);
    type IntoIter = indexmap::map::IntoIter<String, KeywordValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a KeywordMap {
    type Item = (&'a String, &'a KeywordValue);
    type IntoIter = indexmap::map::Iter<'a, String, KeywordValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, KeywordValue)> for KeywordMap {
    fn from_iter<T: IntoIterator<Item = (String, KeywordValue)>>(iter: T) -> Self {
        KeywordMap(IndexMap::from_iter(iter))
    }
}
