//! The in-memory data model for a DataMark file.
//!
//! A [`Document`] maps string keys to string values. It wraps [`IndexMap`]
//! so iteration is predictable during debugging, but read order is
//! irrelevant to the format: serialization always emits entries sorted by
//! key, so two documents with the same entries render identically no matter
//! how they were built.
//!
//! ## Examples
//!
//! ```rust
//! use datamark::Document;
//!
//! let mut doc = Document::new();
//! doc.insert("title".to_string(), "Hello World".to_string());
//! doc.insert("body".to_string(), "Line one".to_string());
//!
//! assert_eq!(doc.len(), 2);
//! assert_eq!(doc.get("title").map(String::as_str), Some("Hello World"));
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A mapping from keys to values parsed from (or destined for) a DataMark
/// file.
///
/// Keys are unique; inserting an existing key replaces its value, which is
/// also how duplicate keys resolve on read (last occurrence wins). Values
/// may be empty strings; keys may not be empty (the parser never produces
/// one and the writer rejects one).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(IndexMap<String, String>);

impl Document {
    /// Creates an empty `Document`.
    #[must_use]
    pub fn new() -> Self {
        Document(IndexMap::new())
    }

    /// Creates an empty `Document` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Document(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair, returning the previous value for the key
    /// if there was one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use datamark::Document;
    ///
    /// let mut doc = Document::new();
    /// assert!(doc.insert("k".to_string(), "v1".to_string()).is_none());
    /// assert_eq!(doc.insert("k".to_string(), "v2".to_string()).as_deref(), Some("v1"));
    /// ```
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&String> {
        self.0.get(key)
    }

    /// Removes `key` from the document, returning its value if it was
    /// present. Order of the remaining entries is preserved.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.shift_remove(key)
    }

    /// Returns `true` if the document contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the document has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, String> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, String> {
        self.0.values()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.0.iter()
    }
}

impl From<HashMap<String, String>> for Document {
    fn from(map: HashMap<String, String>) -> Self {
        Document(map.into_iter().collect())
    }
}

impl From<Document> for HashMap<String, String> {
    fn from(doc: Document) -> Self {
        doc.0.into_iter().collect()
    }
}

impl FromIterator<(String, String)> for Document {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Document(IndexMap::from_iter(iter))
    }
}

impl Extend<(String, String)> for Document {
    fn extend<T: IntoIterator<Item = (String, String)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Document {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
