//! Insertion-ordered field mappings and their form encoding.
//!
//! A gateway submission is an ordered set of name/value pairs serialized
//! as `application/x-www-form-urlencoded`. Order is part of the
//! contract: the HMAC signature is computed over the encoded bytes, so
//! reordering fields invalidates it.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// An insertion-ordered mapping of field names to values.
///
/// Unlike a hash map, a `FieldMap` keeps fields in the order they were
/// added and encodes them in exactly that order. Duplicate names are
/// permitted; [`FieldMap::get`] returns the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap(Vec<(String, String)>);

impl FieldMap {
    /// Creates an empty field map.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a field to the end of the map.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    /// Returns the value of the first field with the given name, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find_map(|(n, v)| (n == name).then_some(v.as_str()))
    }

    /// Returns the number of fields in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Serializes the map as `application/x-www-form-urlencoded`,
    /// preserving insertion order.
    #[must_use]
    pub fn to_form_encoded(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in self.iter() {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }
}

impl From<Vec<(String, String)>> for FieldMap {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }
}

impl FromIterator<(String, String)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for FieldMap {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_insertion_order() {
        let mut map = FieldMap::new();
        map.push("ZULU", "1");
        map.push("ALPHA", "2");
        map.push("MIKE", "3");

        let names: Vec<&str> = map.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["ZULU", "ALPHA", "MIKE"]);
    }

    #[test]
    fn test_form_encoding_follows_order() {
        let mut map = FieldMap::new();
        map.push("B", "2");
        map.push("A", "1");

        assert_eq!(map.to_form_encoded(), "B=2&A=1");
    }

    #[test]
    fn test_form_encoding_escapes_reserved_characters() {
        let mut map = FieldMap::new();
        map.push("REFERENCE", "order 42&more=yes");

        assert_eq!(map.to_form_encoded(), "REFERENCE=order+42%26more%3Dyes");
    }

    #[test]
    fn test_empty_map_encodes_to_empty_string() {
        assert_eq!(FieldMap::new().to_form_encoded(), "");
        assert!(FieldMap::new().is_empty());
    }

    #[test]
    fn test_get_returns_first_match() {
        let mut map = FieldMap::new();
        map.push("NAME", "first");
        map.push("NAME", "second");

        assert_eq!(map.get("NAME"), Some("first"));
        assert_eq!(map.get("MISSING"), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_serde_roundtrip() {
        let map: FieldMap = vec![("A".to_owned(), "1".to_owned())].into();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"[["A","1"]]"#);
        let back: FieldMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
