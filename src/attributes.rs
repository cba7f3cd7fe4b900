//! Ordered resource attribute set.
//!
//! An [`AttributeSet`] maps dot-namespaced attribute keys (`service.name`,
//! `deployment.environment`, ...) to string values. Insertion order is kept
//! so that resolution output is reproducible run to run; keys are unique and
//! a later [`put`](AttributeSet::put) for an existing key overwrites the
//! value in place without moving the entry.
//!
//! Attribute counts are small (a handful to a few dozen entries), so the set
//! is backed by a plain vector and lookups are linear.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Insertion-ordered mapping of attribute key to string value.
///
/// Values are never null: an absent attribute is simply not present in the
/// set, while an explicitly supplied empty value is stored as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    entries: Vec<(String, String)>,
}

impl AttributeSet {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or overwrite an attribute.
    ///
    /// If `key` is already present its value is replaced and the entry keeps
    /// its original position; otherwise the entry is appended.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up an attribute value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the set contains `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Number of attributes in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (key, value) in iter {
            set.put(key, value);
        }
        set
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

impl IntoIterator for AttributeSet {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for AttributeSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AttributeSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SetVisitor;

        impl<'de> Visitor<'de> for SetVisitor {
            type Value = AttributeSet;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of string attribute keys to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut set = AttributeSet::new();
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    set.put(key, value);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(SetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_appends_in_order() {
        let mut set = AttributeSet::new();
        set.put("b", "2");
        set.put("a", "1");
        set.put("c", "3");
        let keys: Vec<&str> = set.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_put_overwrites_in_place() {
        let mut set = AttributeSet::new();
        set.put("a", "1");
        set.put("b", "2");
        set.put("a", "replaced");
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("a"), Some("replaced"));
        let keys: Vec<&str> = set.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_empty_value_is_preserved() {
        let mut set = AttributeSet::new();
        set.put("flag", "");
        assert!(set.contains_key("flag"));
        assert_eq!(set.get("flag"), Some(""));
    }

    #[test]
    fn test_serialize_preserves_order() {
        let set: AttributeSet = [("z", "26"), ("a", "1")].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"z":"26","a":"1"}"#);
    }

    #[test]
    fn test_deserialize_from_map() {
        let set: AttributeSet = serde_json::from_str(r#"{"service.name":"svc","k":""}"#).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("service.name"), Some("svc"));
        assert_eq!(set.get("k"), Some(""));
    }
}
