//! Bounded, validated metadata container
//!
//! Resources that accept free-form annotations carry a `metadata` object
//! limited to 3 entries, with keys up to 50 characters and values up to
//! 500 characters. `Metadata` enforces those limits at the mutation
//! boundary, so an invalid annotation can never reach the wire, whether
//! the container is built incrementally by caller code or decoded from a
//! payload.
//!
//! Instances are owned by exactly one resource and mutated from a single
//! request-building flow; share across threads only with external
//! synchronization.

use std::collections::BTreeMap;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{MetadataError, MetadataResult};

/// Maximum number of entries a metadata object may hold.
pub const MAX_ENTRIES: usize = 3;
/// Maximum key length, in characters.
pub const MAX_KEY_CHARS: usize = 50;
/// Maximum value length, in characters.
pub const MAX_VALUE_CHARS: usize = 500;

/// Key-value annotations attached to a resource.
///
/// The backing map is private: every write goes through [`Metadata::set`],
/// which re-validates the limits on each call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    entries: BTreeMap<String, String>,
}

impl Metadata {
    /// Create an empty metadata object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an entry.
    ///
    /// Overwriting an existing key does not count against the entry cap.
    /// On failure the container is left unchanged.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> MetadataResult<()> {
        let key = key.into();
        let value = value.into();
        validate_key(&key)?;
        validate_value(&key, &value)?;
        if self.entries.len() >= MAX_ENTRIES && !self.entries.contains_key(&key) {
            return Err(MetadataError::CapacityExceeded { max: MAX_ENTRIES });
        }
        self.entries.insert(key, value);
        Ok(())
    }

    /// Remove an entry, returning its value. Absent keys are a no-op.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    /// Current value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Drop every entry. Frees all 3 slots.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Read-only snapshot of the backing map, for diffing and assertions.
    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }
}

/// Build from a source mapping, re-running the mutation-time validation.
impl TryFrom<BTreeMap<String, String>> for Metadata {
    type Error = MetadataError;

    fn try_from(source: BTreeMap<String, String>) -> MetadataResult<Self> {
        let mut metadata = Metadata::new();
        for (key, value) in source {
            metadata.set(key, value)?;
        }
        Ok(metadata)
    }
}

fn validate_key(key: &str) -> MetadataResult<()> {
    if key.is_empty() {
        return Err(MetadataError::InvalidKey {
            key: key.to_string(),
            reason: "key must not be empty".to_string(),
        });
    }
    if key.chars().count() > MAX_KEY_CHARS {
        return Err(MetadataError::InvalidKey {
            key: key.to_string(),
            reason: format!("key exceeds {MAX_KEY_CHARS} characters"),
        });
    }
    Ok(())
}

fn validate_value(key: &str, value: &str) -> MetadataResult<()> {
    if value.chars().count() > MAX_VALUE_CHARS {
        return Err(MetadataError::InvalidValue {
            key: key.to_string(),
            reason: format!("value exceeds {MAX_VALUE_CHARS} characters"),
        });
    }
    Ok(())
}

impl Serialize for Metadata {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.entries.serialize(serializer)
    }
}

/// Deserialization funnels every entry through [`Metadata::set`], so a
/// payload that violates the limits fails to decode instead of bypassing
/// the mutation boundary.
impl<'de> Deserialize<'de> for Metadata {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MetadataVisitor;

        impl<'de> Visitor<'de> for MetadataVisitor {
            type Value = Metadata;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a map of up to 3 string keys to string values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut metadata = Metadata::new();
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    metadata.set(key, value).map_err(serde::de::Error::custom)?;
                }
                Ok(metadata)
            }
        }

        deserializer.deserialize_map(MetadataVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut metadata = Metadata::new();
        metadata.set("order_id", "ORD-123").unwrap();
        metadata.set("batch", "2024-06").unwrap();

        assert_eq!(metadata.len(), 2);
        assert_eq!(metadata.get("order_id"), Some("ORD-123"));
        assert_eq!(metadata.get("missing"), None);
    }

    #[test]
    fn test_fourth_distinct_key_is_rejected() {
        let mut metadata = Metadata::new();
        metadata.set("a", "1").unwrap();
        metadata.set("b", "2").unwrap();
        metadata.set("c", "3").unwrap();

        let err = metadata.set("d", "4").unwrap_err();
        assert_eq!(err, MetadataError::CapacityExceeded { max: MAX_ENTRIES });

        // The failed call leaves the container unchanged.
        assert_eq!(metadata.len(), 3);
        assert_eq!(metadata.get("d"), None);
    }

    #[test]
    fn test_overwrite_on_full_map_succeeds() {
        let mut metadata = Metadata::new();
        metadata.set("a", "1").unwrap();
        metadata.set("b", "2").unwrap();
        metadata.set("c", "3").unwrap();

        metadata.set("b", "two").unwrap();
        assert_eq!(metadata.len(), 3);
        assert_eq!(metadata.get("b"), Some("two"));
    }

    #[test]
    fn test_key_constraints() {
        let mut metadata = Metadata::new();

        let err = metadata.set("", "v").unwrap_err();
        assert!(matches!(err, MetadataError::InvalidKey { .. }));

        let err = metadata.set("k".repeat(51), "v").unwrap_err();
        assert!(matches!(err, MetadataError::InvalidKey { .. }));

        metadata.set("k".repeat(50), "v").unwrap();
        assert_eq!(metadata.len(), 1);
    }

    #[test]
    fn test_value_constraints() {
        let mut metadata = Metadata::new();

        let err = metadata.set("k", "v".repeat(501)).unwrap_err();
        assert!(matches!(err, MetadataError::InvalidValue { .. }));
        assert!(metadata.is_empty());

        metadata.set("k", "v".repeat(500)).unwrap();
        assert_eq!(metadata.len(), 1);
    }

    #[test]
    fn test_limits_count_characters_not_bytes() {
        let mut metadata = Metadata::new();
        // 50 two-byte characters: within the key limit.
        metadata.set("é".repeat(50), "v").unwrap();
    }

    #[test]
    fn test_remove_frees_a_slot() {
        let mut metadata = Metadata::new();
        metadata.set("a", "1").unwrap();
        metadata.set("b", "2").unwrap();
        metadata.set("c", "3").unwrap();

        // Removing an absent key is a no-op.
        assert_eq!(metadata.remove("missing"), None);
        assert_eq!(metadata.len(), 3);

        assert_eq!(metadata.remove("b").as_deref(), Some("2"));
        metadata.set("d", "4").unwrap();
        assert_eq!(metadata.len(), 3);
    }

    #[test]
    fn test_clear_resets_capacity() {
        let mut metadata = Metadata::new();
        metadata.set("a", "1").unwrap();
        metadata.set("b", "2").unwrap();
        metadata.set("c", "3").unwrap();

        metadata.clear();
        assert!(metadata.is_empty());

        metadata.set("x", "1").unwrap();
        metadata.set("y", "2").unwrap();
        metadata.set("z", "3").unwrap();
        assert_eq!(metadata.len(), 3);
    }

    #[test]
    fn test_value_equality() {
        let mut left = Metadata::new();
        left.set("a", "1").unwrap();
        left.set("b", "2").unwrap();

        let mut right = Metadata::new();
        // Insertion order does not matter.
        right.set("b", "2").unwrap();
        right.set("a", "1").unwrap();

        assert_eq!(left, right);

        right.set("b", "other").unwrap();
        assert_ne!(left, right);
    }

    #[test]
    fn test_try_from_source_mapping() {
        let mut source = BTreeMap::new();
        source.insert("a".to_string(), "1".to_string());
        source.insert("b".to_string(), "2".to_string());
        let metadata = Metadata::try_from(source).unwrap();
        assert_eq!(metadata.len(), 2);

        let mut oversized = BTreeMap::new();
        for i in 0..4 {
            oversized.insert(format!("k{i}"), "v".to_string());
        }
        assert!(Metadata::try_from(oversized).is_err());
    }

    #[test]
    fn test_serialize_as_plain_object() {
        let mut metadata = Metadata::new();
        metadata.set("order_id", "ORD-123").unwrap();
        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json, serde_json::json!({"order_id": "ORD-123"}));
    }

    #[test]
    fn test_deserialize_validates() {
        let metadata: Metadata =
            serde_json::from_str(r#"{"a": "1", "b": "2", "c": "3"}"#).unwrap();
        assert_eq!(metadata.len(), 3);

        // A fourth key fails the whole decode.
        let result: Result<Metadata, _> =
            serde_json::from_str(r#"{"a": "1", "b": "2", "c": "3", "d": "4"}"#);
        assert!(result.is_err());
    }
}
