//! Draft storage for in-progress wizard input
//!
//! A draft is a shallow map from field name to JSON value. It exists only
//! for the lifetime of one wizard session and is never persisted until
//! finalize.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uncommitted, partially populated wizard input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Draft(BTreeMap<String, Value>);

impl Draft {
    /// Create an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the draft has no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of populated fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Set a field value, replacing any previous value
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    /// Builder-style `set` for constructing partial drafts
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    /// Get a field value
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Get a field as an integer, if present and integral
    pub fn get_i64(&self, field: &str) -> Option<i64> {
        self.0.get(field).and_then(Value::as_i64)
    }

    /// Get a field as a string slice, if present and textual
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    /// Check whether a field is populated (present and not null)
    pub fn contains(&self, field: &str) -> bool {
        matches!(self.0.get(field), Some(v) if !v.is_null())
    }

    /// Shallow-merge another draft into this one; top-level fields from
    /// `partial` overwrite existing ones
    pub fn merge(&mut self, partial: Draft) {
        self.0.extend(partial.0);
    }

    /// Iterate over populated fields in name order
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

/// Holds the draft for one wizard session
///
/// Not thread-shared: the store is owned by a single controller instance.
#[derive(Debug, Default)]
pub struct DraftStore {
    draft: Draft,
}

impl DraftStore {
    /// Create a store with an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// The current draft
    pub fn get(&self) -> &Draft {
        &self.draft
    }

    /// Shallow-merge a partial draft and return the merged result
    pub fn patch(&mut self, partial: Draft) -> &Draft {
        self.draft.merge(partial);
        &self.draft
    }

    /// Discard all fields and return the now-empty draft
    pub fn reset(&mut self) -> &Draft {
        self.draft = Draft::new();
        &self.draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_and_get() {
        let mut draft = Draft::new();
        draft.set("monthly_income", 500000);
        draft.set("note", "hello");

        assert_eq!(draft.get_i64("monthly_income"), Some(500000));
        assert_eq!(draft.get_str("note"), Some("hello"));
        assert!(draft.get("missing").is_none());
        assert_eq!(draft.len(), 2);
    }

    #[test]
    fn test_contains_ignores_null() {
        let mut draft = Draft::new();
        draft.set("a", Value::Null);
        draft.set("b", 1);

        assert!(!draft.contains("a"));
        assert!(draft.contains("b"));
        assert!(!draft.contains("c"));
    }

    #[test]
    fn test_merge_is_shallow_and_overwrites() {
        let mut draft = Draft::new().with("a", 1).with("b", json!({"x": 1}));
        let partial = Draft::new().with("b", json!({"y": 2})).with("c", 3);

        draft.merge(partial);

        assert_eq!(draft.get_i64("a"), Some(1));
        // Shallow merge: the whole value for "b" is replaced, not deep-merged
        assert_eq!(draft.get("b"), Some(&json!({"y": 2})));
        assert_eq!(draft.get_i64("c"), Some(3));
    }

    #[test]
    fn test_store_patch_and_reset() {
        let mut store = DraftStore::new();
        assert!(store.get().is_empty());

        store.patch(Draft::new().with("monthly_income", 500000));
        store.patch(Draft::new().with("spending_cap", 300000));
        assert_eq!(store.get().len(), 2);

        let after_reset = store.reset();
        assert!(after_reset.is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let draft = Draft::new().with("monthly_income", 500000).with("label", "main");
        let json = serde_json::to_string(&draft).unwrap();
        let back: Draft = serde_json::from_str(&json).unwrap();
        assert_eq!(draft, back);
    }
}
