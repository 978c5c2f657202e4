//! Progress documents and user identity.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Opaque identifier for a user, issued by the hosting auth layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wrap an externally issued id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Sparse completion map for one (user, week): exercise name to done flag.
///
/// Absent names count as not completed. Deserialization accepts loosely
/// typed documents: a non-boolean value is coerced to its truthiness, so a
/// flag written by a sloppy client still reads as a boolean here and the
/// aggregation never sees anything else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProgressDocument(BTreeMap<String, bool>);

impl ProgressDocument {
    /// Empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// A single-key partial update, the payload of a toggle write.
    pub fn single(name: impl Into<String>, done: bool) -> Self {
        let mut document = Self::default();
        document.set(name, done);
        document
    }

    /// Completion flag for one exercise; missing counts as not completed.
    pub fn is_done(&self, name: &str) -> bool {
        self.0.get(name).copied().unwrap_or(false)
    }

    /// Set one exercise's flag.
    pub fn set(&mut self, name: impl Into<String>, done: bool) {
        self.0.insert(name.into(), done);
    }

    /// Merge a partial update into this document: keys in `partial`
    /// overwrite, every other key survives (union-overwrite).
    pub fn merge_from(&mut self, partial: &ProgressDocument) {
        for (name, done) in &partial.0 {
            self.0.insert(name.clone(), *done);
        }
    }

    /// Drop every entry whose name the predicate rejects. Used at the
    /// store-read boundary to ignore keys outside the known exercise set.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str) -> bool,
    {
        self.0.retain(|name, _| keep(name));
    }

    /// Number of entries (completed or not).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the document has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of entries flagged completed.
    pub fn completed(&self) -> usize {
        self.0.values().filter(|done| **done).count()
    }

    /// Iterate entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(name, done)| (name.as_str(), *done))
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for ProgressDocument {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, done)| (name.into(), done)).collect())
    }
}

impl<'de> Deserialize<'de> for ProgressDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
        Ok(Self(
            raw.into_iter().map(|(name, value)| (name, truthy(&value))).collect(),
        ))
    }
}

/// JavaScript-style truthiness for a JSON value.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_not_done() {
        let document = ProgressDocument::single("Plank", true);
        assert!(document.is_done("Plank"));
        assert!(!document.is_done("Barbell Squats"));
    }

    #[test]
    fn merge_is_union_overwrite() {
        let mut document: ProgressDocument =
            [("Plank", true), ("Barbell Squats", false)].into_iter().collect();
        document.merge_from(&ProgressDocument::single("Barbell Squats", true));

        assert!(document.is_done("Plank"), "unrelated key must survive");
        assert!(document.is_done("Barbell Squats"));
        assert_eq!(document.len(), 2);
    }

    #[test]
    fn deserialization_coerces_truthiness() {
        let json = r#"{
            "Plank": true,
            "Barbell Squats": 1,
            "Leg Press": 0,
            "Calf Raises": "yes",
            "Leg Curls": "",
            "Face Pulls": null
        }"#;
        let document: ProgressDocument = serde_json::from_str(json).unwrap();

        assert!(document.is_done("Plank"));
        assert!(document.is_done("Barbell Squats"));
        assert!(!document.is_done("Leg Press"));
        assert!(document.is_done("Calf Raises"));
        assert!(!document.is_done("Leg Curls"));
        assert!(!document.is_done("Face Pulls"));
    }

    #[test]
    fn retain_drops_unknown_names() {
        let mut document: ProgressDocument =
            [("Plank", true), ("Swimming", true)].into_iter().collect();
        document.retain(|name| name == "Plank");

        assert_eq!(document.len(), 1);
        assert!(document.is_done("Plank"));
    }

    #[test]
    fn completed_counts_only_true_flags() {
        let document: ProgressDocument =
            [("Plank", true), ("Barbell Squats", false), ("Leg Press", true)]
                .into_iter()
                .collect();
        assert_eq!(document.completed(), 2);
        assert_eq!(document.len(), 3);
    }

    #[test]
    fn serializes_as_a_plain_map() {
        let document = ProgressDocument::single("Plank", true);
        assert_eq!(
            serde_json::to_string(&document).unwrap(),
            r#"{"Plank":true}"#
        );
    }
}
