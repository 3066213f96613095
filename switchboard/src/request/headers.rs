//! Case-insensitive, multi-valued request headers.

use std::collections::{BTreeMap, BTreeSet};

/// Request headers keyed by lower-cased name.
///
/// ## Examples
///
/// ```rust
/// use switchboard::RequestHeaders;
///
/// let mut headers = RequestHeaders::new();
/// headers.add("Accept", "application/json");
/// assert!(!headers.try_add("accept", "text/plain"));
/// assert_eq!(headers.get("ACCEPT").count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestHeaders {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl RequestHeaders {
    /// Creates an empty header set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value, keeping any existing values for the name.
    pub fn add(&mut self, name: &str, value: impl Into<String>) {
        self.entries
            .entry(name.to_ascii_lowercase())
            .or_default()
            .insert(value.into());
    }

    /// Adds a value only when the header is not present yet.
    ///
    /// Returns `true` if the value was added.
    pub fn try_add(&mut self, name: &str, value: impl Into<String>) -> bool {
        let key = name.to_ascii_lowercase();
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.entry(key).or_default().insert(value.into());
        true
    }

    /// Replaces every value for the name.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let mut values = BTreeSet::new();
        values.insert(value.into());
        self.entries.insert(name.to_ascii_lowercase(), values);
    }

    /// Removes the header, returning `true` if it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        self.entries.remove(&name.to_ascii_lowercase()).is_some()
    }

    /// Returns the values for the name.
    pub fn get(&self, name: &str) -> impl Iterator<Item = &str> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Returns `true` if the header is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_lowercase())
    }

    /// Copies every header from `other`, replacing same-named headers.
    pub fn extend_from(&mut self, other: &RequestHeaders) {
        for (name, values) in &other.entries {
            self.entries.insert(name.clone(), values.clone());
        }
    }

    /// Iterates `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .flat_map(|(name, values)| values.iter().map(move |v| (name.as_str(), v.as_str())))
    }

    /// Returns `true` if there are no headers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
