//! Change-tracking property store behind generated models.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::StoreError;

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    value: Value,
    changed: bool,
}

/// Property values of a model, keyed by wire name.
///
/// Writes made after initialization is completed are flagged as changed.
/// Values loaded from a response are not, so a PATCH built from a fetched
/// model can send only what the caller touched.
///
/// ## Examples
///
/// ```rust
/// use switchboard::BackingStore;
///
/// let mut store = BackingStore::new();
/// store.set("subject", Some("standup")).unwrap();
/// assert!(store.is_changed("subject"));
///
/// store.set_initialization_completed(true);
/// assert!(!store.is_changed("subject"));
/// assert_eq!(store.get::<String>("subject").unwrap().as_deref(), Some("standup"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BackingStore {
    entries: BTreeMap<String, Entry>,
    initialization_completed: bool,
    return_only_changed_values: bool,
}

impl Default for BackingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BackingStore {
    /// Creates an empty store with initialization completed.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            initialization_completed: true,
            return_only_changed_values: false,
        }
    }

    /// Creates a store holding decoded values, none of them flagged as changed.
    pub fn from_values(values: BTreeMap<String, Value>) -> Self {
        let entries = values
            .into_iter()
            .map(|(key, value)| {
                (
                    key,
                    Entry {
                        value,
                        changed: false,
                    },
                )
            })
            .collect();
        Self {
            entries,
            initialization_completed: true,
            return_only_changed_values: false,
        }
    }

    /// Reads a value.
    ///
    /// Missing keys and JSON `null` read as `None`, as do unchanged keys while
    /// [`return_only_changed_values`](Self::return_only_changed_values) is on.
    ///
    /// ## Errors
    ///
    /// Returns [`StoreError::TypeMismatch`] if the stored value cannot be
    /// decoded as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(value) = self.get_raw(key) else {
            return Ok(None);
        };
        if value.is_null() {
            return Ok(None);
        }
        serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| StoreError::TypeMismatch {
                key: key.to_string(),
                message: e.to_string(),
            })
    }

    /// Reads the stored JSON without decoding it.
    pub fn get_raw(&self, key: &str) -> Option<&Value> {
        self.entries
            .get(key)
            .filter(|entry| entry.changed || !self.return_only_changed_values)
            .map(|entry| &entry.value)
    }

    /// Writes a value; `None` stores an explicit `null`.
    ///
    /// ## Errors
    ///
    /// Returns [`StoreError::Unserializable`] if `value` cannot be encoded as JSON.
    pub fn set<T: Serialize>(&mut self, key: &str, value: Option<T>) -> Result<(), StoreError> {
        let value = match value {
            Some(v) => serde_json::to_value(v).map_err(|e| StoreError::Unserializable {
                key: key.to_string(),
                message: e.to_string(),
            })?,
            None => Value::Null,
        };
        self.set_raw(key, value);
        Ok(())
    }

    /// Writes raw JSON.
    pub fn set_raw(&mut self, key: &str, value: Value) {
        let changed = self.initialization_completed;
        self.entries
            .insert(key.to_string(), Entry { value, changed });
    }

    /// Removes a key entirely.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key).map(|entry| entry.value)
    }

    /// Returns `true` if the key was written after initialization completed.
    pub fn is_changed(&self, key: &str) -> bool {
        self.entries.get(key).is_some_and(|entry| entry.changed)
    }

    /// Returns the keys written after initialization completed.
    pub fn changed_keys(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.changed)
            .map(|(key, _)| key.as_str())
            .collect()
    }

    /// Iterates visible `(key, value)` pairs.
    pub fn enumerate(&self) -> impl Iterator<Item = (&str, &Value)> {
        let only_changed = self.return_only_changed_values;
        self.entries
            .iter()
            .filter(move |(_, entry)| entry.changed || !only_changed)
            .map(|(key, entry)| (key.as_str(), &entry.value))
    }

    /// Returns whether writes are currently tracked as changes.
    pub fn initialization_completed(&self) -> bool {
        self.initialization_completed
    }

    /// Starts (`false`) or completes (`true`) initialization.
    ///
    /// Completing initialization clears every change flag.
    pub fn set_initialization_completed(&mut self, completed: bool) {
        self.initialization_completed = completed;
        if completed {
            for entry in self.entries.values_mut() {
                entry.changed = false;
            }
        }
    }

    /// Returns whether reads are limited to changed values.
    pub fn return_only_changed_values(&self) -> bool {
        self.return_only_changed_values
    }

    /// Limits reads and enumeration to changed values.
    pub fn set_return_only_changed_values(&mut self, only_changed: bool) {
        self.return_only_changed_values = only_changed;
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
