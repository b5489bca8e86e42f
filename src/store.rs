//! User overrides for configuration entries.

use crate::manifest::ConfigEntry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Overrides keyed by entry identifier.
///
/// A missing key means "use the entry's default". An empty string is never
/// stored: setting a key to `""` removes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueStore {
    overrides: IndexMap<String, String>,
}

impl ValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` for `identifier`, or removes the override when `value` is empty.
    pub fn set<K: Into<String>, V: Into<String>>(&mut self, identifier: K, value: V) {
        let identifier = identifier.into();
        let value = value.into();
        if value.is_empty() {
            self.clear(&identifier);
        } else {
            self.overrides.insert(identifier, value);
        }
    }

    /// Removes the override for `identifier`, if any.
    pub fn clear(&mut self, identifier: &str) {
        self.overrides.shift_remove(identifier);
    }

    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.overrides.get(identifier).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.overrides.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Swaps in a whole new set of overrides. Empty values are dropped.
    pub fn replace(&mut self, overrides: IndexMap<String, String>) {
        self.overrides = overrides.into_iter().filter(|(_, v)| !v.is_empty()).collect();
    }

    /// Builds the value map used for rendering.
    ///
    /// Every entry maps to its override, falling back to its default. Keys held
    /// in the store that match no entry are passed through unchanged so that
    /// values loaded from an older or newer manifest stay available.
    pub fn resolved(&self, entries: &[ConfigEntry]) -> IndexMap<String, String> {
        let mut values: IndexMap<String, String> = entries
            .iter()
            .map(|entry| {
                let value = self.get(&entry.identifier).unwrap_or(entry.default.as_str());
                (entry.identifier.clone(), value.to_string())
            })
            .collect();
        for (key, value) in &self.overrides {
            values.insert(key.clone(), value.clone());
        }
        values
    }
}

impl FromIterator<(String, String)> for ValueStore {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut store = ValueStore::new();
        for (k, v) in iter {
            store.set(k, v);
        }
        store
    }
}
