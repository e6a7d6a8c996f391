// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed in-memory value source.

use crate::domain::RawValue;
use crate::ports::ValueSource;
use std::collections::HashMap;

/// A value source backed by an in-memory map.
///
/// A key is absent exactly when it is not in the map. The map is fixed once the
/// source is handed to a registry; `with_value` is only for building it.
///
/// # Examples
///
/// ```rust
/// use typed_registry::adapters::MapSource;
/// use typed_registry::domain::RawValue;
/// use typed_registry::ports::ValueSource;
///
/// let source = MapSource::new().with_value("retries", 3);
/// assert_eq!(source.get("retries"), Some(RawValue::Int(3)));
/// assert_eq!(source.get("timeout"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapSource {
    values: HashMap<String, RawValue>,
}

impl MapSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value, replacing any previous value for the key.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the stored keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.values.keys()
    }
}

impl From<HashMap<String, RawValue>> for MapSource {
    fn from(values: HashMap<String, RawValue>) -> Self {
        Self { values }
    }
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for MapSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl ValueSource for MapSource {
    fn get(&self, key: &str) -> Option<RawValue> {
        self.values.get(key).cloned()
    }

    fn name(&self) -> &str {
        "map"
    }
}
