//! Applied filter set
//!
//! Filters are rendered into exports so readers know which slice of the data
//! they are looking at. Keys keep their insertion order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered mapping from filter key to a scalar or list value
///
/// # Examples
///
/// ```
/// use quire::domain::FilterSet;
/// use serde_json::json;
///
/// let mut filters = FilterSet::new();
/// filters.insert("status", json!("active"));
/// filters.insert("owner", json!(null));
///
/// assert_eq!(filters.len(), 2);
/// assert_eq!(filters.active().count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSet(Map<String, Value>);

impl FilterSet {
    /// Creates an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a filter value, keeping the key's original position if it exists
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// Builder-style [`FilterSet::insert`]
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.insert(key, value);
        self
    }

    /// Number of filters, including empty ones
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no filters were supplied at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All filters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Filters that carry a value worth rendering
    ///
    /// Null, empty strings and empty lists are skipped.
    pub fn active(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.iter().filter(|(_, value)| !is_blank(value))
    }

    /// Whether at least one filter would be rendered
    pub fn has_active(&self) -> bool {
        self.active().next().is_some()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for FilterSet {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Null, the empty string, or a list holding nothing but blanks
pub(crate) fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.iter().all(is_blank),
        _ => false,
    }
}
