//! Evaluation output.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Resolved flags, one entry per declared flag, in declaration order.
///
/// An entry is `None` when its resolver produced nothing: a lookup with
/// no value for the active state, or a computed flag that returned
/// `None`. Serialization omits such entries.
#[derive(Clone, Debug, PartialEq)]
pub struct DriverResult<T = Value> {
    entries: Vec<(String, Option<T>)>,
}

impl<T> DriverResult<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, name: String, value: Option<T>) {
        self.entries.push((name, value));
    }

    /// Resolved value of `name`; `None` if undeclared or absent.
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .and_then(|(_, value)| value.as_ref())
    }

    /// Whether `name` was declared, regardless of its value.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(existing, _)| existing == name)
    }

    /// Iterate `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&T>)> + '_ {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DriverResult<Value> {
    /// Convenience accessor for boolean flags such as membership results.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    /// Convenience accessor for text flags.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Render as a JSON object; absent entries are left out.
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.entries
                .iter()
                .filter_map(|(name, value)| value.clone().map(|value| (name.clone(), value)))
                .collect(),
        )
    }
}

impl<T> IntoIterator for DriverResult<T> {
    type Item = (String, Option<T>);
    type IntoIter = std::vec::IntoIter<(String, Option<T>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<T: Serialize> Serialize for DriverResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let present = self.entries.iter().filter(|(_, value)| value.is_some());
        let mut map = serializer.serialize_map(Some(present.clone().count()))?;
        for (name, value) in present {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
