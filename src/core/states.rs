//! Ordered state snapshots and the values derived from them.
//!
//! A `States` value is a prioritized list of named conditions. The first
//! condition that holds is the active state; everything else in this
//! module is a pure view over that snapshot.

use super::truthy::Truthy;
use indexmap::{IndexMap, IndexSet};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// Ordered mapping from state name to condition.
///
/// Declaration order is priority order: when several conditions hold,
/// the one declared first becomes the active state.
///
/// # Example
///
/// ```rust
/// use state_flags::States;
///
/// let states = States::new()
///     .with("isNotRecorded", false)
///     .with("isUploading", true)
///     .with("isUploaded", true);
///
/// let active = states.active().unwrap();
/// assert_eq!(active.name, "isUploading");
/// assert_eq!(active.index, 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct States {
    entries: IndexMap<String, bool>,
}

impl States {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a state, coercing `value` to a boolean.
    ///
    /// Setting a name that is already declared overwrites its value but
    /// keeps its original priority.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Truthy) {
        self.entries.insert(name.into(), value.is_truthy());
    }

    /// Builder-style variant of [`States::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl Truthy) -> Self {
        self.insert(name, value);
        self
    }

    /// Number of declared states.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Condition recorded for `name`, if declared.
    pub fn get(&self, name: &str) -> Option<bool> {
        self.entries.get(name).copied()
    }

    /// Iterate `(name, condition)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
    }

    /// Iterate state names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// The first state, in declaration order, whose condition holds.
    pub fn active(&self) -> Option<ActiveState<'_>> {
        self.entries
            .iter()
            .enumerate()
            .find(|(_, (_, value))| **value)
            .map(|(index, (name, _))| ActiveState {
                name: name.as_str(),
                index,
            })
    }

    /// Position of the active state, if any.
    pub fn active_index(&self) -> Option<usize> {
        self.active().map(|active| active.index)
    }

    /// Ordinal positions of every declared state.
    pub fn state_enum(&self) -> StateEnum {
        StateEnum {
            names: self.entries.keys().cloned().collect(),
        }
    }
}

/// Equal when both declare the same states, in the same priority order,
/// with the same conditions.
impl PartialEq for States {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for States {}

impl<K: Into<String>, V: Truthy> FromIterator<(K, V)> for States {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut states = States::new();
        for (name, value) in iter {
            states.insert(name, value);
        }
        states
    }
}

impl<K: Into<String>, V: Truthy> Extend<(K, V)> for States {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

/// Object keys become state names in document order; values are coerced
/// with JavaScript truthiness.
impl From<Map<String, Value>> for States {
    fn from(map: Map<String, Value>) -> Self {
        States {
            entries: map
                .into_iter()
                .map(|(name, value)| (name, value.is_truthy()))
                .collect(),
        }
    }
}

impl Serialize for States {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for States {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Map::<String, Value>::deserialize(deserializer).map(States::from)
    }
}

/// The selected state of a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveState<'a> {
    /// Name of the state
    pub name: &'a str,
    /// Zero-based declaration position
    pub index: usize,
}

/// Mapping from state name to declaration position.
///
/// Positions are assigned regardless of which conditions hold, so
/// computed flags can express ordinal rules such as "any state declared
/// before `isUploaded`".
///
/// # Example
///
/// ```rust
/// use state_flags::States;
///
/// let states = States::new()
///     .with("draft", false)
///     .with("review", true)
///     .with("published", false);
/// let order = states.state_enum();
///
/// assert_eq!(order.index_of("published"), Some(2));
/// assert!(order.is_before(states.active_index(), "published"));
/// assert!(!order.is_before(states.active_index(), "draft"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StateEnum {
    names: IndexSet<String>,
}

impl PartialEq for StateEnum {
    fn eq(&self, other: &Self) -> bool {
        self.names.iter().eq(other.names.iter())
    }
}

impl Eq for StateEnum {}

impl StateEnum {
    /// Ordinal of `name`, if declared.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.get_index_of(name)
    }

    /// Name declared at `index`.
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.names.get_index(index).map(String::as_str)
    }

    /// True when `index` is present and declared strictly before `name`.
    ///
    /// Returns `false` for an absent index or an unknown name.
    pub fn is_before(&self, index: Option<usize>, name: &str) -> bool {
        match (index, self.index_of(name)) {
            (Some(index), Some(target)) => index < target,
            _ => false,
        }
    }

    /// Iterate `(name, ordinal)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(index, name)| (name.as_str(), index))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
