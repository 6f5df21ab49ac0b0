//! Flag specifications.

use super::resolver::Resolver;
use super::states::{StateEnum, States};
use indexmap::IndexMap;
use serde_json::Value;

/// Ordered mapping from flag name to resolver.
///
/// The value type defaults to [`serde_json::Value`] so one spec can mix
/// booleans, strings and numbers. Use a concrete `T` when every flag
/// shares one type.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use state_flags::{evaluate, FlagsSpec, States};
///
/// let flags: FlagsSpec = FlagsSpec::new()
///     .membership("isDisabled", ["isNotRecorded", "isUploading"])
///     .lookup(
///         "text",
///         [
///             ("isNotRecorded", "Demo Disabled"),
///             ("isUploading", "Demo Uploading..."),
///             ("isUploaded", "Download Demo"),
///         ],
///     );
///
/// let states = States::new()
///     .with("isNotRecorded", false)
///     .with("isUploading", false)
///     .with("isUploaded", true);
///
/// let result = evaluate(&states, &flags);
/// assert_eq!(result.get("isDisabled"), Some(&json!(false)));
/// assert_eq!(result.get("text"), Some(&json!("Download Demo")));
/// ```
pub struct FlagsSpec<T = Value> {
    entries: IndexMap<String, Resolver<T>>,
}

impl<T> FlagsSpec<T> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Declare a flag. Re-declaring a name replaces its resolver in place.
    pub fn insert(&mut self, name: impl Into<String>, resolver: Resolver<T>) {
        self.entries.insert(name.into(), resolver);
    }

    /// Builder-style variant of [`FlagsSpec::insert`].
    pub fn flag(mut self, name: impl Into<String>, resolver: Resolver<T>) -> Self {
        self.insert(name, resolver);
        self
    }

    /// Declare a flag that is true while one of `states` is active.
    pub fn membership<I, S>(self, name: impl Into<String>, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flag(name, Resolver::membership(states))
    }

    /// Declare a flag that takes the value keyed by the active state.
    pub fn lookup<I, K, V>(self, name: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<T>,
    {
        self.flag(name, Resolver::lookup(entries))
    }

    /// Declare a flag computed from the whole snapshot.
    pub fn computed<F, R>(self, name: impl Into<String>, compute: F) -> Self
    where
        F: Fn(&States, &StateEnum, Option<usize>) -> R + Send + Sync + 'static,
        R: Into<T>,
    {
        self.flag(name, Resolver::computed(compute))
    }

    /// Declare a computed flag that may resolve to nothing.
    pub fn computed_optional<F>(self, name: impl Into<String>, compute: F) -> Self
    where
        F: Fn(&States, &StateEnum, Option<usize>) -> Option<T> + Send + Sync + 'static,
    {
        self.flag(name, Resolver::computed_optional(compute))
    }

    pub fn get(&self, name: &str) -> Option<&Resolver<T>> {
        self.entries.get(name)
    }

    /// Iterate `(name, resolver)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Resolver<T>)> + '_ {
        self.entries
            .iter()
            .map(|(name, resolver)| (name.as_str(), resolver))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for FlagsSpec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for FlagsSpec<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for FlagsSpec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(name, resolver)| (name, resolver)))
            .finish()
    }
}

impl<T, K: Into<String>> FromIterator<(K, Resolver<T>)> for FlagsSpec<T> {
    fn from_iter<I: IntoIterator<Item = (K, Resolver<T>)>>(iter: I) -> Self {
        let mut spec = FlagsSpec::new();
        for (name, resolver) in iter {
            spec.insert(name, resolver);
        }
        spec
    }
}
