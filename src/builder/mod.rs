//! Ergonomic construction of states and flags.
//!
//! This module provides the `states!` and `flags!` macros, which keep the
//! literal-like feel of declaring conditions and resolvers inline, plus
//! free functions for building single resolvers.

pub mod macros;

use crate::core::{Resolver, StateEnum, States};

/// Create a membership resolver.
///
/// # Example
///
/// ```
/// use state_flags::builder::membership;
/// use state_flags::{evaluate, FlagsSpec, States};
///
/// let flags: FlagsSpec<bool> = FlagsSpec::new().flag("isBusy", membership(["saving", "loading"]));
/// let states = States::new().with("saving", false).with("loading", true);
///
/// assert_eq!(evaluate(&states, &flags).get("isBusy"), Some(&true));
/// ```
pub fn membership<T, I, S>(states: I) -> Resolver<T>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Resolver::membership(states)
}

/// Create a lookup resolver from `(state, value)` pairs.
///
/// # Example
///
/// ```
/// use state_flags::builder::lookup;
/// use state_flags::{evaluate, FlagsSpec, States};
///
/// let flags: FlagsSpec = FlagsSpec::new().flag("label", lookup([("saving", "Saving...")]));
/// let states = States::new().with("saving", true);
///
/// assert_eq!(evaluate(&states, &flags).get_str("label"), Some("Saving..."));
/// ```
pub fn lookup<T, I, K, V>(entries: I) -> Resolver<T>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<T>,
{
    Resolver::lookup(entries)
}

/// Create a computed resolver.
///
/// # Example
///
/// ```
/// use state_flags::builder::computed;
/// use state_flags::{evaluate, FlagsSpec, StateEnum, States};
///
/// let flags: FlagsSpec<bool> = FlagsSpec::new().flag(
///     "beforeDone",
///     computed(|_: &States, order: &StateEnum, index| order.is_before(index, "done")),
/// );
/// let states = States::new().with("todo", true).with("done", false);
///
/// assert_eq!(evaluate(&states, &flags).get("beforeDone"), Some(&true));
/// ```
pub fn computed<T, F, R>(compute: F) -> Resolver<T>
where
    F: Fn(&States, &StateEnum, Option<usize>) -> R + Send + Sync + 'static,
    R: Into<T>,
{
    Resolver::computed(compute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FlagsSpec;
    use crate::evaluate;
    use serde_json::json;

    #[test]
    fn helpers_build_matching_variants() {
        let member: Resolver<bool> = membership(["a"]);
        let table: Resolver<bool> = lookup([("a", true)]);
        let func: Resolver<bool> = computed(|_: &States, _: &StateEnum, _| false);

        assert!(matches!(member, Resolver::Membership(ref names) if names == &["a"]));
        assert!(matches!(table, Resolver::Lookup(_)));
        assert!(matches!(func, Resolver::Computed(_)));
    }

    #[test]
    fn helpers_compose_into_spec() {
        let flags: FlagsSpec = FlagsSpec::new()
            .flag("isDisabled", membership(["isNotRecorded"]))
            .flag("text", lookup([("isUploaded", "Download Demo")]))
            .flag(
                "step",
                computed(|_: &States, _: &StateEnum, index: Option<usize>| {
                    index.map_or(0, |i| i + 1) as u64
                }),
            );
        let states = States::new()
            .with("isNotRecorded", false)
            .with("isUploaded", true);

        let result = evaluate(&states, &flags);
        assert_eq!(result.to_json(), json!({"isDisabled": false, "text": "Download Demo", "step": 2}));
    }
}
