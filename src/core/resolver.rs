//! Flag resolvers.
//!
//! A resolver turns the active state of a snapshot into a flag value.
//! There are exactly three kinds, carried as an explicit tagged enum.

use super::states::{ActiveState, StateEnum, States};
use super::value::IntoFlagValue;
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Signature of a computed resolver: `(states, state_enum, active_index)`.
pub type ComputedFn<T> =
    Arc<dyn Fn(&States, &StateEnum, Option<usize>) -> Option<T> + Send + Sync>;

/// How a single flag derives its value from the active state.
///
/// # Example
///
/// ```rust
/// use serde_json::{json, Value};
/// use state_flags::{Resolver, States};
///
/// let states = States::new().with("idle", false).with("busy", true);
/// let order = states.state_enum();
/// let active = states.active();
///
/// let disabled: Resolver<bool> = Resolver::membership(["busy"]);
/// assert_eq!(disabled.resolve(&states, &order, active), Some(true));
///
/// let label: Resolver<Value> = Resolver::lookup([("busy", "Working...")]);
/// assert_eq!(label.resolve(&states, &order, active), Some(json!("Working...")));
/// ```
pub enum Resolver<T> {
    /// Arbitrary function of the snapshot; may return nothing.
    Computed(ComputedFn<T>),
    /// True iff the active state is one of the listed names.
    Membership(Vec<String>),
    /// Value keyed by active state name.
    Lookup(IndexMap<String, T>),
}

impl<T> Resolver<T> {
    /// Computed resolver whose function always produces a value.
    ///
    /// The result is converted with `Into<T>`, so an `Option` returned for
    /// a JSON flag becomes `null`. Use [`Resolver::computed_value`] there.
    pub fn computed<F, R>(compute: F) -> Self
    where
        F: Fn(&States, &StateEnum, Option<usize>) -> R + Send + Sync + 'static,
        R: Into<T>,
    {
        Resolver::Computed(Arc::new(
            move |states: &States, order: &StateEnum, index: Option<usize>| {
                Some(compute(states, order, index).into())
            },
        ))
    }

    /// Computed resolver whose function may produce nothing.
    pub fn computed_optional<F>(compute: F) -> Self
    where
        F: Fn(&States, &StateEnum, Option<usize>) -> Option<T> + Send + Sync + 'static,
    {
        Resolver::Computed(Arc::new(compute))
    }

    /// Membership resolver over the given state names.
    pub fn membership<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Resolver::Membership(names.into_iter().map(Into::into).collect())
    }

    /// Lookup resolver from `(state name, value)` pairs.
    ///
    /// A repeated state name replaces the earlier value.
    pub fn lookup<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<T>,
    {
        Resolver::Lookup(
            entries
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }

    /// Short name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Resolver::Computed(_) => "computed",
            Resolver::Membership(_) => "membership",
            Resolver::Lookup(_) => "lookup",
        }
    }
}

impl Resolver<Value> {
    /// Computed resolver over JSON values.
    ///
    /// Unlike [`Resolver::computed`], a returned `None` leaves the flag
    /// absent instead of storing `null`.
    pub fn computed_value<F, R>(compute: F) -> Self
    where
        F: Fn(&States, &StateEnum, Option<usize>) -> R + Send + Sync + 'static,
        R: IntoFlagValue,
    {
        Resolver::Computed(Arc::new(
            move |states: &States, order: &StateEnum, index: Option<usize>| {
                compute(states, order, index).into_flag_value()
            },
        ))
    }
}

impl<T: Clone + From<bool>> Resolver<T> {
    /// Resolve against a snapshot.
    ///
    /// `active` must be the active state of `states`; the evaluator
    /// computes it once and shares it across every flag.
    pub fn resolve(
        &self,
        states: &States,
        order: &StateEnum,
        active: Option<ActiveState<'_>>,
    ) -> Option<T> {
        match self {
            Resolver::Computed(compute) => compute(states, order, active.map(|a| a.index)),
            Resolver::Membership(names) => {
                let member = active.is_some_and(|a| names.iter().any(|name| name == a.name));
                Some(T::from(member))
            }
            Resolver::Lookup(table) => active.and_then(|a| table.get(a.name).cloned()),
        }
    }
}

impl<T> Clone for Resolver<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        match self {
            Resolver::Computed(compute) => Resolver::Computed(Arc::clone(compute)),
            Resolver::Membership(names) => Resolver::Membership(names.clone()),
            Resolver::Lookup(table) => Resolver::Lookup(table.clone()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Resolver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolver::Computed(_) => f.write_str("Computed(<fn>)"),
            Resolver::Membership(names) => f.debug_tuple("Membership").field(names).finish(),
            Resolver::Lookup(table) => f.debug_tuple("Lookup").field(table).finish(),
        }
    }
}
