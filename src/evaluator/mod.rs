//! Evaluation of a flags specification against a state snapshot.

use crate::core::{DriverResult, FlagsSpec, States};
use tracing::{debug, trace};

/// Resolve every flag in `flags` against `states`.
///
/// The active state is the first declared state whose condition holds.
/// It is selected once, then each flag is resolved in declaration order:
///
/// - membership flags are `true` iff the active state is listed,
/// - lookup flags take the value keyed by the active state, if any,
/// - computed flags receive `(states, state_enum, active_index)` and
///   their return value is stored as-is.
///
/// Having no active state is a normal outcome, not an error.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use state_flags::{evaluate, FlagsSpec, StateEnum, States};
///
/// let states = States::new()
///     .with("isNotRecorded", false)
///     .with("isUploading", true)
///     .with("isUploaded", false);
///
/// let flags: FlagsSpec = FlagsSpec::new()
///     .membership("isDisabled", ["isNotRecorded", "isUploading"])
///     .computed("showWarning", |_: &States, order: &StateEnum, index| {
///         order.is_before(index, "isUploaded")
///     });
///
/// let result = evaluate(&states, &flags);
/// assert_eq!(result.get("isDisabled"), Some(&json!(true)));
/// assert_eq!(result.get("showWarning"), Some(&json!(true)));
/// ```
pub fn evaluate<T>(states: &States, flags: &FlagsSpec<T>) -> DriverResult<T>
where
    T: Clone + From<bool>,
{
    let active = states.active();
    let order = states.state_enum();

    debug!(
        active = ?active.map(|a| a.name),
        states = states.len(),
        flags = flags.len(),
        "selected active state"
    );

    let mut result = DriverResult::with_capacity(flags.len());
    for (name, resolver) in flags.iter() {
        let value = resolver.resolve(states, &order, active);
        trace!(
            flag = name,
            kind = resolver.kind(),
            present = value.is_some(),
            "resolved flag"
        );
        result.push(name.to_string(), value);
    }
    result
}
