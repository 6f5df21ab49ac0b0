//! Macros for ergonomic states and flags construction.

/// Build [`States`](crate::States) from `name: condition` pairs.
///
/// Conditions may be any [`Truthy`](crate::Truthy) expression.
///
/// # Example
///
/// ```
/// use state_flags::states;
///
/// let recorded = true;
/// let upload_progress: Option<u8> = Some(40);
///
/// let states = states! {
///     isNotRecorded: !recorded,
///     isUploading: upload_progress,
///     isUploaded: false,
/// };
///
/// assert_eq!(states.active().unwrap().name, "isUploading");
/// ```
#[macro_export]
macro_rules! states {
    ($($name:ident : $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut states = $crate::States::new();
        $(states.insert(stringify!($name), $value);)*
        states
    }};
}

/// Build a [`FlagsSpec`](crate::FlagsSpec) of JSON values.
///
/// The resolver kind follows the shape of each entry:
/// - `flag => [a, b]` is a membership resolver,
/// - `flag => { a: value, b: value }` is a lookup resolver,
/// - `flag => expr` is a computed resolver; `expr` must be a closure
///   taking `(&States, &StateEnum, Option<usize>)` and returning an
///   [`IntoFlagValue`](crate::IntoFlagValue). Returning `None` leaves the
///   flag absent.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use state_flags::{evaluate, flags, states, StateEnum, States};
///
/// let flags = flags! {
///     isDisabled => [isNotRecorded, isUploading],
///     text => {
///         isNotRecorded: "Demo Disabled",
///         isUploading: "Demo Uploading...",
///         isUploaded: "Download Demo",
///     },
///     isPending => |_: &States, order: &StateEnum, index: Option<usize>| {
///         order.is_before(index, "isUploaded")
///     },
/// };
///
/// let states = states! {
///     isNotRecorded: false,
///     isUploading: true,
///     isUploaded: false,
/// };
///
/// let result = evaluate(&states, &flags);
/// assert_eq!(
///     result.to_json(),
///     json!({ "isDisabled": true, "text": "Demo Uploading...", "isPending": true })
/// );
/// ```
#[macro_export]
macro_rules! flags {
    (@push $spec:ident;) => {};

    (@push $spec:ident; $flag:ident => [$($state:ident),* $(,)?] $(, $($rest:tt)*)?) => {
        $spec.insert(
            stringify!($flag),
            $crate::Resolver::Membership(::std::vec![
                $(::std::string::String::from(stringify!($state))),*
            ]),
        );
        $crate::flags!(@push $spec; $($($rest)*)?);
    };

    (@push $spec:ident; $flag:ident => {$($state:ident : $value:expr),* $(,)?} $(, $($rest:tt)*)?) => {
        $spec.insert(
            stringify!($flag),
            $crate::Resolver::lookup::<::std::vec::Vec<(&str, $crate::Value)>, &str, $crate::Value>(
                ::std::vec![$((stringify!($state), $crate::Value::from($value))),*],
            ),
        );
        $crate::flags!(@push $spec; $($($rest)*)?);
    };

    (@push $spec:ident; $flag:ident => $compute:expr $(, $($rest:tt)*)?) => {
        $spec.insert(stringify!($flag), $crate::Resolver::computed_value($compute));
        $crate::flags!(@push $spec; $($($rest)*)?);
    };

    ($($body:tt)*) => {{
        #[allow(unused_mut)]
        let mut spec: $crate::FlagsSpec<$crate::Value> = $crate::FlagsSpec::new();
        $crate::flags!(@push spec; $($body)*);
        spec
    }};
}
