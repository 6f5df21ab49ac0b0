//! Conversion of computed return values into JSON flag values.

use serde_json::{Map, Value};

/// A value a computed flag may return when the flag table holds JSON.
///
/// Plain values are always present. `Option<V>` maps `None` to an absent
/// entry rather than to `null`, so a computed flag can opt out of the
/// result without a separate constructor.
///
/// # Example
///
/// ```rust
/// use serde_json::{json, Value};
/// use state_flags::IntoFlagValue;
///
/// assert_eq!("ready".into_flag_value(), Some(json!("ready")));
/// assert_eq!(Some(3_u32).into_flag_value(), Some(json!(3)));
/// assert_eq!(None::<bool>.into_flag_value(), None);
/// assert_eq!(Value::Null.into_flag_value(), Some(Value::Null));
/// ```
pub trait IntoFlagValue {
    fn into_flag_value(self) -> Option<Value>;
}

macro_rules! impl_into_flag_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoFlagValue for $ty {
                fn into_flag_value(self) -> Option<Value> {
                    Some(Value::from(self))
                }
            }
        )*
    };
}

impl_into_flag_value!(
    bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, String,
    Map<String, Value>,
);

impl IntoFlagValue for Value {
    fn into_flag_value(self) -> Option<Value> {
        Some(self)
    }
}

impl IntoFlagValue for &str {
    fn into_flag_value(self) -> Option<Value> {
        Some(Value::from(self))
    }
}

impl<V: Into<Value>> IntoFlagValue for Vec<V> {
    fn into_flag_value(self) -> Option<Value> {
        Some(Value::from(self))
    }
}

impl<V: IntoFlagValue> IntoFlagValue for Option<V> {
    fn into_flag_value(self) -> Option<Value> {
        self.and_then(IntoFlagValue::into_flag_value)
    }
}
