//! Coercion of condition-like values into booleans.
//!
//! States are usually plain `bool`s, but callers often have a count, an
//! optional value or a loosely typed JSON field in hand. `Truthy` lets
//! those be passed directly without an explicit comparison at every call
//! site.

use serde_json::Value;

/// A value that can stand in for a boolean condition.
///
/// # Example
///
/// ```rust
/// use state_flags::Truthy;
///
/// assert!(true.is_truthy());
/// assert!(!0_u32.is_truthy());
/// assert!("uploading".is_truthy());
/// assert!(!Option::<bool>::None.is_truthy());
/// ```
pub trait Truthy {
    /// Whether this value counts as a true condition.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_int {
    ($($ty:ty),*) => {
        $(
            impl Truthy for $ty {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

/// JavaScript truthiness: `null`, `false`, zero and `""` are falsy,
/// every array and object is truthy.
impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}
