//! Nullish values: the absent markers a `Maybe` treats as "no value".
//!
//! Exactly three shapes count as nullish:
//!
//! - the no-value unit `()`
//! - `Option::None`
//! - JSON `null` (`serde_json::Value::Null`)
//!
//! Every other value is present, including falsy ones like `0`, `""` and `false`.
//! Wrappers look through to what they hold: `Some(Value::Null)`, `&Value::Null`
//! and `Box<Value::Null>` are all nullish.

use std::convert::Infallible;

use serde_json::Value;

/// A type whose values may be absent.
///
/// `Present` is the type left over once absence has been ruled out. For
/// `Option<T>` that is `T`; for plain values it is the value itself.
pub trait Nullish: Sized {
    type Present;

    fn is_nullish(&self) -> bool;

    /// Strip absence, yielding `None` when the value is nullish.
    fn into_present(self) -> Option<Self::Present>;
}

/// Check if a value is nullish.
#[must_use]
pub fn is_nullish<V: Nullish>(value: &V) -> bool {
    value.is_nullish()
}

impl Nullish for () {
    type Present = Infallible;

    fn is_nullish(&self) -> bool {
        true
    }

    fn into_present(self) -> Option<Infallible> {
        None
    }
}

impl<T: Nullish> Nullish for Option<T> {
    type Present = T::Present;

    fn is_nullish(&self) -> bool {
        self.as_ref().is_none_or(Nullish::is_nullish)
    }

    fn into_present(self) -> Option<T::Present> {
        self.and_then(Nullish::into_present)
    }
}

impl<'a, T: Nullish> Nullish for &'a T {
    type Present = &'a T;

    fn is_nullish(&self) -> bool {
        T::is_nullish(self)
    }

    fn into_present(self) -> Option<&'a T> {
        if self.is_nullish() { None } else { Some(self) }
    }
}

impl<T: Nullish> Nullish for Box<T> {
    type Present = Self;

    fn is_nullish(&self) -> bool {
        T::is_nullish(self)
    }

    fn into_present(self) -> Option<Self> {
        if self.is_nullish() { None } else { Some(self) }
    }
}

impl Nullish for Value {
    type Present = Value;

    fn is_nullish(&self) -> bool {
        self.is_null()
    }

    fn into_present(self) -> Option<Value> {
        if self.is_null() { None } else { Some(self) }
    }
}

impl<T> Nullish for Vec<T> {
    type Present = Self;

    fn is_nullish(&self) -> bool {
        false
    }

    fn into_present(self) -> Option<Self> {
        Some(self)
    }
}

macro_rules! never_nullish {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Nullish for $ty {
                type Present = Self;

                fn is_nullish(&self) -> bool {
                    false
                }

                fn into_present(self) -> Option<Self> {
                    Some(self)
                }
            }
        )*
    };
}

never_nullish!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
    &str,
);
