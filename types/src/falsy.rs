//! Falsy values: a wider filter than [`Nullish`](crate::Nullish).
//!
//! A value is falsy when it is nullish or is one of the zero-like literals:
//! `false`, integer zero, `0.0`, `-0.0`, `NaN`, or the empty string. Empty
//! collections are not falsy.

use std::convert::Infallible;

use serde_json::Value;

/// A type with falsy values.
///
/// `Truthy` is what remains once the falsy values are filtered out. Zero and
/// empty values are legitimate data in most domains, so filtering on
/// falsiness drops them too.
pub trait Falsy: Sized {
    type Truthy;

    fn is_falsy(&self) -> bool;

    fn into_truthy(self) -> Option<Self::Truthy>;
}

/// Check if a value is falsy.
#[must_use]
pub fn is_falsy<V: Falsy>(value: &V) -> bool {
    value.is_falsy()
}

impl Falsy for () {
    type Truthy = Infallible;

    fn is_falsy(&self) -> bool {
        true
    }

    fn into_truthy(self) -> Option<Infallible> {
        None
    }
}

impl<T: Falsy> Falsy for Option<T> {
    type Truthy = T::Truthy;

    fn is_falsy(&self) -> bool {
        self.as_ref().is_none_or(Falsy::is_falsy)
    }

    fn into_truthy(self) -> Option<T::Truthy> {
        self.and_then(Falsy::into_truthy)
    }
}

impl Falsy for bool {
    type Truthy = bool;

    fn is_falsy(&self) -> bool {
        !*self
    }

    fn into_truthy(self) -> Option<bool> {
        self.then_some(true)
    }
}

impl Falsy for String {
    type Truthy = String;

    fn is_falsy(&self) -> bool {
        self.is_empty()
    }

    fn into_truthy(self) -> Option<String> {
        if self.is_empty() { None } else { Some(self) }
    }
}

impl<'a> Falsy for &'a str {
    type Truthy = &'a str;

    fn is_falsy(&self) -> bool {
        self.is_empty()
    }

    fn into_truthy(self) -> Option<&'a str> {
        if self.is_empty() { None } else { Some(self) }
    }
}

impl Falsy for char {
    type Truthy = char;

    fn is_falsy(&self) -> bool {
        false
    }

    fn into_truthy(self) -> Option<char> {
        Some(self)
    }
}

impl<T> Falsy for Vec<T> {
    type Truthy = Self;

    fn is_falsy(&self) -> bool {
        false
    }

    fn into_truthy(self) -> Option<Self> {
        Some(self)
    }
}

impl Falsy for Value {
    type Truthy = Value;

    fn is_falsy(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64().is_some_and(|n| n == 0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(_) | Value::Object(_) => false,
        }
    }

    fn into_truthy(self) -> Option<Value> {
        if self.is_falsy() { None } else { Some(self) }
    }
}

macro_rules! zero_is_falsy {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Falsy for $ty {
                type Truthy = Self;

                fn is_falsy(&self) -> bool {
                    *self == 0
                }

                fn into_truthy(self) -> Option<Self> {
                    if self == 0 { None } else { Some(self) }
                }
            }
        )*
    };
}

zero_is_falsy!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_is_falsy {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Falsy for $ty {
                type Truthy = Self;

                // `-0.0 == 0.0` holds, so negative zero is covered here.
                fn is_falsy(&self) -> bool {
                    *self == 0.0 || self.is_nan()
                }

                fn into_truthy(self) -> Option<Self> {
                    if self.is_falsy() { None } else { Some(self) }
                }
            }
        )*
    };
}

float_is_falsy!(f32, f64);
