//! Flattening for [`Maybe::then`](crate::Maybe::then).
//!
//! A `then` callback may hand back either a plain value or something that is
//! already optional. `IntoMaybe` is how `then` tells the two apart without a
//! runtime check: optional shapes convert variant for variant, plain values are
//! wrapped in `Some`.
//!
//! Primitives, strings, slices, `Vec`, `Box`, tuples and JSON are covered
//! here. Caller types opt in with [`impl_present!`](crate::impl_present).

use serde_json::Value;

use maybe_types::Nullish;

use crate::is_maybe::decode_kind;
use crate::maybe::{Kind, Maybe, VALUE_FIELD};

pub trait IntoMaybe {
    type Value;

    fn into_maybe(self) -> Maybe<Self::Value>;
}

impl<T> IntoMaybe for Maybe<T> {
    type Value = T;

    fn into_maybe(self) -> Maybe<T> {
        self
    }
}

/// Absence nested inside the `Option` counts too: `Some(Value::Null)` is `None`.
impl<T: Nullish> IntoMaybe for Option<T> {
    type Value = T::Present;

    fn into_maybe(self) -> Maybe<T::Present> {
        self.into_present().into()
    }
}

impl<'a, T: Nullish> IntoMaybe for &'a T {
    type Value = &'a T;

    fn into_maybe(self) -> Maybe<&'a T> {
        self.into_present().into()
    }
}

impl<T: Nullish> IntoMaybe for Box<T> {
    type Value = Self;

    fn into_maybe(self) -> Maybe<Self> {
        self.into_present().into()
    }
}

/// JSON in the serialized `Maybe` shape is decoded rather than wrapped. JSON
/// `null`, at the top level or as the payload of `Some`, is absent.
impl IntoMaybe for Value {
    type Value = Value;

    fn into_maybe(self) -> Maybe<Value> {
        match self {
            Value::Object(mut fields) => match decode_kind(&fields) {
                Some(Kind::None) => Maybe::None,
                Some(Kind::Some) => fields
                    .remove(VALUE_FIELD)
                    .and_then(Nullish::into_present)
                    .into(),
                None => Maybe::Some(Value::Object(fields)),
            },
            other => other.into_present().into(),
        }
    }
}

impl<T> IntoMaybe for Vec<T> {
    type Value = Self;

    fn into_maybe(self) -> Maybe<Self> {
        Maybe::Some(self)
    }
}

impl<T> IntoMaybe for &[T] {
    type Value = Self;

    fn into_maybe(self) -> Maybe<Self> {
        Maybe::Some(self)
    }
}

macro_rules! wrap_tuples {
    ($(($($name:ident),+)),* $(,)?) => {
        $(
            impl<$($name),+> IntoMaybe for ($($name,)+) {
                type Value = Self;

                fn into_maybe(self) -> Maybe<Self> {
                    Maybe::Some(self)
                }
            }
        )*
    };
}

wrap_tuples!((A, B), (A, B, C), (A, B, C, D));

/// Mark caller types as plain present values.
///
/// Implements [`Nullish`](crate::Nullish) and [`Falsy`](crate::Falsy) as
/// "never absent" and [`IntoMaybe`] as "wrap in `Some`", so the types work
/// with `from_nullish(Option<_>)`, `from_falsy` and as `then` results. Takes
/// concrete types only; generic types implement the three traits by hand.
///
/// ```
/// use maybe_core::{Maybe, from_nullish, impl_present};
///
/// #[derive(Debug, PartialEq)]
/// struct Organization {
///     language: &'static str,
/// }
///
/// struct User {
///     organization: Option<Organization>,
/// }
///
/// impl_present!(Organization);
///
/// let user = User {
///     organization: Some(Organization { language: "pt-BR" }),
/// };
/// let organization = Maybe::Some(user).then(|user| user.organization);
/// assert_eq!(organization, Maybe::Some(Organization { language: "pt-BR" }));
/// assert_eq!(from_nullish(None::<Organization>), Maybe::None);
/// ```
#[macro_export]
macro_rules! impl_present {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Nullish for $ty {
                type Present = Self;

                fn is_nullish(&self) -> bool {
                    false
                }

                fn into_present(self) -> ::core::option::Option<Self> {
                    ::core::option::Option::Some(self)
                }
            }

            impl $crate::Falsy for $ty {
                type Truthy = Self;

                fn is_falsy(&self) -> bool {
                    false
                }

                fn into_truthy(self) -> ::core::option::Option<Self> {
                    ::core::option::Option::Some(self)
                }
            }

            impl $crate::IntoMaybe for $ty {
                type Value = Self;

                fn into_maybe(self) -> $crate::Maybe<Self> {
                    $crate::Maybe::Some(self)
                }
            }
        )*
    };
}

macro_rules! wrap_in_some {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoMaybe for $ty {
                type Value = Self;

                fn into_maybe(self) -> Maybe<Self> {
                    Maybe::Some(self)
                }
            }
        )*
    };
}

wrap_in_some!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
    &str,
);
