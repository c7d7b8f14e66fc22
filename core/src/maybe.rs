//! The `Maybe` sum type and its combinators.

use std::any::type_name;

use serde::{Deserialize, Deserializer, Serialize};

use maybe_types::Nullish;

use crate::error::MaybeError;
use crate::into_maybe::IntoMaybe;

/// Field holding the variant discriminant in the serialized form.
pub const KIND_TAG: &str = "_kind";
/// Field holding the payload of `Some` in the serialized form.
pub const VALUE_FIELD: &str = "value";

/// An optional value: either `None` or `Some` holding exactly one present value.
///
/// Every combinator consumes `self` and returns a new `Maybe`; a held value is
/// never mutated in place. `None` is zero-sized and carries no data, so one
/// `None` is as good as any other regardless of `T`.
///
/// # Invariants
///
/// - `Some` never holds an absent value. [`Maybe::try_some`] enforces this for
///   nullish payloads; building the variant directly leaves it to the caller.
///
/// # Serde
///
/// Adjacently tagged: `None` is `{"_kind":"None"}` and `Some(42)` is
/// `{"_kind":"Some","value":42}`. [`is_maybe`](crate::is_maybe) recognizes
/// this shape at untyped boundaries.
///
/// Deserializing a `Some` whose payload is nullish (`{"_kind":"Some","value":null}`
/// into a `Maybe<Value>`) yields `None`, the same answer
/// [`IntoMaybe`] gives for that JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "_kind", content = "value")]
pub enum Maybe<T> {
    None,
    Some(T),
}

/// Wire form of [`Maybe`] before the payload has been checked for absence.
#[derive(Deserialize)]
#[serde(tag = "_kind", content = "value")]
enum Tagged<T> {
    None,
    Some(T),
}

impl<'de, T> Deserialize<'de> for Maybe<T>
where
    T: Deserialize<'de> + Nullish,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Tagged::<T>::deserialize(deserializer)? {
            Tagged::Some(value) if !value.is_nullish() => Maybe::Some(value),
            Tagged::Some(_) | Tagged::None => Maybe::None,
        })
    }
}

/// Which variant a [`Maybe`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    None,
    Some,
}

impl Kind {
    /// The tag this variant is serialized under.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::None => "None",
            Kind::Some => "Some",
        }
    }

    /// Inverse of [`Kind::as_str`]. Tags are case-sensitive.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "None" => Some(Kind::None),
            "Some" => Some(Kind::Some),
            _ => None,
        }
    }
}

/// Two-arm handler record for [`Maybe::match_with`].
#[derive(Debug, Clone, Copy)]
pub struct Pattern<N, S> {
    pub none: N,
    pub some: S,
}

impl<T> Maybe<T> {
    /// Checked constructor for `Some`.
    ///
    /// Fails with [`MaybeError::AbsentValue`] when `value` is nullish instead
    /// of quietly producing `None`.
    pub fn try_some<V>(value: V) -> Result<Self, MaybeError>
    where
        V: Nullish<Present = T>,
    {
        value
            .into_present()
            .map(Maybe::Some)
            .ok_or_else(|| MaybeError::AbsentValue {
                type_name: type_name::<V>(),
            })
    }

    /// Which variant this is.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Maybe::None => Kind::None,
            Maybe::Some(_) => Kind::Some,
        }
    }

    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Maybe::None)
    }

    #[must_use]
    pub const fn is_some(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    /// Borrow the held value.
    #[must_use]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::None => Maybe::None,
            Maybe::Some(value) => Maybe::Some(value),
        }
    }

    /// Apply `f` to the held value. Never flattens.
    pub fn map<T2>(self, f: impl FnOnce(T) -> T2) -> Maybe<T2> {
        match self {
            Maybe::None => Maybe::None,
            Maybe::Some(value) => Maybe::Some(f(value)),
        }
    }

    /// Apply `f` and flatten its result one level.
    ///
    /// `f` may return a plain value, which gets wrapped in `Some`, or anything
    /// that is already a `Maybe` (see [`IntoMaybe`]), which is returned as is.
    pub fn then<R: IntoMaybe>(self, f: impl FnOnce(T) -> R) -> Maybe<R::Value> {
        match self {
            Maybe::None => Maybe::None,
            Maybe::Some(value) => f(value).into_maybe(),
        }
    }

    /// Monadic bind: `f` must return a `Maybe`, which is returned unchanged.
    pub fn chain<T2>(self, f: impl FnOnce(T) -> Maybe<T2>) -> Maybe<T2> {
        match self {
            Maybe::None => Maybe::None,
            Maybe::Some(value) => f(value),
        }
    }

    /// Fall back to `f()` when `None`. `f` is never called on `Some`.
    pub fn alt(self, f: impl FnOnce() -> Maybe<T>) -> Maybe<T> {
        match self {
            Maybe::None => f(),
            some @ Maybe::Some(_) => some,
        }
    }

    /// Exhaustive case analysis with named arms.
    ///
    /// Exactly one arm runs: `pattern.none` on `None`, `pattern.some` with the
    /// held value on `Some`. Same as [`Maybe::fold`] with the arms in a record.
    pub fn match_with<R, N, S>(self, pattern: Pattern<N, S>) -> R
    where
        N: FnOnce() -> R,
        S: FnOnce(T) -> R,
    {
        self.fold(pattern.none, pattern.some)
    }

    /// Collapse to a single value: `on_none()` or `on_some(value)`.
    pub fn fold<R>(self, on_none: impl FnOnce() -> R, on_some: impl FnOnce(T) -> R) -> R {
        match self {
            Maybe::None => on_none(),
            Maybe::Some(value) => on_some(value),
        }
    }

    /// The held value, or `on_none()` when `None`. `on_none` runs only then.
    pub fn get_or_else(self, on_none: impl FnOnce() -> T) -> T {
        match self {
            Maybe::None => on_none(),
            Maybe::Some(value) => value,
        }
    }

    /// The held value, or the eagerly built `placeholder` when `None`.
    pub fn get_or(self, placeholder: T) -> T {
        match self {
            Maybe::None => placeholder,
            Maybe::Some(value) => value,
        }
    }

    /// Run a side effect on the held value and pass the `Maybe` through.
    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        if let Maybe::Some(value) = &self {
            f(value);
        }
        self
    }

    /// The held value, or `Option::None` as the absent marker. Never panics.
    #[must_use]
    pub fn unwrap(self) -> Option<T> {
        self.into()
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            None => Maybe::None,
            Some(value) => Maybe::Some(value),
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::None => None,
            Maybe::Some(value) => Some(value),
        }
    }
}
