//! Lifting constructors: turn raw values and risky computations into a `Maybe`.

use std::any::{Any, type_name};
use std::panic::{AssertUnwindSafe, catch_unwind};

use maybe_types::{Falsy, Nullish, Predicate, Refinement};

use crate::maybe::Maybe;

/// `None` if `value` is nullish, `Some` otherwise.
///
/// Only the absent markers count: `from_nullish(0)` is `Some(0)`.
pub fn from_nullish<V: Nullish>(value: V) -> Maybe<V::Present> {
    value.into_present().into()
}

/// `None` if `value` is falsy, `Some` otherwise.
///
/// Stricter than [`from_nullish`]: zero, `NaN`, `false` and the empty string
/// all become `None`, even where they are meaningful data.
pub fn from_falsy<V: Falsy>(value: V) -> Maybe<V::Truthy> {
    value.into_truthy().into()
}

/// Build a lifting function that keeps values satisfying `predicate`.
pub fn from_predicate<T>(predicate: impl Predicate<T>) -> impl Fn(T) -> Maybe<T> {
    move |value: T| {
        if predicate(&value) {
            Maybe::Some(value)
        } else {
            Maybe::None
        }
    }
}

/// Build a lifting function that narrows `T` to `U` where `refinement` allows.
pub fn from_refinement<T, U>(refinement: impl Refinement<T, U>) -> impl Fn(T) -> Maybe<U> {
    move |value: T| refinement(value).into()
}

/// Run a fallible computation, keeping only its success.
///
/// An `Err` is discarded and becomes `None`. Only the error's type is logged,
/// at `debug` level; the error itself is unrecoverable.
pub fn try_catch<T, E>(f: impl FnOnce() -> Result<T, E>) -> Maybe<T> {
    match f() {
        Ok(value) => Maybe::Some(value),
        Err(_) => {
            tracing::debug!(error_type = type_name::<E>(), "Discarding failed computation");
            Maybe::None
        }
    }
}

/// Run a computation that may panic, keeping only its result.
///
/// A panic is caught and becomes `None`. The panic hook still runs, so the
/// panic message is printed as usual.
pub fn try_catch_unwind<T>(f: impl FnOnce() -> T) -> Maybe<T> {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Maybe::Some(value),
        Err(payload) => {
            tracing::debug!(
                panic = panic_message(payload.as_ref()),
                "Discarding panicked computation"
            );
            Maybe::None
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<non-string panic payload>")
}
