//! Predicate and refinement function shapes.

/// A yes/no test on a borrowed value.
pub trait Predicate<T: ?Sized>: Fn(&T) -> bool {}

impl<T: ?Sized, F: Fn(&T) -> bool> Predicate<T> for F {}

/// A test that narrows `T` to the more specific `U` when it holds.
///
/// The type-level counterpart of a type guard: instead of promising the
/// caller that a `T` "is" a `U`, the refinement hands back the `U`.
pub trait Refinement<T, U>: Fn(T) -> Option<U> {}

impl<T, U, F: Fn(T) -> Option<U>> Refinement<T, U> for F {}

/// Invert a predicate.
pub fn not<T: ?Sized>(predicate: impl Predicate<T>) -> impl Predicate<T> {
    move |value: &T| !predicate(value)
}
