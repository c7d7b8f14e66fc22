//! Absence vocabulary for `Maybe`.
//!
//! This crate defines what "no value" means: which values are nullish, which
//! are falsy, and the function shapes used to test and narrow values. It has
//! no IO and no dependency on the `Maybe` type itself.

mod falsy;
mod nullish;
mod predicate;

pub use falsy::{Falsy, is_falsy};
pub use nullish::{Nullish, is_nullish};
pub use predicate::{Predicate, Refinement, not};
