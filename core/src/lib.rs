//! An optional-value type with combinators and lifting constructors.
//!
//! [`Maybe`] is either `None` or `Some` holding a present value. Values enter
//! a `Maybe` through the lifting constructors ([`from_nullish`],
//! [`from_falsy`], [`from_predicate`], [`from_refinement`], [`try_catch`],
//! [`try_catch_unwind`]) and leave it through [`Maybe::fold`],
//! [`Maybe::match_with`], [`Maybe::get_or_else`] or [`Maybe::unwrap`].
//!
//! ```
//! use maybe_core::from_nullish;
//!
//! let user_language: Option<&str> = None;
//! let org_language = Some("pt-BR");
//!
//! let language = from_nullish(user_language)
//!     .alt(|| from_nullish(org_language))
//!     .get_or_else(|| "en-US");
//! assert_eq!(language, "pt-BR");
//! ```

mod error;
mod into_maybe;
mod is_maybe;
mod lift;
mod maybe;

pub use error::MaybeError;
pub use into_maybe::IntoMaybe;
pub use is_maybe::is_maybe;
pub use lift::{
    from_falsy, from_nullish, from_predicate, from_refinement, try_catch, try_catch_unwind,
};
pub use maybe::{KIND_TAG, Kind, Maybe, Pattern, VALUE_FIELD};

pub use maybe_types::{Falsy, Nullish, Predicate, Refinement, is_falsy, is_nullish, not};
