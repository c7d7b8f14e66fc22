//! Functor and monad laws, flattening, and laziness of the combinators

use maybe_core::{Maybe, Pattern};

use crate::common::CallCounter;

fn double(v: i32) -> i32 {
    v * 2
}

fn describe(v: i32) -> String {
    format!("value={v}")
}

fn halve(v: i32) -> Maybe<i32> {
    if v % 2 == 0 {
        Maybe::Some(v / 2)
    } else {
        Maybe::None
    }
}

// ============================================================================
// Functor
// ============================================================================

#[test]
fn map_identity() {
    for x in [-3, 0, 7] {
        assert_eq!(Maybe::Some(x).map(|v| v), Maybe::Some(x));
    }
}

#[test]
fn map_composition() {
    for x in [-3, 0, 7] {
        assert_eq!(
            Maybe::Some(x).map(double).map(describe),
            Maybe::Some(x).map(|v| describe(double(v)))
        );
    }
}

#[test]
fn map_unwrap_applies_fn() {
    assert_eq!(Maybe::Some(21).map(double).unwrap(), Some(42));
}

#[test]
fn map_never_calls_fn_on_none() {
    let counter = CallCounter::new();
    let mapped = Maybe::<i32>::None.map(counter.wrap(double));
    assert_eq!(mapped, Maybe::None);
    assert_eq!(counter.count(), 0);
}

// ============================================================================
// Monad
// ============================================================================

#[test]
fn chain_left_identity() {
    for x in [4, 5] {
        assert_eq!(Maybe::Some(x).chain(halve), halve(x));
    }
}

#[test]
fn chain_right_identity() {
    assert_eq!(Maybe::Some(9).chain(Maybe::Some), Maybe::Some(9));
    assert_eq!(Maybe::<i32>::None.chain(Maybe::Some), Maybe::None);
}

#[test]
fn chain_associativity() {
    for x in [8, 6, 3] {
        assert_eq!(
            Maybe::Some(x).chain(halve).chain(halve),
            Maybe::Some(x).chain(|v| halve(v).chain(halve))
        );
    }
}

#[test]
fn chain_on_none_is_none() {
    let counter = CallCounter::new();
    assert_eq!(Maybe::<i32>::None.chain(counter.wrap(halve)), Maybe::None);
    assert_eq!(counter.count(), 0);
}

// ============================================================================
// then
// ============================================================================

#[test]
fn then_never_double_wraps() {
    let wrapped = Maybe::Some(20).then(|v| Maybe::Some(double(v)));
    let plain = Maybe::Some(20).then(double);
    assert_eq!(wrapped, plain);
    assert_eq!(wrapped.unwrap(), Some(40));
}

#[test]
fn then_accepts_option_results() {
    assert_eq!(Maybe::Some("42").then(|s| s.parse::<i32>().ok()), Maybe::Some(42));
    assert_eq!(Maybe::Some("x").then(|s| s.parse::<i32>().ok()), Maybe::None);
}

// ============================================================================
// alt / get_or_else / match
// ============================================================================

#[test]
fn alt_skips_fallback_on_some() {
    let counter = CallCounter::new();
    let fallback = counter.wrap(|()| Maybe::Some(0));

    assert_eq!(Maybe::Some(1).alt(|| fallback(())), Maybe::Some(1));
    assert_eq!(counter.count(), 0);

    assert_eq!(Maybe::<i32>::None.alt(|| fallback(())), Maybe::Some(0));
    assert_eq!(counter.count(), 1);
}

#[test]
fn alt_chains_fall_through_in_order() {
    let first = Maybe::<&str>::None
        .alt(|| Maybe::None)
        .alt(|| Maybe::Some("third"))
        .alt(|| Maybe::Some("fourth"));
    assert_eq!(first, Maybe::Some("third"));
}

#[test]
fn get_or_else_prefers_held_value() {
    assert_eq!(Maybe::Some("x").get_or_else(|| "y"), "x");
    assert_eq!(Maybe::<&str>::None.get_or_else(|| "y"), "y");
}

#[test]
fn match_with_and_fold_agree() {
    for maybe in [Maybe::Some(3), Maybe::None] {
        let matched = maybe.match_with(Pattern {
            none: || "none".to_string(),
            some: describe,
        });
        let folded = maybe.fold(|| "none".to_string(), describe);
        assert_eq!(matched, folded);
    }
}
