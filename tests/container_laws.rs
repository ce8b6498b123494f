//! Property-based laws for the container types.
//!
//! Checks the combinator identities and conversion round-trips over
//! arbitrary payloads rather than hand-picked cases.

use proptest::prelude::*;
use safewrap::{Option, Result};

fn triple(value: i32) -> i32 {
    value.wrapping_mul(3)
}

fn halve(value: i32) -> Option<i32> {
    Option::some_if(|v| v % 2 == 0, value).map(|v| v / 2)
}

proptest! {
    #[test]
    fn result_map_then_unwrap_applies_the_function(x in any::<i32>()) {
        let mapped: Result<i32, String> = Result::Ok(x).map(triple);
        prop_assert_eq!(mapped.unwrap(), triple(x));
    }

    #[test]
    fn result_map_leaves_err_untouched(error in any::<i32>()) {
        let failure: Result<i32, i32> = Result::Err(error);
        prop_assert_eq!(failure.map(triple), Result::Err(error));
    }

    #[test]
    fn option_and_then_equals_direct_application(x in any::<i32>()) {
        prop_assert_eq!(Option::Some(x).and_then(halve), halve(x));
    }

    #[test]
    fn option_result_round_trip_preserves_presence(x in any::<i32>()) {
        prop_assert_eq!(Option::Some(x).ok_or("missing").ok(), Option::Some(x));
    }

    #[test]
    fn std_result_round_trip_is_the_identity(x in any::<i32>(), use_err in any::<bool>()) {
        let original: Result<i32, i32> = if use_err { Result::Err(x) } else { Result::Ok(x) };
        let standard: std::result::Result<i32, i32> = original.into();
        let back: Result<i32, i32> = standard.into();
        prop_assert_eq!(back, original);
    }

    #[test]
    fn std_option_round_trip_is_the_identity(value in proptest::option::of(any::<i32>())) {
        let wrapped = Option::of(value);
        let back: std::option::Option<i32> = wrapped.into();
        prop_assert_eq!(back, value);
    }

    #[test]
    fn result_collect_preserves_order(values in proptest::collection::vec(any::<i32>(), 0..32)) {
        let collected: Result<Vec<i32>, String> =
            Result::collect(values.iter().copied().map(Result::Ok));
        prop_assert_eq!(collected, Result::Ok(values));
    }

    #[test]
    fn option_collect_preserves_order(values in proptest::collection::vec(any::<i32>(), 0..32)) {
        let collected = Option::collect(values.iter().copied().map(Option::Some));
        prop_assert_eq!(collected, Option::Some(values));
    }

    #[test]
    fn xor_is_present_iff_exactly_one_side_is(
        left in proptest::option::of(any::<i32>()),
        right in proptest::option::of(any::<i32>()),
    ) {
        let left = Option::of(left);
        let right = Option::of(right);
        let exactly_one = left.is_some() ^ right.is_some();
        prop_assert_eq!(left.xor(right).is_some(), exactly_one);
    }

    #[test]
    fn equality_is_reflexive_and_symmetric(value in proptest::option::of(any::<i32>())) {
        let first = Option::of(value);
        let second = Option::of(value);
        prop_assert_eq!(first, first);
        prop_assert_eq!(first, second);
        prop_assert_eq!(second, first);
    }

    #[test]
    fn predicate_gated_constructions_partition(x in any::<i32>()) {
        let even = |v: &i32| v % 2 == 0;
        let as_ok = Result::ok_if(even, x);
        let as_err = Result::err_if(even, x);
        prop_assert_eq!(as_ok.is_ok(), as_err.is_err());
        prop_assert_eq!(as_ok.unwrap_or(x), x);
    }
}
