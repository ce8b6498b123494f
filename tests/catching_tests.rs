//! Tests for panic-recovering constructors and function wrapping.
//!
//! `Result::of` is the one place a raised failure becomes data. The typed
//! variants must only swallow payloads of the requested type; anything
//! else resumes unwinding.

use std::panic::{catch_unwind, panic_any};

use rstest::rstest;
use safewrap::catching::{wrap, wrap_for};
use safewrap::{CaughtPanic, Result};

#[derive(Debug, PartialEq)]
struct Overflow(u32);

#[derive(Debug, PartialEq)]
struct BadInput(&'static str);

// =============================================================================
// Result::of
// =============================================================================

#[rstest]
fn of_wraps_a_completed_call_in_ok() {
    let result: Result<i32, CaughtPanic> = Result::of(|| 5);
    assert_eq!(result.unwrap(), 5);
}

#[rstest]
fn of_recovers_an_arithmetic_panic() {
    let result: Result<i32, CaughtPanic> = Result::of(|| {
        let denominator = std::hint::black_box(0);
        1 / denominator
    });
    assert_eq!(result.unwrap_err().message(), "attempt to divide by zero");
}

#[rstest]
fn of_recovers_a_formatted_panic_message() {
    let result: Result<i32, CaughtPanic> = Result::of(|| panic!("bad value: {}", 7));
    assert_eq!(result.unwrap_err().message(), "bad value: 7");
}

// =============================================================================
// Result::of_caught
// =============================================================================

#[rstest]
fn of_caught_recovers_a_matching_payload() {
    let result: Result<u32, Overflow> = Result::of_caught(|| panic_any(Overflow(7)));
    assert_eq!(result, Result::Err(Overflow(7)));
}

#[rstest]
fn of_caught_passes_a_completed_call_through() {
    let result: Result<u32, Overflow> = Result::of_caught(|| 3);
    assert_eq!(result, Result::Ok(3));
}

#[rstest]
fn of_caught_resumes_an_unmatched_payload() {
    let outcome = catch_unwind(|| {
        let _: Result<u32, Overflow> = Result::of_caught(|| panic_any(BadInput("boom")));
    });
    let payload = outcome.expect_err("the mismatched panic must propagate");
    assert_eq!(payload.downcast_ref::<BadInput>(), Some(&BadInput("boom")));
}

// =============================================================================
// Function Wrapping
// =============================================================================

#[rstest]
fn wrap_lifts_a_reusable_function() {
    let mut checked_div = wrap(|(a, b): (i32, i32)| a / b);
    assert_eq!(checked_div((6, 3)).unwrap(), 2);
    assert_eq!(checked_div((9, 3)).unwrap(), 3);
    assert!(checked_div((1, 0)).is_err());
    // Still usable after a recovered panic.
    assert_eq!(checked_div((8, 2)).unwrap(), 4);
}

#[rstest]
fn wrap_for_catches_only_the_requested_type() {
    let mut validate = wrap_for::<BadInput, _, _, _>(|name: &str| {
        if name.is_empty() {
            panic_any(BadInput("empty name"));
        }
        name.len()
    });
    assert_eq!(validate("ada"), Result::Ok(3));
    assert_eq!(validate(""), Result::Err(BadInput("empty name")));
}

#[rstest]
fn wrap_for_resumes_an_unmatched_payload() {
    let mut wrapped = wrap_for::<Overflow, _, _, _>(|_: ()| -> u32 { panic_any(BadInput("boom")) });
    let outcome = catch_unwind(std::panic::AssertUnwindSafe(move || {
        let _ = wrapped(());
    }));
    let payload = outcome.expect_err("the mismatched panic must propagate");
    assert_eq!(payload.downcast_ref::<BadInput>(), Some(&BadInput("boom")));
}

// =============================================================================
// CaughtPanic
// =============================================================================

#[rstest]
fn caught_panic_downcasts_to_the_payload_type() {
    let result: Result<(), CaughtPanic> = Result::of(|| panic_any(17_u8));
    let caught = result.unwrap_err();
    assert_eq!(caught.downcast::<u8>().unwrap(), 17);
}

#[rstest]
fn caught_panic_downcast_miss_keeps_the_payload() {
    let result: Result<(), CaughtPanic> = Result::of(|| panic_any(17_u8));
    let caught = result.unwrap_err();
    let missed = caught.downcast::<String>();
    assert!(missed.is_err());
    assert_eq!(missed.unwrap_err().downcast::<u8>().unwrap(), 17);
}

#[rstest]
fn caught_panic_exposes_string_messages() {
    let result: Result<(), CaughtPanic> = Result::of(|| panic!("boom"));
    let caught = result.unwrap_err();
    assert_eq!(caught.message(), "boom");
    assert_eq!(caught.to_string(), "caught panic: boom");
}

#[rstest]
fn caught_panic_hides_opaque_payloads() {
    let result: Result<(), CaughtPanic> = Result::of(|| panic_any(17_u8));
    assert_eq!(result.unwrap_err().message(), "Box<dyn Any>");
}
