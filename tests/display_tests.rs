//! Tests for string representations of the container types.
//!
//! Display renders the variant name around the payload's debug
//! representation; Debug matches the derive-style tuple form.

use rstest::rstest;
use safewrap::{Option, Result};

// =============================================================================
// Display
// =============================================================================

#[rstest]
fn ok_displays_the_payload() {
    let success: Result<i32, String> = Result::Ok(1);
    assert_eq!(success.to_string(), "Ok(1)");
}

#[rstest]
fn err_displays_the_payload() {
    let failure: Result<i32, String> = Result::Err("x".to_string());
    assert_eq!(failure.to_string(), "Err(\"x\")");
}

#[rstest]
fn some_displays_the_payload() {
    assert_eq!(Option::Some(1).to_string(), "Some(1)");
    assert_eq!(Option::Some("x").to_string(), "Some(\"x\")");
}

#[rstest]
fn nothing_displays_with_empty_parens() {
    assert_eq!(Option::<i32>::Nothing.to_string(), "Nothing()");
}

#[rstest]
fn nested_containers_display_through_debug() {
    let nested: Result<Option<i32>, String> = Result::Ok(Option::Some(1));
    assert_eq!(nested.to_string(), "Ok(Some(1))");
}

// =============================================================================
// Debug
// =============================================================================

#[rstest]
fn debug_uses_the_tuple_form() {
    let success: Result<i32, String> = Result::Ok(1);
    assert_eq!(format!("{success:?}"), "Ok(1)");

    let failure: Result<i32, String> = Result::Err("x".to_string());
    assert_eq!(format!("{failure:?}"), "Err(\"x\")");

    assert_eq!(format!("{:?}", Option::Some(1)), "Some(1)");
    assert_eq!(format!("{:?}", Option::<i32>::Nothing), "Nothing");
}
