//! Compile-fail tests for container immutability.
//!
//! These tests verify that a constructed container cannot be mutated in
//! place: there are no setters and no `&mut self` combinators, so every
//! mutation attempt must be rejected at compile time.
//!
//! Note: trybuild tests use #[test] as an exception because
//! trybuild's standard usage pattern requires it.

#[test]
fn immutability_compile_fail_tests() {
    let test_cases = trybuild::TestCases::new();
    test_cases.compile_fail("tests/compile_fail/immutability_*.rs");
}
