//! Test that reassigning a container binding without `mut` is rejected.

fn main() {
    let report = safewrap::Option::Some(5);
    report = report.map(|value| value + 1);
    assert!(report.is_some());
}
