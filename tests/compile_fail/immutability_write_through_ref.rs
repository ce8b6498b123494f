//! Test that a payload cannot be written through a borrowing accessor.

fn main() {
    let report = safewrap::Result::<i32, String>::Ok(5);
    let payload = report.ok_ref().unwrap();
    *payload = 6;
}
