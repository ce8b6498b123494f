//! # safewrap
//!
//! Algebraic container types that express fallibility and optionality as
//! values: a success/failure wrapper and a presence/absence wrapper, each
//! with a closed combinator surface.
//!
//! ## Overview
//!
//! - [`Result<T, E>`](result::Result): holds exactly one of a success value
//!   or a failure value (`Ok` / `Err`).
//! - [`Option<T>`](option::Option): holds exactly one of a present value or
//!   no value (`Some` / `Nothing`).
//! - Cross-family conversions: `ok_or`/`ok_or_else` turn an `Option` into a
//!   `Result`; `ok()`/`err()` project a `Result` back down to an `Option`.
//! - [`catching`]: the one deliberate boundary where a raised failure is
//!   recovered into data (`Result::of`, `wrap`, `wrap_for`).
//!
//! Callers construct a container at a value-producing boundary, chain
//! combinators that transform or branch on the contained state, and extract
//! a plain value only where a concrete decision or default is required.
//! Containers are immutable: every combinator either returns the container
//! unchanged or builds a new one, and the compiler rejects in-place
//! mutation of an immutable binding.
//!
//! ## Example
//!
//! ```rust
//! use safewrap::{Option, Result};
//!
//! fn lookup(key: &str) -> Option<i32> {
//!     Option::some_if(|_| key == "answer", 42)
//! }
//!
//! let value = lookup("answer")
//!     .map(|x| x + 1)
//!     .ok_or("missing key")
//!     .unwrap_or(0);
//! assert_eq!(value, 43);
//!
//! let fallback: Result<i32, &str> = lookup("question").ok_or("missing key");
//! assert_eq!(fallback, Result::Err("missing key"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the container types, their variants, and the function
/// wrappers. Importing the variants shadows the standard library's `Ok`,
/// `Err`, `Some`, and `None` within the importing scope, which is the
/// intended way to consume this crate in container-heavy code.
///
/// # Usage
///
/// ```rust
/// use safewrap::prelude::*;
///
/// let value: Result<i32, String> = Ok(2);
/// assert_eq!(value.map(|x| x * 2), Ok(4));
/// ```
pub mod prelude {
    pub use crate::catching::{CaughtPanic, wrap, wrap_for};
    pub use crate::option::Option;
    pub use crate::option::Option::{Nothing, Some};
    pub use crate::result::Result;
    pub use crate::result::Result::{Err, Ok};
}

pub mod catching;
pub mod iter;
pub mod option;
pub mod result;

pub use catching::CaughtPanic;
pub use option::Option;
pub use result::Result;
