//! Recovering unwinds as failure values.
//!
//! This module is the one place the crate deliberately swallows a failure
//! and turns it into data. [`Result::of`](crate::result::Result::of) runs a
//! closure and captures any unwind as an [`Err`](crate::result::Result::Err)
//! carrying a [`CaughtPanic`]; [`Result::of_caught`](crate::result::Result::of_caught)
//! narrows the catch to a single payload type, resuming the unwind for
//! anything else. [`wrap`] and [`wrap_for`] lift whole functions into the
//! container world, so a plain `A -> T` becomes an `A -> Result<T, _>`.
//!
//! Everything else in the crate propagates failure by construction, never
//! by unwinding.
//!
//! # Examples
//!
//! ```rust
//! use safewrap::Result;
//!
//! let result: Result<i32, safewrap::CaughtPanic> = Result::of(|| {
//!     let denominator = std::hint::black_box(0);
//!     1 / denominator
//! });
//! assert!(result.is_err());
//! assert_eq!(result.unwrap_err().message(), "attempt to divide by zero");
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};

use crate::result::Result;

/// An unwind payload captured by [`Result::of`] or [`wrap`].
///
/// Wraps the boxed payload of a caught panic. The payload can be inspected
/// as a message for the common string cases, downcast back to a concrete
/// type, or resumed to continue unwinding.
pub struct CaughtPanic {
    payload: Box<dyn Any + Send + 'static>,
}

impl CaughtPanic {
    pub(crate) fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self { payload }
    }

    /// Returns the panic message, if the payload is a string.
    ///
    /// Payloads from `panic!("...")` are `&str` or `String`; anything else
    /// (from `panic_any`) renders as the opaque placeholder
    /// `"Box<dyn Any>"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Result;
    ///
    /// let result: Result<(), safewrap::CaughtPanic> = Result::of(|| panic!("boom"));
    /// assert_eq!(result.unwrap_err().message(), "boom");
    /// ```
    #[must_use]
    pub fn message(&self) -> &str {
        if let Some(text) = self.payload.downcast_ref::<&'static str>() {
            text
        } else if let Some(text) = self.payload.downcast_ref::<String>() {
            text
        } else {
            "Box<dyn Any>"
        }
    }

    /// Returns a reference to the raw payload.
    #[must_use]
    pub fn payload(&self) -> &(dyn Any + Send) {
        self.payload.as_ref()
    }

    /// Attempts to downcast the payload to a concrete type.
    ///
    /// Returns `Ok` with the typed payload, or `Err` with `self` intact if
    /// the payload is of a different type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::panic::panic_any;
    /// use safewrap::Result;
    ///
    /// let result: Result<(), safewrap::CaughtPanic> = Result::of(|| panic_any(17_u8));
    /// let caught = result.unwrap_err();
    /// assert_eq!(caught.downcast::<u8>().unwrap(), 17);
    /// ```
    pub fn downcast<X: Any>(self) -> Result<X, Self> {
        match self.payload.downcast::<X>() {
            Ok(payload) => Result::Ok(*payload),
            Err(payload) => Result::Err(Self { payload }),
        }
    }

    /// Resumes unwinding with the captured payload.
    pub fn resume(self) -> ! {
        resume_unwind(self.payload)
    }
}

impl fmt::Debug for CaughtPanic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("CaughtPanic")
            .field(&self.message())
            .finish()
    }
}

impl fmt::Display for CaughtPanic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "caught panic: {}", self.message())
    }
}

impl std::error::Error for CaughtPanic {}

// =============================================================================
// Catching Constructors
// =============================================================================

impl<T> Result<T, CaughtPanic> {
    /// Invokes `function`, capturing any unwind as an `Err`.
    ///
    /// A completed call wraps the return value in `Ok`; a panicking call is
    /// recovered into `Err(CaughtPanic)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::{CaughtPanic, Result};
    ///
    /// let fine: Result<i32, CaughtPanic> = Result::of(|| 5);
    /// assert_eq!(fine.unwrap(), 5);
    ///
    /// let broken: Result<i32, CaughtPanic> = Result::of(|| panic!("boom"));
    /// assert_eq!(broken.unwrap_err().message(), "boom");
    /// ```
    pub fn of<F>(function: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match catch_unwind(AssertUnwindSafe(function)) {
            Ok(value) => Self::Ok(value),
            Err(payload) => Self::Err(CaughtPanic::new(payload)),
        }
    }
}

impl<T, E: Any + Send> Result<T, E> {
    /// Invokes `function`, capturing only unwind payloads of type `E`.
    ///
    /// A payload of any other type resumes unwinding: the failure
    /// propagates uncaught, exactly as if the call had not been wrapped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::panic::panic_any;
    /// use safewrap::Result;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Overflow(u32);
    ///
    /// let caught: Result<u32, Overflow> = Result::of_caught(|| panic_any(Overflow(7)));
    /// assert_eq!(caught, Result::Err(Overflow(7)));
    /// ```
    pub fn of_caught<F>(function: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match catch_unwind(AssertUnwindSafe(function)) {
            Ok(value) => Self::Ok(value),
            Err(payload) => match payload.downcast::<E>() {
                Ok(error) => Self::Err(*error),
                Err(payload) => resume_unwind(payload),
            },
        }
    }
}

// =============================================================================
// Function Wrapping
// =============================================================================

/// Lifts a plain function into one returning a [`Result`].
///
/// The wrapped function forwards its argument unchanged; a completed call
/// yields `Ok`, a panicking call yields `Err(CaughtPanic)`. Higher arities
/// forward through a tuple argument.
///
/// # Examples
///
/// ```rust
/// use safewrap::catching::wrap;
///
/// let mut checked_div = wrap(|(a, b): (i32, i32)| a / b);
/// assert_eq!(checked_div((6, 3)).unwrap(), 2);
/// assert!(checked_div((1, 0)).is_err());
/// ```
pub fn wrap<A, T, F>(mut function: F) -> impl FnMut(A) -> Result<T, CaughtPanic>
where
    F: FnMut(A) -> T,
{
    move |argument| match catch_unwind(AssertUnwindSafe(|| function(argument))) {
        Ok(value) => Result::Ok(value),
        Err(payload) => Result::Err(CaughtPanic::new(payload)),
    }
}

/// Lifts a plain function into one returning a [`Result`], catching only
/// unwind payloads of type `E`.
///
/// Payloads of any other type resume unwinding.
///
/// # Examples
///
/// ```rust
/// use std::panic::panic_any;
/// use safewrap::catching::wrap_for;
/// use safewrap::Result;
///
/// #[derive(Debug, PartialEq)]
/// struct BadInput(&'static str);
///
/// let mut validate = wrap_for::<BadInput, _, _, _>(|name: &str| {
///     if name.is_empty() {
///         panic_any(BadInput("empty name"));
///     }
///     name.len()
/// });
/// assert_eq!(validate("ada"), Result::Ok(3));
/// assert_eq!(validate(""), Result::Err(BadInput("empty name")));
/// ```
pub fn wrap_for<E, A, T, F>(mut function: F) -> impl FnMut(A) -> Result<T, E>
where
    E: Any + Send,
    F: FnMut(A) -> T,
{
    move |argument| match catch_unwind(AssertUnwindSafe(|| function(argument))) {
        Ok(value) => Result::Ok(value),
        Err(payload) => match payload.downcast::<E>() {
            Ok(error) => Result::Err(*error),
            Err(payload) => resume_unwind(payload),
        },
    }
}

static_assertions::assert_impl_all!(CaughtPanic: Send);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn of_wraps_a_completed_call() {
        let result: Result<i32, CaughtPanic> = Result::of(|| 5);
        assert_eq!(result.ok(), crate::option::Option::Some(5));
    }

    #[test]
    fn of_recovers_a_panic() {
        let result: Result<i32, CaughtPanic> = Result::of(|| panic!("boom"));
        assert_eq!(result.unwrap_err().message(), "boom");
    }

    #[test]
    fn caught_panic_formats_its_message() {
        let result: Result<(), CaughtPanic> = Result::of(|| panic!("boom"));
        let caught = result.unwrap_err();
        assert_eq!(format!("{caught}"), "caught panic: boom");
        assert_eq!(format!("{caught:?}"), "CaughtPanic(\"boom\")");
    }
}
