//! Result type - a container holding exactly one of a success or a failure.
//!
//! This module provides the `Result<T, E>` type, which represents a value
//! that is either an `Ok(T)` or an `Err(E)`. Unlike ambient error handling,
//! fallibility is expressed as a value: callers chain combinators that
//! transform or branch on the contained state, and extract a plain value
//! only at the point where a concrete decision or default is required.
//!
//! # Examples
//!
//! ```rust
//! use safewrap::Result;
//!
//! fn parse_port(raw: &str) -> Result<u16, String> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => Result::Ok(port),
//!         Err(error) => Result::Err(error.to_string()),
//!     }
//! }
//!
//! let port = parse_port("8080")
//!     .map(|port| port + 1)
//!     .unwrap_or(80);
//! assert_eq!(port, 8081);
//!
//! let fallback = parse_port("not-a-port").unwrap_or(80);
//! assert_eq!(fallback, 80);
//! ```

use std::fmt;

use crate::iter::{IntoIter, Iter};
use crate::option::Option;

/// A container holding exactly one of a success value or a failure value.
///
/// `Result<T, E>` is either `Ok(T)` or `Err(E)`. The tag and payload are
/// fixed at construction; every combinator either returns the container
/// unchanged or constructs a new one.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the failure value
///
/// # Examples
///
/// ```rust
/// use safewrap::Result;
///
/// let success: Result<i32, String> = Result::Ok(42);
/// let failure: Result<i32, String> = Result::Err("error".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Result::Ok(84));
/// assert_eq!(failure.map(|x| x * 2), Result::Err("error".to_string()));
/// ```
#[must_use]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Result<T, E> {
    /// The success variant.
    Ok(T),
    /// The failure variant.
    Err(E),
}

impl<T, E> Result<T, E> {
    // =========================================================================
    // Variant Checking
    // =========================================================================

    /// Returns `true` if this is an `Ok` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Result;
    ///
    /// let success: Result<i32, String> = Result::Ok(42);
    /// assert!(success.is_ok());
    ///
    /// let failure: Result<i32, String> = Result::Err("error".to_string());
    /// assert!(!failure.is_ok());
    /// ```
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an `Err` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Result;
    ///
    /// let failure: Result<i32, String> = Result::Err("error".to_string());
    /// assert!(failure.is_err());
    /// ```
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    // =========================================================================
    // Boolean Combinators
    // =========================================================================

    /// Returns `other` if this is `Ok`, otherwise returns the `Err` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Result;
    ///
    /// let first: Result<i32, &str> = Result::Ok(2);
    /// let second: Result<&str, &str> = Result::Ok("ok");
    /// assert_eq!(first.and(second), Result::Ok("ok"));
    ///
    /// let failure: Result<i32, &str> = Result::Err("early");
    /// let second: Result<&str, &str> = Result::Ok("ok");
    /// assert_eq!(failure.and(second), Result::Err("early"));
    /// ```
    #[inline]
    pub fn and<U>(self, other: Result<U, E>) -> Result<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Returns the `Ok` unchanged, or `other` if this is `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Result;
    ///
    /// let success: Result<i32, &str> = Result::Ok(2);
    /// let fallback: Result<i32, String> = Result::Ok(9);
    /// assert_eq!(success.or(fallback), Result::Ok(2));
    ///
    /// let failure: Result<i32, &str> = Result::Err("nope");
    /// let fallback: Result<i32, String> = Result::Ok(9);
    /// assert_eq!(failure.or(fallback), Result::Ok(9));
    /// ```
    #[inline]
    pub fn or<F>(self, other: Result<T, F>) -> Result<T, F> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(_) => other,
        }
    }

    /// Calls `function` with the `Ok` value, or returns the `Err` unchanged.
    ///
    /// This chains computations that can themselves fail. The function is
    /// invoked at most once, and never for an `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Result;
    ///
    /// fn reciprocal(x: f64) -> Result<f64, String> {
    ///     if x == 0.0 {
    ///         Result::Err("division by zero".to_string())
    ///     } else {
    ///         Result::Ok(1.0 / x)
    ///     }
    /// }
    ///
    /// let chained: Result<f64, String> = Result::Ok(4.0);
    /// assert_eq!(chained.and_then(reciprocal), Result::Ok(0.25));
    ///
    /// let chained: Result<f64, String> = Result::Ok(0.0);
    /// assert!(chained.and_then(reciprocal).is_err());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Returns the `Ok` unchanged, or calls `function` with the `Err` value.
    ///
    /// The function is invoked at most once, and never for an `Ok`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Result;
    ///
    /// let failure: Result<i32, i32> = Result::Err(3);
    /// let recovered: Result<i32, String> = failure.or_else(|error| Result::Ok(error * 10));
    /// assert_eq!(recovered, Result::Ok(30));
    /// ```
    #[inline]
    pub fn or_else<F, O>(self, function: O) -> Result<T, F>
    where
        O: FnOnce(E) -> Result<T, F>,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => function(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the `Ok` value, leaving an `Err` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Result;
    ///
    /// let success: Result<i32, String> = Result::Ok(21);
    /// assert_eq!(success.map(|x| x * 2), Result::Ok(42));
    ///
    /// let failure: Result<i32, String> = Result::Err("broken".to_string());
    /// assert_eq!(failure.map(|x| x * 2), Result::Err("broken".to_string()));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Result::Ok(function(value)),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Applies `function` to the `Err` value, leaving an `Ok` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Result;
    ///
    /// let failure: Result<i32, i32> = Result::Err(404);
    /// assert_eq!(
    ///     failure.map_err(|code| format!("status {code}")),
    ///     Result::Err("status 404".to_string()),
    /// );
    /// ```
    #[inline]
    pub fn map_err<F, O>(self, function: O) -> Result<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(function(error)),
        }
    }

    // =========================================================================
    // Conversion to Option
    // =========================================================================

    /// Converts into an [`Option<T>`], discarding the failure payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::{Option, Result};
    ///
    /// let success: Result<i32, String> = Result::Ok(2);
    /// assert_eq!(success.ok(), Option::Some(2));
    ///
    /// let failure: Result<i32, String> = Result::Err("nope".to_string());
    /// assert_eq!(failure.ok(), Option::Nothing);
    /// ```
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Option::Some(value),
            Self::Err(_) => Option::Nothing,
        }
    }

    /// Converts into an [`Option<E>`], discarding the success payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::{Option, Result};
    ///
    /// let failure: Result<i32, String> = Result::Err("nope".to_string());
    /// assert_eq!(failure.err(), Option::Some("nope".to_string()));
    ///
    /// let success: Result<i32, String> = Result::Ok(2);
    /// assert_eq!(success.err(), Option::Nothing);
    /// ```
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => Option::Nothing,
            Self::Err(error) => Option::Some(error),
        }
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the success value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::{Option, Result};
    ///
    /// let success: Result<i32, String> = Result::Ok(42);
    /// assert_eq!(success.ok_ref(), Option::Some(&42));
    /// ```
    #[inline]
    pub const fn ok_ref(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Option::Some(value),
            Self::Err(_) => Option::Nothing,
        }
    }

    /// Returns a reference to the failure value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::{Option, Result};
    ///
    /// let failure: Result<i32, i32> = Result::Err(3);
    /// assert_eq!(failure.err_ref(), Option::Some(&3));
    /// ```
    #[inline]
    pub const fn err_ref(&self) -> Option<&E> {
        match self {
            Self::Ok(_) => Option::Nothing,
            Self::Err(error) => Option::Some(error),
        }
    }

    // =========================================================================
    // Extraction with Defaults
    // =========================================================================

    /// Returns the `Ok` value, or `default` if this is an `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Result;
    ///
    /// let success: Result<i32, i32> = Result::Ok(5);
    /// assert_eq!(success.unwrap_or(9), 5);
    ///
    /// let failure: Result<i32, i32> = Result::Err(5);
    /// assert_eq!(failure.unwrap_or(9), 9);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the `Ok` value, or computes one from the `Err` value.
    ///
    /// The function is invoked at most once, and never for an `Ok`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Result;
    ///
    /// let failure: Result<usize, String> = Result::Err("four".to_string());
    /// assert_eq!(failure.unwrap_or_else(|error| error.len()), 4);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => function(error),
        }
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Returns a borrowing iterator over the possibly contained success value.
    ///
    /// The iterator yields one item for an `Ok` and none for an `Err`. Each
    /// call produces a fresh iterator over the same contents.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Result;
    ///
    /// let success: Result<i32, String> = Result::Ok(42);
    /// assert_eq!(success.iter().next(), Some(&42));
    /// assert_eq!(success.iter().next(), Some(&42));
    ///
    /// let failure: Result<i32, String> = Result::Err("nope".to_string());
    /// assert_eq!(failure.iter().next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        match self {
            Self::Ok(value) => Iter::one(value),
            Self::Err(_) => Iter::empty(),
        }
    }

    // =========================================================================
    // Folding Constructors
    // =========================================================================

    /// Collects an iterable of results into a result of a vector.
    ///
    /// Consumes the iterable eagerly, accumulating `Ok` values in order. On
    /// the first `Err` encountered, consumption stops immediately and that
    /// `Err` is returned carrying the original failure value; the remaining
    /// elements are never pulled from the iterator. An empty iterable yields
    /// `Ok` of an empty vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Result;
    ///
    /// let all_ok = vec![Result::Ok(1), Result::Ok(2), Result::Ok(3)];
    /// let collected: Result<Vec<i32>, String> = Result::collect(all_ok);
    /// assert_eq!(collected, Result::Ok(vec![1, 2, 3]));
    ///
    /// let mixed = vec![Result::Ok(1), Result::Err("x"), Result::Ok(3)];
    /// assert_eq!(Result::collect(mixed), Result::Err("x"));
    /// ```
    pub fn collect<I>(iterable: I) -> Result<Vec<T>, E>
    where
        I: IntoIterator<Item = Result<T, E>>,
    {
        let iterator = iterable.into_iter();
        let mut values = Vec::with_capacity(iterator.size_hint().0);
        for result in iterator {
            match result {
                Self::Ok(value) => values.push(value),
                Self::Err(error) => return Result::Err(error),
            }
        }
        Result::Ok(values)
    }
}

// =============================================================================
// Predicate-gated Constructors
// =============================================================================

impl<T> Result<T, T> {
    /// Returns `Ok(value)` if the predicate holds, otherwise `Err(value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Result;
    ///
    /// assert_eq!(Result::ok_if(|x| *x > 0, 3), Result::Ok(3));
    /// assert_eq!(Result::ok_if(|x| *x > 0, -3), Result::Err(-3));
    /// ```
    #[inline]
    pub fn ok_if<P>(predicate: P, value: T) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&value) {
            Self::Ok(value)
        } else {
            Self::Err(value)
        }
    }

    /// Returns `Err(value)` if the predicate holds, otherwise `Ok(value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Result;
    ///
    /// assert_eq!(Result::err_if(|x| *x > 0, 3), Result::Err(3));
    /// assert_eq!(Result::err_if(|x| *x > 0, -3), Result::Ok(-3));
    /// ```
    #[inline]
    pub fn err_if<P>(predicate: P, value: T) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&value) {
            Self::Err(value)
        } else {
            Self::Ok(value)
        }
    }
}

// =============================================================================
// Fatal Extraction
// =============================================================================

impl<T, E: fmt::Debug> Result<T, E> {
    /// Returns the `Ok` value, consuming the result.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Err`, with a message describing the failure
    /// value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Result;
    ///
    /// let success: Result<i32, String> = Result::Ok(42);
    /// assert_eq!(success.unwrap(), 42);
    /// ```
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => {
                panic!("called `Result::unwrap()` on an `Err` value: {error:?}")
            }
        }
    }

    /// Returns the `Ok` value, or panics with the supplied message.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Err`, with `message` followed by the failure
    /// value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Result;
    ///
    /// let success: Result<i32, String> = Result::Ok(42);
    /// assert_eq!(success.expect("port must parse"), 42);
    /// ```
    #[inline]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => panic!("{message}: {error:?}"),
        }
    }
}

impl<T: fmt::Debug, E> Result<T, E> {
    /// Returns the `Err` value, consuming the result.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Ok`, with a message describing the success
    /// value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Result;
    ///
    /// let failure: Result<i32, String> = Result::Err("nope".to_string());
    /// assert_eq!(failure.unwrap_err(), "nope".to_string());
    /// ```
    #[inline]
    pub fn unwrap_err(self) -> E {
        match self {
            Self::Ok(value) => {
                panic!("called `Result::unwrap_err()` on an `Ok` value: {value:?}")
            }
            Self::Err(error) => error,
        }
    }

    /// Returns the `Err` value, or panics with the supplied message.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Ok`, with `message` followed by the success
    /// value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Result;
    ///
    /// let failure: Result<i32, String> = Result::Err("nope".to_string());
    /// assert_eq!(failure.expect_err("wanted the failure"), "nope".to_string());
    /// ```
    #[inline]
    pub fn expect_err(self, message: &str) -> E {
        match self {
            Self::Ok(value) => panic!("{message}: {value:?}"),
            Self::Err(error) => error,
        }
    }
}

// =============================================================================
// Debug and Display Implementations
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Result<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => formatter.debug_tuple("Ok").field(value).finish(),
            Self::Err(error) => formatter.debug_tuple("Err").field(error).finish(),
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Display for Result<T, E> {
    /// Renders `Ok(<debug repr>)` or `Err(<debug repr>)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Result;
    ///
    /// let success: Result<i32, String> = Result::Ok(1);
    /// assert_eq!(success.to_string(), "Ok(1)");
    ///
    /// let failure: Result<i32, String> = Result::Err("x".to_string());
    /// assert_eq!(failure.to_string(), "Err(\"x\")");
    /// ```
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(formatter, "Ok({value:?})"),
            Self::Err(error) => write!(formatter, "Err({error:?})"),
        }
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

impl<T, E> IntoIterator for Result<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        match self {
            Self::Ok(value) => IntoIter::one(value),
            Self::Err(_) => IntoIter::empty(),
        }
    }
}

impl<'a, T, E> IntoIterator for &'a Result<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    /// Converts from the standard library result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Result;
    ///
    /// let standard: std::result::Result<i32, String> = Ok(42);
    /// assert_eq!(Result::from(standard), Result::Ok(42));
    /// ```
    #[inline]
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            std::result::Result::Ok(value) => Self::Ok(value),
            std::result::Result::Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for std::result::Result<T, E> {
    /// Converts into the standard library result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Result;
    ///
    /// let wrapped: Result<i32, String> = Result::Err("nope".to_string());
    /// let standard: std::result::Result<i32, String> = wrapped.into();
    /// assert_eq!(standard, Err("nope".to_string()));
    /// ```
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Result::Ok(value) => Self::Ok(value),
            Result::Err(error) => Self::Err(error),
        }
    }
}

static_assertions::assert_impl_all!(Result<i32, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Result<i32, i32>: Copy);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn ok_construction() {
        let value: Result<i32, String> = Result::Ok(42);
        assert!(value.is_ok());
        assert!(!value.is_err());
    }

    #[rstest]
    fn err_construction() {
        let value: Result<i32, String> = Result::Err("nope".to_string());
        assert!(value.is_err());
        assert!(!value.is_ok());
    }

    #[rstest]
    fn std_conversion_roundtrip() {
        let standard: std::result::Result<i32, String> = Ok(42);
        let wrapped: Result<i32, String> = standard.into();
        let back: std::result::Result<i32, String> = wrapped.into();
        assert_eq!(back, Ok(42));
    }

    #[rstest]
    fn collect_stops_at_first_err() {
        let mixed = vec![Result::Ok(1), Result::Err("x"), Result::Ok(3)];
        assert_eq!(Result::collect(mixed), Result::Err("x"));
    }
}
