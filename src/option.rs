//! Option type - a container holding exactly one of a present value or no
//! value.
//!
//! This module provides the `Option<T>` type, which represents a value that
//! is either a `Some(T)` or `Nothing`. It is the bridge out of the ambient
//! nullable world: wrap a possibly-absent value once, then chain combinators
//! that branch on presence without ever inspecting it imperatively.
//!
//! The absent variant carries no payload, so every `Nothing` of a given `T`
//! is the same zero-sized state; no allocation, no identity. Equality is
//! structural.
//!
//! # Examples
//!
//! ```rust
//! use safewrap::Option;
//!
//! let present = Option::Some(2);
//! let absent: Option<i32> = Option::Nothing;
//!
//! assert_eq!(present.map(|x| x * 2), Option::Some(4));
//! assert_eq!(absent.map(|x| x * 2), Option::Nothing);
//!
//! // Bridging from the standard library's nullable type.
//! assert_eq!(Option::of(Some(3)), Option::Some(3));
//! assert_eq!(Option::of(None::<i32>), Option::Nothing);
//! ```

use std::fmt;

use crate::iter::{IntoIter, Iter};
use crate::result::Result;

/// A container holding exactly one of a present value or no value.
///
/// `Option<T>` is either `Some(T)` or `Nothing`. The tag and payload are
/// fixed at construction; every combinator either returns the container
/// unchanged or constructs a new one.
///
/// # Examples
///
/// ```rust
/// use safewrap::Option;
///
/// let present = Option::Some(5);
/// assert_eq!(present.filter(|x| *x > 3), Option::Some(5));
/// assert_eq!(present.filter(|x| *x > 7), Option::Nothing);
/// ```
#[must_use]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Option<T> {
    /// The present variant.
    Some(T),
    /// The absent variant.
    #[default]
    Nothing,
}

impl<T> Option<T> {
    // =========================================================================
    // Bridging Constructors
    // =========================================================================

    /// Constructs from the ambient nullable type.
    ///
    /// `None` becomes `Nothing`; anything else becomes `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Option;
    ///
    /// assert_eq!(Option::of(Some("here")), Option::Some("here"));
    /// assert_eq!(Option::of(None::<&str>), Option::Nothing);
    /// ```
    #[inline]
    pub fn of(value: std::option::Option<T>) -> Self {
        match value {
            std::option::Option::Some(value) => Self::Some(value),
            std::option::Option::None => Self::Nothing,
        }
    }

    /// Returns `Some(value)` if the predicate holds, otherwise `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Option;
    ///
    /// assert_eq!(Option::some_if(|x| *x > 0, 3), Option::Some(3));
    /// assert_eq!(Option::some_if(|x| *x > 0, -3), Option::Nothing);
    /// ```
    #[inline]
    pub fn some_if<P>(predicate: P, value: T) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&value) {
            Self::Some(value)
        } else {
            Self::Nothing
        }
    }

    /// Returns `Nothing` if the predicate holds, otherwise `Some(value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Option;
    ///
    /// assert_eq!(Option::nothing_if(|name: &&str| name.is_empty(), ""), Option::Nothing);
    /// assert_eq!(Option::nothing_if(|name: &&str| name.is_empty(), "ada"), Option::Some("ada"));
    /// ```
    #[inline]
    pub fn nothing_if<P>(predicate: P, value: T) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&value) {
            Self::Nothing
        } else {
            Self::Some(value)
        }
    }

    // =========================================================================
    // Variant Checking
    // =========================================================================

    /// Returns `true` if this is a `Some` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Option;
    ///
    /// assert!(Option::Some(1).is_some());
    /// assert!(!Option::<i32>::Nothing.is_some());
    /// ```
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Option;
    ///
    /// assert!(Option::<i32>::Nothing.is_nothing());
    /// assert!(!Option::Some(1).is_nothing());
    /// ```
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Boolean Combinators
    // =========================================================================

    /// Returns `other` if this is `Some`, otherwise `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Option;
    ///
    /// assert_eq!(Option::Some(1).and(Option::Some("two")), Option::Some("two"));
    /// assert_eq!(Option::<i32>::Nothing.and(Option::Some("two")), Option::Nothing);
    /// ```
    #[inline]
    pub fn and<U>(self, other: Option<U>) -> Option<U> {
        match self {
            Self::Some(_) => other,
            Self::Nothing => Option::Nothing,
        }
    }

    /// Returns the `Some` unchanged, or `other` if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Option;
    ///
    /// assert_eq!(Option::Some(1).or(Option::Some(2)), Option::Some(1));
    /// assert_eq!(Option::Nothing.or(Option::Some(2)), Option::Some(2));
    /// ```
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::Nothing => other,
        }
    }

    /// Returns `Some` if exactly one of `self` and `other` is `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Option;
    ///
    /// assert_eq!(Option::Some(2).xor(Option::Nothing), Option::Some(2));
    /// assert_eq!(Option::Nothing.xor(Option::Some(2)), Option::Some(2));
    /// assert_eq!(Option::Some(1).xor(Option::Some(2)), Option::Nothing);
    /// assert_eq!(Option::<i32>::Nothing.xor(Option::Nothing), Option::Nothing);
    /// ```
    #[inline]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(value), Self::Nothing) | (Self::Nothing, Self::Some(value)) => {
                Self::Some(value)
            }
            _ => Self::Nothing,
        }
    }

    /// Calls `function` with the `Some` value, or returns `Nothing`.
    ///
    /// The function is invoked at most once, and never for `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Option;
    ///
    /// fn first_char(text: &str) -> Option<char> {
    ///     Option::of(text.chars().next())
    /// }
    ///
    /// assert_eq!(Option::Some("hi").and_then(first_char), Option::Some('h'));
    /// assert_eq!(Option::Some("").and_then(first_char), Option::Nothing);
    /// assert_eq!(Option::<&str>::Nothing.and_then(first_char), Option::Nothing);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::Nothing => Option::Nothing,
        }
    }

    /// Returns the `Some` unchanged, or calls `function` to produce an
    /// alternative.
    ///
    /// The function is invoked at most once, and never for a `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Option;
    ///
    /// assert_eq!(Option::Some(1).or_else(|| Option::Some(2)), Option::Some(1));
    /// assert_eq!(Option::Nothing.or_else(|| Option::Some(2)), Option::Some(2));
    /// ```
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::Nothing => function(),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the `Some` value, leaving `Nothing` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Option;
    ///
    /// assert_eq!(Option::Some(21).map(|x| x * 2), Option::Some(42));
    /// assert_eq!(Option::<i32>::Nothing.map(|x| x * 2), Option::Nothing);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Option::Some(function(value)),
            Self::Nothing => Option::Nothing,
        }
    }

    /// Applies `function` to the `Some` value, or returns `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Option;
    ///
    /// assert_eq!(Option::Some("hello").map_or(0, |text| text.len()), 5);
    /// assert_eq!(Option::<&str>::Nothing.map_or(0, |text| text.len()), 0);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => function(value),
            Self::Nothing => default,
        }
    }

    /// Applies `function` to the `Some` value, or computes a default.
    ///
    /// Exactly one of the two functions is invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Option;
    ///
    /// assert_eq!(
    ///     Option::Some("hello").map_or_else(|| 0, |text| text.len()),
    ///     5,
    /// );
    /// assert_eq!(
    ///     Option::<&str>::Nothing.map_or_else(|| 99, |text| text.len()),
    ///     99,
    /// );
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => function(value),
            Self::Nothing => default(),
        }
    }

    /// Keeps the `Some` value only if the predicate holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Option;
    ///
    /// assert_eq!(Option::Some(4).filter(|x| x % 2 == 0), Option::Some(4));
    /// assert_eq!(Option::Some(3).filter(|x| x % 2 == 0), Option::Nothing);
    /// assert_eq!(Option::<i32>::Nothing.filter(|x| x % 2 == 0), Option::Nothing);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::Nothing,
        }
    }

    // =========================================================================
    // Conversion to Result
    // =========================================================================

    /// Converts into a [`Result<T, E>`], supplying the failure for `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::{Option, Result};
    ///
    /// assert_eq!(Option::Some(2).ok_or("missing"), Result::Ok(2));
    /// assert_eq!(Option::<i32>::Nothing.ok_or("missing"), Result::Err("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Some(value) => Result::Ok(value),
            Self::Nothing => Result::Err(error),
        }
    }

    /// Converts into a [`Result<T, E>`], computing the failure for `Nothing`.
    ///
    /// The function is invoked at most once, and never for a `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::{Option, Result};
    ///
    /// assert_eq!(
    ///     Option::<i32>::Nothing.ok_or_else(|| "missing".to_string()),
    ///     Result::Err("missing".to_string()),
    /// );
    /// ```
    #[inline]
    pub fn ok_or_else<E, F>(self, function: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Result::Ok(value),
            Self::Nothing => Result::Err(function()),
        }
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the present value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Option;
    ///
    /// let present = Option::Some(42);
    /// assert_eq!(present.some_ref(), Option::Some(&42));
    /// assert_eq!(Option::<i32>::Nothing.some_ref(), Option::Nothing);
    /// ```
    #[inline]
    pub const fn some_ref(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::Nothing => Option::Nothing,
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the `Some` value, consuming the option.
    ///
    /// # Panics
    ///
    /// Panics if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Option;
    ///
    /// assert_eq!(Option::Some(42).unwrap(), 42);
    /// ```
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::Nothing => panic!("called `Option::unwrap()` on a `Nothing` value"),
        }
    }

    /// Returns the `Some` value, or panics with the supplied message.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Option;
    ///
    /// assert_eq!(Option::Some(42).expect("value must be present"), 42);
    /// ```
    #[inline]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Some(value) => value,
            Self::Nothing => panic!("{message}"),
        }
    }

    /// Returns the `Some` value, or `default` if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Option;
    ///
    /// assert_eq!(Option::Some(5).unwrap_or(9), 5);
    /// assert_eq!(Option::Nothing.unwrap_or(9), 9);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the `Some` value, or computes one.
    ///
    /// The function is invoked at most once, and never for a `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Option;
    ///
    /// assert_eq!(Option::Nothing.unwrap_or_else(|| 9), 9);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::Nothing => function(),
        }
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Returns a borrowing iterator over the possibly contained value.
    ///
    /// The iterator yields one item for a `Some` and none for `Nothing`.
    /// Each call produces a fresh iterator over the same contents.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Option;
    ///
    /// let present = Option::Some(42);
    /// assert_eq!(present.iter().next(), Some(&42));
    /// assert_eq!(present.iter().next(), Some(&42));
    ///
    /// assert_eq!(Option::<i32>::Nothing.iter().next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        match self {
            Self::Some(value) => Iter::one(value),
            Self::Nothing => Iter::empty(),
        }
    }

    // =========================================================================
    // Folding Constructors
    // =========================================================================

    /// Collects an iterable of options into an option of a vector.
    ///
    /// All-or-nothing: the first `Nothing` encountered short-circuits the
    /// whole result to `Nothing` without consuming further elements;
    /// otherwise all contained values are returned in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Option;
    ///
    /// let all_present = vec![Option::Some(1), Option::Some(2)];
    /// assert_eq!(Option::collect(all_present), Option::Some(vec![1, 2]));
    ///
    /// let with_gap = vec![Option::Some(1), Option::Nothing];
    /// assert_eq!(Option::collect(with_gap), Option::Nothing);
    /// ```
    pub fn collect<I>(iterable: I) -> Option<Vec<T>>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let iterator = iterable.into_iter();
        let mut values = Vec::with_capacity(iterator.size_hint().0);
        for option in iterator {
            match option {
                Self::Some(value) => values.push(value),
                Self::Nothing => return Option::Nothing,
            }
        }
        Option::Some(values)
    }
}

// =============================================================================
// Debug and Display Implementations
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Option<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => formatter.debug_tuple("Some").field(value).finish(),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

impl<T: fmt::Debug> fmt::Display for Option<T> {
    /// Renders `Some(<debug repr>)` or `Nothing()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Option;
    ///
    /// assert_eq!(Option::Some(1).to_string(), "Some(1)");
    /// assert_eq!(Option::<i32>::Nothing.to_string(), "Nothing()");
    /// ```
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value:?})"),
            Self::Nothing => formatter.write_str("Nothing()"),
        }
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

impl<T> IntoIterator for Option<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        match self {
            Self::Some(value) => IntoIter::one(value),
            Self::Nothing => IntoIter::empty(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Option<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<std::option::Option<T>> for Option<T> {
    /// Converts from the standard library option.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Option;
    ///
    /// assert_eq!(Option::from(Some(3)), Option::Some(3));
    /// assert_eq!(Option::from(None::<i32>), Option::Nothing);
    /// ```
    #[inline]
    fn from(value: std::option::Option<T>) -> Self {
        Self::of(value)
    }
}

impl<T> From<Option<T>> for std::option::Option<T> {
    /// Converts into the standard library option.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safewrap::Option;
    ///
    /// let standard: std::option::Option<i32> = Option::Some(3).into();
    /// assert_eq!(standard, Some(3));
    /// ```
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Option::Some(value) => Self::Some(value),
            Option::Nothing => Self::None,
        }
    }
}

static_assertions::assert_impl_all!(Option<i32>: Send, Sync, Clone, Copy);
static_assertions::assert_impl_all!(Option<String>: Send, Sync, Clone);
