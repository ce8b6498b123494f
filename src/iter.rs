//! Item iterators over the contents of [`Result`](crate::result::Result)
//! and [`Option`](crate::option::Option).
//!
//! A success or presence holder yields exactly one item; a failure or
//! absence holder yields none. The borrowing [`Iter`] is restartable:
//! every call to `iter()` on a container produces a fresh iterator over
//! the same contents.
//!
//! # Examples
//!
//! ```rust
//! use safewrap::Result;
//!
//! let value: Result<i32, String> = Result::Ok(42);
//! assert_eq!(value.iter().collect::<Vec<_>>(), vec![&42]);
//!
//! let error: Result<i32, String> = Result::Err("nope".to_string());
//! assert_eq!(error.iter().count(), 0);
//! ```

use std::iter::FusedIterator;

/// A borrowing iterator over the at-most-one contained item.
///
/// Created by the `iter` methods on the container types, or by the
/// `IntoIterator` implementations for container references.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    inner: std::option::IntoIter<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    /// A one-item iterator over `value`.
    pub(crate) fn one(value: &'a T) -> Self {
        Self {
            inner: Some(value).into_iter(),
        }
    }

    /// An empty iterator.
    pub(crate) fn empty() -> Self {
        Self {
            inner: None.into_iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// A consuming iterator over the at-most-one contained item.
///
/// Created by the `IntoIterator` implementations for the owned container
/// types.
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
    inner: std::option::IntoIter<T>,
}

impl<T> IntoIter<T> {
    /// A one-item iterator over `value`.
    pub(crate) fn one(value: T) -> Self {
        Self {
            inner: Some(value).into_iter(),
        }
    }

    /// An empty iterator.
    pub(crate) fn empty() -> Self {
        Self {
            inner: None.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_item_iterator_yields_once() {
        let mut iterator = Iter::one(&7);
        assert_eq!(iterator.len(), 1);
        assert_eq!(iterator.next(), Some(&7));
        assert_eq!(iterator.next(), None);
    }

    #[test]
    fn empty_iterator_yields_nothing() {
        let mut iterator: Iter<'_, i32> = Iter::empty();
        assert_eq!(iterator.len(), 0);
        assert_eq!(iterator.next(), None);
    }

    #[test]
    fn consuming_iterator_moves_the_value() {
        let mut iterator = IntoIter::one(String::from("owned"));
        assert_eq!(iterator.next(), Some(String::from("owned")));
        assert_eq!(iterator.next(), None);
    }
}
