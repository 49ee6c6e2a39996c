//! Producer over a fixed, ordered sequence

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

use crate::iter::Iter;

/// Yields the elements of an owned sequence in order, then exhausts.
///
/// The error type is a phantom: a `Slice` never fails, but it can sit
/// under fallible stages that share the chain's error type.
pub struct Slice<T, E = Infallible> {
    /// Remaining suffix; the consumed prefix has already been handed out
    remaining: std::vec::IntoIter<T>,
    _error: PhantomData<fn() -> E>,
}

impl<T> Slice<T, Infallible> {
    /// Source that can never fail.
    pub fn new(items: Vec<T>) -> Self {
        Self::with_error(items)
    }
}

impl<T, E> Slice<T, E> {
    /// Source whose error type is chosen by the surrounding chain.
    pub fn with_error(items: Vec<T>) -> Self {
        Self {
            remaining: items.into_iter(),
            _error: PhantomData,
        }
    }

    /// Number of elements not yet produced
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }
}

/// Build a [`Slice`] whose error type is left to inference.
///
/// Use this under [`Iter::try_map`]; for purely infallible chains,
/// [`Slice::new`] pins the error to `Infallible`.
pub fn from_slice<T, E>(items: impl Into<Vec<T>>) -> Slice<T, E> {
    Slice::with_error(items.into())
}

impl<T, E> Iter for Slice<T, E> {
    type Item = T;
    type Error = E;

    fn next(&mut self) -> Result<Option<T>, E> {
        Ok(self.remaining.next())
    }
}

impl<T, E> From<Vec<T>> for Slice<T, E> {
    fn from(items: Vec<T>) -> Self {
        Self::with_error(items)
    }
}

impl<T: Clone, E> From<&[T]> for Slice<T, E> {
    fn from(items: &[T]) -> Self {
        Self::with_error(items.to_vec())
    }
}

impl<T: fmt::Debug, E> fmt::Debug for Slice<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slice")
            .field("remaining", &self.remaining.as_slice())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yields_in_order_then_exhausts() {
        let items = vec![1, 2, 3];
        let mut iter = Slice::new(items.clone());
        for expected in items {
            assert_eq!(iter.next(), Ok(Some(expected)));
        }
        assert_eq!(iter.next(), Ok(None));
    }

    #[test]
    fn test_exhaustion_is_sticky() {
        let mut iter = Slice::new(Vec::<u8>::new());
        for _ in 0..5 {
            assert_eq!(iter.next(), Ok(None));
        }
    }

    #[test]
    fn test_borrowed_source_is_not_mutated() {
        let original = vec![String::from("a"), String::from("b")];
        let mut iter: Slice<String> = Slice::from(original.as_slice());
        assert_eq!(iter.next(), Ok(Some(String::from("a"))));
        assert_eq!(iter.remaining(), 1);
        assert_eq!(original, vec![String::from("a"), String::from("b")]);
    }

    #[test]
    fn test_error_type_follows_chain() {
        let mut iter = from_slice::<_, std::num::ParseIntError>(["1"]);
        assert_eq!(iter.next(), Ok(Some("1")));
        assert_eq!(iter.next(), Ok(None));
    }
}
