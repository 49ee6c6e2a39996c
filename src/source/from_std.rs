//! Bridge from standard-library iterators

use std::convert::Infallible;
use std::iter::Fuse;
use std::marker::PhantomData;

use crate::iter::Iter;

/// Infallible source backed by any `std::iter::Iterator`.
///
/// The wrapped iterator is fused, so exhaustion stays sticky even when
/// the std iterator would resume.
#[derive(Debug)]
pub struct FromStd<I, E = Infallible> {
    inner: Fuse<I>,
    _error: PhantomData<fn() -> E>,
}

impl<I: Iterator, E> FromStd<I, E> {
    /// Wrap `iter`.
    pub fn new(iter: I) -> Self {
        Self {
            inner: iter.fuse(),
            _error: PhantomData,
        }
    }
}

/// Wrap any `IntoIterator` as a pull source.
pub fn from_std<I, E>(iter: I) -> FromStd<I::IntoIter, E>
where
    I: IntoIterator,
{
    FromStd::new(iter.into_iter())
}

impl<I: Iterator, E> Iter for FromStd<I, E> {
    type Item = I::Item;
    type Error = E;

    fn next(&mut self) -> Result<Option<I::Item>, E> {
        Ok(self.inner.next())
    }
}
