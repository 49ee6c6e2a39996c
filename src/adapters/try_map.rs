use std::fmt;

use crate::iter::Iter;

/// Applies a fallible function to each element of the inner iterator.
///
/// A failure is reported for the element that caused it and nothing more:
/// the next pull fetches a fresh element from the inner iterator.
pub struct TryMap<I, F> {
    inner: I,
    f: F,
}

impl<I, F> TryMap<I, F> {
    pub(crate) fn new(inner: I, f: F) -> Self {
        Self { inner, f }
    }

    /// Recover the inner iterator, dropping the function.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

/// Free-function form of [`Iter::try_map`].
pub fn try_map<I, B, F>(iter: I, f: F) -> TryMap<I, F>
where
    I: Iter,
    F: FnMut(I::Item) -> Result<B, I::Error>,
{
    TryMap::new(iter, f)
}

impl<I, B, F> Iter for TryMap<I, F>
where
    I: Iter,
    F: FnMut(I::Item) -> Result<B, I::Error>,
{
    type Item = B;
    type Error = I::Error;

    fn next(&mut self) -> Result<Option<B>, I::Error> {
        match self.inner.next()? {
            Some(value) => (self.f)(value).map(Some),
            None => Ok(None),
        }
    }
}

impl<I: fmt::Debug, F> fmt::Debug for TryMap<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryMap").field("inner", &self.inner).finish()
    }
}
