use std::fmt;

use crate::iter::Iter;

/// Applies a total function to each element of the inner iterator.
pub struct Map<I, F> {
    inner: I,
    f: F,
}

impl<I, F> Map<I, F> {
    pub(crate) fn new(inner: I, f: F) -> Self {
        Self { inner, f }
    }

    /// Recover the inner iterator, dropping the function.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

/// Free-function form of [`Iter::map`].
pub fn map<I, B, F>(iter: I, f: F) -> Map<I, F>
where
    I: Iter,
    F: FnMut(I::Item) -> B,
{
    Map::new(iter, f)
}

impl<I, B, F> Iter for Map<I, F>
where
    I: Iter,
    F: FnMut(I::Item) -> B,
{
    type Item = B;
    type Error = I::Error;

    fn next(&mut self) -> Result<Option<B>, I::Error> {
        Ok(self.inner.next()?.map(&mut self.f))
    }
}

impl<I: fmt::Debug, F> fmt::Debug for Map<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("inner", &self.inner).finish()
    }
}
