use std::fmt;

use tracing::trace;

use crate::iter::Iter;

/// Yields only the elements of the inner iterator that satisfy a predicate.
pub struct Filter<I, P> {
    inner: I,
    pred: P,
}

impl<I, P> Filter<I, P> {
    pub(crate) fn new(inner: I, pred: P) -> Self {
        Self { inner, pred }
    }

    /// Recover the inner iterator, dropping the predicate.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

/// Free-function form of [`Iter::filter`].
pub fn filter<I, P>(iter: I, pred: P) -> Filter<I, P>
where
    I: Iter,
    P: FnMut(&I::Item) -> bool,
{
    Filter::new(iter, pred)
}

impl<I, P> Iter for Filter<I, P>
where
    I: Iter,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;
    type Error = I::Error;

    /// Pulls until a match, exhaustion, or an error; may pull many times.
    fn next(&mut self) -> Result<Option<I::Item>, I::Error> {
        let mut rejected = 0usize;
        while let Some(value) = self.inner.next()? {
            if (self.pred)(&value) {
                return Ok(Some(value));
            }
            rejected += 1;
        }
        if rejected > 0 {
            trace!(rejected, "filter reached end of inner iterator");
        }
        Ok(None)
    }
}

impl<I: fmt::Debug, P> fmt::Debug for Filter<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").field("inner", &self.inner).finish()
    }
}
