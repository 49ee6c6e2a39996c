use std::iter::FusedIterator;

use crate::iter::Iter;

/// `std::iter::Iterator` view of a pull chain.
///
/// Yields `Ok` for values and `Err` for failures; `None` once exhausted.
/// Failures do not end the std iteration, so callers that want to stop at
/// the first error should use `collect::<Result<Vec<_>, _>>()`.
#[derive(Debug)]
pub struct IntoStd<I> {
    inner: I,
    done: bool,
}

impl<I> IntoStd<I> {
    pub(crate) fn new(inner: I) -> Self {
        Self { inner, done: false }
    }
}

impl<I: Iter> Iterator for IntoStd<I> {
    type Item = Result<I::Item, I::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.inner.next() {
            Ok(Some(value)) => Some(Ok(value)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => Some(Err(err)),
        }
    }
}

impl<I: Iter> FusedIterator for IntoStd<I> {}
