use crate::iter::Iter;

/// Guarantees sticky exhaustion for any inner iterator.
///
/// The inner iterator is dropped the first time it reports exhaustion.
/// Errors pass through without fusing.
#[derive(Debug)]
pub struct Fuse<I> {
    inner: Option<I>,
}

impl<I> Fuse<I> {
    pub(crate) fn new(inner: I) -> Self {
        Self { inner: Some(inner) }
    }

    /// Whether the inner iterator has already reported exhaustion
    pub fn is_done(&self) -> bool {
        self.inner.is_none()
    }
}

impl<I: Iter> Iter for Fuse<I> {
    type Item = I::Item;
    type Error = I::Error;

    fn next(&mut self) -> Result<Option<I::Item>, I::Error> {
        let Some(inner) = self.inner.as_mut() else {
            return Ok(None);
        };
        let value = inner.next()?;
        if value.is_none() {
            self.inner = None;
        }
        Ok(value)
    }
}
