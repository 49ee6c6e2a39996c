//! The pull contract every producer and combinator implements
//!
//! A call to `next` yields one of three outcomes:
//! - `Ok(Some(value))`: the next element; the cursor advances by one
//! - `Ok(None)`: exhaustion, sticky for every iterator in this crate
//! - `Err(error)`: producing this element failed; the next call tries again

use crate::adapters::{Filter, Fuse, IntoStd, Map, TryMap};
use crate::consume;
use crate::error::{FoldError, NextError};

/// Stateful, single-use, forward-only cursor over a sequence of values.
///
/// Combinator and consumer methods mirror the free functions in
/// [`crate::adapters`] and [`crate::consume`].
pub trait Iter {
    /// Element type produced by the iterator
    type Item;

    /// Error raised while producing an element
    type Error;

    /// Produce the next element, signal exhaustion, or fail.
    fn next(&mut self) -> Result<Option<Self::Item>, Self::Error>;

    /// Error-channel form of [`Iter::next`].
    ///
    /// Exhaustion arrives as [`NextError::Exhausted`], failures as
    /// [`NextError::Failed`] wrapping the original error.
    fn pull(&mut self) -> Result<Self::Item, NextError<Self::Error>> {
        match self.next() {
            Ok(Some(value)) => Ok(value),
            Ok(None) => Err(NextError::Exhausted),
            Err(err) => Err(NextError::Failed(err)),
        }
    }

    /// Apply a total function to every element.
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        Map::new(self, f)
    }

    /// Apply a fallible function to every element.
    ///
    /// A failing element is reported once; production resumes on the next call.
    fn try_map<B, F>(self, f: F) -> TryMap<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Result<B, Self::Error>,
    {
        TryMap::new(self, f)
    }

    /// Keep only the elements satisfying `pred`.
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, pred)
    }

    /// Stop pulling the inner iterator once it reports exhaustion.
    fn fuse(self) -> Fuse<Self>
    where
        Self: Sized,
    {
        Fuse::new(self)
    }

    /// Adapt to a standard iterator over `Result<Item, Error>`.
    fn into_std(self) -> IntoStd<Self>
    where
        Self: Sized,
    {
        IntoStd::new(self)
    }

    /// Collect every element into a `Vec`. See [`consume::to_vec`].
    fn to_vec(self) -> Result<Vec<Self::Item>, Self::Error>
    where
        Self: Sized,
    {
        consume::to_vec(self)
    }

    /// Run `f` on every element. See [`consume::for_each`].
    fn for_each<F>(self, f: F) -> Result<(), Self::Error>
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        consume::for_each(self, f)
    }

    /// Left fold from `init`. See [`consume::fold`].
    fn fold<A, F>(self, init: A, combine: F) -> Result<A, FoldError<A, Self::Error>>
    where
        Self: Sized,
        A: Clone,
        F: FnMut(A, Self::Item) -> A,
    {
        consume::fold(self, init, combine)
    }
}

impl<I: Iter + ?Sized> Iter for &mut I {
    type Item = I::Item;
    type Error = I::Error;

    fn next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        (**self).next()
    }
}

impl<I: Iter + ?Sized> Iter for Box<I> {
    type Item = I::Item;
    type Error = I::Error;

    fn next(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        (**self).next()
    }
}
