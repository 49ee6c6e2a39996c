//! Scripted iterators for integration tests

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use lazyseq::Iter;

/// Error raised by [`Scripted`] at the positions it was told to fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("scripted failure at position {0}")]
pub struct ScriptError(pub usize);

/// Replays a fixed list of outcomes, then exhausts.
///
/// Every call to `next` is counted in a shared cell so tests can check how
/// often a combinator pulled its inner iterator.
#[derive(Debug)]
pub struct Scripted<T> {
    outcomes: std::vec::IntoIter<Result<T, ScriptError>>,
    pulls: Rc<Cell<usize>>,
}

impl<T> Scripted<T> {
    pub fn new(outcomes: Vec<Result<T, ScriptError>>) -> (Self, Rc<Cell<usize>>) {
        let pulls = Rc::new(Cell::new(0));
        let iter = Self {
            outcomes: outcomes.into_iter(),
            pulls: Rc::clone(&pulls),
        };
        (iter, pulls)
    }

    /// Values in order with a failure at `fail_at`.
    pub fn failing_at(values: Vec<T>, fail_at: usize) -> (Self, Rc<Cell<usize>>) {
        let mut outcomes: Vec<_> = values.into_iter().map(Ok).collect();
        outcomes.insert(fail_at, Err(ScriptError(fail_at)));
        Self::new(outcomes)
    }
}

impl<T> Iter for Scripted<T> {
    type Item = T;
    type Error = ScriptError;

    fn next(&mut self) -> Result<Option<T>, ScriptError> {
        self.pulls.set(self.pulls.get() + 1);
        self.outcomes.next().transpose()
    }
}
