//! Error types shared by iterators and consumers
//!
//! Exhaustion is not a failure. `Iter::next` encodes it as `Ok(None)`;
//! the error-channel form below folds it into `NextError::Exhausted` for
//! callers that prefer a single `Err` branch.

use thiserror::Error;

/// Outcome of `Iter::pull` when no value was produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NextError<E> {
    /// The iterator has no more elements. Sticky.
    #[error("invoking next on an exhausted iterator")]
    Exhausted,

    /// Producing the value failed. Not sticky.
    #[error(transparent)]
    Failed(E),
}

impl<E> NextError<E> {
    /// Whether this is the end-of-sequence signal.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, NextError::Exhausted)
    }

    /// Original failure, or `None` for exhaustion.
    pub fn into_failure(self) -> Option<E> {
        match self {
            NextError::Exhausted => None,
            NextError::Failed(err) => Some(err),
        }
    }
}

/// Failure returned by `fold`
///
/// Carries the untouched seed rather than the partial accumulator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("fold aborted: {source}")]
pub struct FoldError<A, E> {
    /// Seed value originally passed to `fold`
    pub init: A,
    /// Error that stopped the fold
    #[source]
    pub source: E,
}

impl<A, E> FoldError<A, E> {
    /// Split into `(init, source)`.
    pub fn into_parts(self) -> (A, E) {
        (self.init, self.source)
    }
}
