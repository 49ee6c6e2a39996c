//! Terminal consumers
//!
//! Each consumer drives an iterator until exhaustion or the first failure.
//! Exhaustion is the clean end of a drive. On failure:
//! - `to_vec` discards everything collected so far
//! - `fold` hands back the original seed, not the partial accumulator
//! - `for_each` stops; side effects already applied stay applied

use tracing::{debug, trace};

use crate::error::FoldError;
use crate::iter::Iter;

/// Collect every element into a `Vec`, in production order.
///
/// All-or-nothing: on failure the partial vector is dropped and the
/// error is returned unmodified. An empty iterator yields an empty `Vec`.
pub fn to_vec<I: Iter>(mut iter: I) -> Result<Vec<I::Item>, I::Error> {
    let mut out = Vec::new();
    loop {
        match iter.next() {
            Ok(Some(value)) => out.push(value),
            Ok(None) => {
                trace!(len = out.len(), "to_vec drained iterator");
                return Ok(out);
            }
            Err(err) => {
                debug!(discarded = out.len(), "to_vec aborted on failure");
                return Err(err);
            }
        }
    }
}

/// Invoke `f` on every element, in production order.
///
/// Returns the first failure; `f` is never called for the element whose
/// production failed.
pub fn for_each<I, F>(mut iter: I, mut f: F) -> Result<(), I::Error>
where
    I: Iter,
    F: FnMut(I::Item),
{
    let mut visited = 0usize;
    loop {
        match iter.next() {
            Ok(Some(value)) => {
                f(value);
                visited += 1;
            }
            Ok(None) => {
                trace!(visited, "for_each drained iterator");
                return Ok(());
            }
            Err(err) => {
                debug!(visited, "for_each aborted on failure");
                return Err(err);
            }
        }
    }
}

/// Left fold: `acc = combine(acc, value)` for each element, starting at `init`.
///
/// On failure the partial accumulator is discarded and the untouched
/// `init` comes back inside [`FoldError`] together with the error.
pub fn fold<I, A, F>(mut iter: I, init: A, mut combine: F) -> Result<A, FoldError<A, I::Error>>
where
    I: Iter,
    A: Clone,
    F: FnMut(A, I::Item) -> A,
{
    let mut acc = init.clone();
    let mut folded = 0usize;
    loop {
        match iter.next() {
            Ok(Some(value)) => {
                acc = combine(acc, value);
                folded += 1;
            }
            Ok(None) => {
                trace!(folded, "fold drained iterator");
                return Ok(acc);
            }
            Err(source) => {
                debug!(folded, "fold aborted on failure, returning seed");
                return Err(FoldError { init, source });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{from_slice, Slice};

    #[test]
    fn test_to_vec_copies_source() {
        let original = vec![1, 2, 3];
        let copy = to_vec(Slice::new(original.clone())).unwrap();
        assert_eq!(copy.len(), original.len());
        assert_eq!(copy, original);
    }

    #[test]
    fn test_to_vec_empty_is_empty_vec() {
        let copy = to_vec(Slice::new(Vec::<char>::new()));
        assert_eq!(copy, Ok(Vec::new()));
    }

    #[test]
    fn test_to_vec_failure_discards_partial() {
        let parsed = from_slice(vec!["1", "2", "x", "4"]).try_map(|s: &str| s.parse::<i64>());
        let result = to_vec(parsed);
        assert!(result.is_err());
    }

    #[test]
    fn test_for_each_visits_in_order() {
        let expected = vec![1, 2, 3];
        let mut actual = Vec::new();
        for_each(Slice::new(expected.clone()), |i| actual.push(i)).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_for_each_keeps_effects_before_failure() {
        let mut seen = Vec::new();
        let result = for_each(
            from_slice(vec!["1", "bad", "3"]).try_map(|s: &str| s.parse::<u32>()),
            |n| seen.push(n),
        );
        assert!(result.is_err());
        assert_eq!(seen, vec![1]);
    }

    #[test]
    fn test_fold_sums_from_seed() {
        let sum = fold(Slice::new(vec![1, 2, 3]), 36, |a, i| a + i);
        assert_eq!(sum, Ok(42));
    }

    #[test]
    fn test_fold_is_left_associative() {
        let joined = fold(Slice::new(vec!["b", "c"]), String::from("a"), |mut acc, s| {
            acc.push_str(s);
            acc
        });
        assert_eq!(joined.unwrap(), "abc");
    }

    #[test]
    fn test_fold_failure_returns_seed() {
        let err = fold(
            from_slice(vec!["5", "5", "nope", "5"]).try_map(|s: &str| s.parse::<i32>()),
            100,
            |a, i| a + i,
        )
        .unwrap_err();
        assert_eq!(err.init, 100);
    }
}
