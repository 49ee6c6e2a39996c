//! # Pull-based lazy iterators
//!
//! A small iterator abstraction with an explicit three-way pull result,
//! composable combinators, and terminal consumers.
//!
//! ## Contract
//!
//! 1. **Pull**: `Iter::next` returns `Ok(Some(v))`, `Ok(None)` or `Err(e)`
//! 2. **Sticky exhaustion**: once `Ok(None)` is seen, it is seen forever
//! 3. **Non-sticky failure**: after `Err(e)` the next pull tries again
//! 4. **On demand**: combinators pull their inner iterator only when pulled
//!
//! ## Usage Example
//!
//! ```
//! use lazyseq::{from_slice, Iter};
//!
//! let mut parsed = from_slice(vec!["1", "two", "3"]).try_map(|s: &str| s.parse::<i32>());
//! assert_eq!(parsed.next(), Ok(Some(1)));
//! assert!(parsed.next().is_err());
//! assert_eq!(parsed.next(), Ok(Some(3)));
//! assert_eq!(parsed.next(), Ok(None));
//!
//! let sum = lazyseq::Slice::new(vec![1, 2, 3]).fold(36, |acc, x| acc + x);
//! assert_eq!(sum, Ok(42));
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod adapters; // Map, TryMap, Filter, Fuse, IntoStd
pub mod consume;  // to_vec, for_each, fold
pub mod error;    // NextError, FoldError
pub mod iter;     // The pull contract
pub mod maps;     // keys, values, entries
pub mod source;   // Slice, FromStd

// Re-exports for convenience
pub use adapters::{filter, map, try_map, Filter, Fuse, IntoStd, Map, TryMap};
pub use consume::{fold, for_each, to_vec};
pub use error::{FoldError, NextError};
pub use iter::Iter;
pub use maps::{entries, keys, values, Entry};
pub use source::{from_slice, from_std, FromStd, Slice};
