//! Combinators that wrap one inner iterator and one user function
//!
//! Every combinator pulls its inner iterator only when it is pulled itself
//! and forwards exhaustion and errors unchanged.

mod filter;
mod fuse;
mod into_std;
mod map;
mod try_map;

pub use filter::{filter, Filter};
pub use fuse::Fuse;
pub use into_std::IntoStd;
pub use map::{map, Map};
pub use try_map::{try_map, TryMap};
