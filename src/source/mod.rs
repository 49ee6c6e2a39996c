//! Source producers
//!
//! Sources sit at the bottom of a pull chain. They own their elements,
//! never fail, and report sticky exhaustion once drained.

mod from_std;
mod slice;

pub use from_std::{from_std, FromStd};
pub use slice::{from_slice, Slice};
