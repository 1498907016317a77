//! Physics inputs of the scan.
//!
//! Both are small, pure lookups keyed by `(mass, process)` so that renderers and
//! aggregators stay generic.

pub mod matching;
pub mod xsec;

pub use matching::*;
pub use xsec::*;
