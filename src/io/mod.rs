//! Input/output helpers.
//!
//! - scan grid JSON read/write (`grid`)

pub mod grid;

pub use grid::*;
