//! `mc-grid` library crate.
//!
//! The binary (`mcgrid`) is a thin wrapper around this library so that:
//!
//! - the physics lookups and the renderer are testable without spawning processes
//! - rendering goes through the `plot::Canvas` port and can be checked in memory

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod models;
pub mod plot;
pub mod report;
