//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - the closed sets of production channels (`Process`) and plot flavours (`PlotType`)
//! - scan data (`MassPoint`, `Grid`)
//! - lookup results (`MatchParams`) and run configuration (`PlotConfig`)

pub mod types;

pub use types::*;
