//! Per-process matching parameters (qcut, truth-matching efficiency).
//!
//! Each process owns an ordered table of half-open mass windows `[lo, hi)`. A lookup
//! returns the first window containing the mass; there is no interpolation.

use crate::domain::{MatchParams, Process};
use crate::error::ScanError;

/// One row of a matching table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassWindow {
    pub lo: f64,
    pub hi: f64,
    pub params: MatchParams,
}

impl MassWindow {
    pub fn contains(&self, mass: f64) -> bool {
        self.lo <= mass && mass < self.hi
    }
}

const fn window(lo: f64, hi: f64, qcut: f64, efficiency: f64) -> MassWindow {
    MassWindow {
        lo,
        hi,
        params: MatchParams { qcut, efficiency },
    }
}

const GLUINO_TABLE: &[MassWindow] = &[
    window(600.0, 800.0, 118.0, 0.235),
    window(800.0, 1000.0, 128.0, 0.235),
    window(1000.0, 1200.0, 140.0, 0.235),
    window(1200.0, 1400.0, 143.0, 0.245),
    window(1400.0, 1500.0, 147.0, 0.255),
    window(1500.0, 1800.0, 150.0, 0.267),
    window(1800.0, 2100.0, 156.0, 0.290),
    window(2100.0, 2301.0, 160.0, 0.315),
];

const STAU_TABLE: &[MassWindow] = &[
    window(100.0, 200.0, 72.0, 0.605),
    window(200.0, 300.0, 72.0, 0.528),
    window(300.0, 400.0, 72.0, 0.482),
    window(400.0, f64::INFINITY, 72.0, 0.455),
];

// Upper edge is 1801 so that 1800 GeV scan points stay inside the envelope.
const SQUARK_TABLE: &[MassWindow] = &[
    window(100.0, 200.0, 62.0, 0.498),
    window(200.0, 300.0, 62.0, 0.361),
    window(300.0, 400.0, 62.0, 0.302),
    window(400.0, 500.0, 64.0, 0.275),
    window(500.0, 600.0, 64.0, 0.254),
    window(600.0, 1300.0, 68.0, 0.237),
    window(1300.0, 1801.0, 70.0, 0.243),
];

/// Matching table of `process`.
///
/// Electroweak channels other than staus have no table and are reported as unknown,
/// the same way an unrecognised name is.
pub fn table_for(process: Process) -> Result<&'static [MassWindow], ScanError> {
    match process {
        Process::GlGl => Ok(GLUINO_TABLE),
        Process::StauStau => Ok(STAU_TABLE),
        Process::SqSq | Process::StopStop | Process::SbotSbot => Ok(SQUARK_TABLE),
        Process::C1N2 | Process::C1C1 | Process::N2N3 => {
            Err(ScanError::UnknownProcess(process.name().to_string()))
        }
    }
}

/// First window of `table` containing `mass`.
pub fn find_window(table: &[MassWindow], mass: f64) -> Option<&MassWindow> {
    table.iter().find(|w| w.contains(mass))
}

/// qcut and truth-matching efficiency for `process` at `mass`.
pub fn match_params(mass: f64, process: Process) -> Result<MatchParams, ScanError> {
    let table = table_for(process)?;
    find_window(table, mass)
        .map(|w| w.params)
        .ok_or_else(|| ScanError::MassOutOfRange {
            mass,
            process: process.name().to_string(),
        })
}
