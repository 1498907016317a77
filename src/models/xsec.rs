//! Production cross sections, in fb, from fits to the NLO+NLL reference values.
//!
//! All strong-production fits share the form
//!
//! ```text
//! σ(m) = a · m^(-b · exp(c · m))
//! ```
//!
//! The squark-like channels switch coefficient sets at `m = 300` GeV. Electroweak
//! channels have no fit and evaluate to 1 so that luminosity plots degrade to
//! plain event counts (scaled by 1000).

use crate::domain::Process;
use crate::error::ScanError;

/// Coefficients of one power-law fit piece.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLawFit {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl PowerLawFit {
    pub fn eval(&self, mass: f64) -> f64 {
        self.a * mass.powf(-self.b * (self.c * mass).exp())
    }
}

const GLUINO_FIT: PowerLawFit = PowerLawFit {
    a: 4.563e17,
    b: 4.761,
    c: 5.848e-05,
};

const SQUARK_LOW_FIT: PowerLawFit = PowerLawFit {
    a: 319925471928717.38,
    b: 4.10396285974583,
    c: 0.0001317804474363,
};

const SQUARK_HIGH_FIT: PowerLawFit = PowerLawFit {
    a: 6953884830281245.0,
    b: 4.7171617288678069,
    c: 6.1752771466190749e-05,
};

/// Masses at or above this use `SQUARK_HIGH_FIT`.
pub const SQUARK_BREAKPOINT: f64 = 300.0;

/// Fit piece used for `process` at `mass`, or `None` for channels without a fit.
pub fn fit_for(mass: f64, process: Process) -> Option<PowerLawFit> {
    match process {
        Process::GlGl => Some(GLUINO_FIT),
        Process::StopStop | Process::SbotSbot | Process::SqSq => {
            if mass < SQUARK_BREAKPOINT {
                Some(SQUARK_LOW_FIT)
            } else {
                Some(SQUARK_HIGH_FIT)
            }
        }
        Process::C1N2 | Process::C1C1 | Process::N2N3 | Process::StauStau => None,
    }
}

/// Cross section in fb for `process` at `mass` (GeV).
///
/// The mass must be finite and strictly positive; the power law diverges at zero.
pub fn xsec(mass: f64, process: Process) -> Result<f64, ScanError> {
    if !mass.is_finite() || mass <= 0.0 {
        return Err(ScanError::MassOutOfRange {
            mass,
            process: process.name().to_string(),
        });
    }

    Ok(fit_for(mass, process).map_or(1.0, |fit| fit.eval(mass)))
}
