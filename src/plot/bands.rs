//! Severity bands: how a mass point's value is colored and printed.

use crate::domain::PlotType;
use crate::plot::canvas::PlotColor;

/// One band; a value belongs to the first band whose `upper` it does not exceed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityBand {
    pub upper: f64,
    pub color: PlotColor,
}

pub const BAND_COUNT: usize = 5;

pub static BANDS: [SeverityBand; BAND_COUNT] = [
    SeverityBand {
        upper: 50.0,
        color: PlotColor::Black,
    },
    SeverityBand {
        upper: 150.0,
        color: PlotColor::Green,
    },
    SeverityBand {
        upper: 400.0,
        color: PlotColor::Blue,
    },
    SeverityBand {
        upper: 999.0,
        color: PlotColor::Purple,
    },
    SeverityBand {
        upper: f64::INFINITY,
        color: PlotColor::Red,
    },
];

/// Values at or above this are printed in thousands.
pub const THOUSANDS_THRESHOLD: f64 = 1000.0;

/// Index into `BANDS` of the band holding `value`. NaN falls through to the last band.
pub fn band_index(value: f64) -> usize {
    BANDS
        .iter()
        .position(|band| value <= band.upper)
        .unwrap_or(BANDS.len() - 1)
}

/// Text printed at a mass point: an integer, or thousands with one decimal.
pub fn format_value(value: f64) -> String {
    if value >= THOUSANDS_THRESHOLD {
        format!("{:.1}", value / 1000.0)
    } else {
        format!("{value:.0}")
    }
}

/// Legend entries, one per band, in band order.
pub fn legend_labels(plot_type: PlotType) -> Vec<(String, PlotColor)> {
    let suffix = if plot_type.is_lumi() { " fb⁻¹" } else { "k" };

    let mut lower = 0.0;
    let mut out = Vec::with_capacity(BANDS.len());
    for band in &BANDS {
        let range = if band.upper.is_finite() {
            format!("{:.0}-{:.0}", lower + 1.0, band.upper)
        } else {
            format!("{:.0}+", lower + 1.0)
        };
        out.push((format!("{range}{suffix}"), band.color));
        lower = band.upper;
    }
    out
}
