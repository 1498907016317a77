//! Page geometry shared by the file backends.
//!
//! Coordinates are in points (1/72 inch) with the origin at the top-left corner of
//! the page; the PDF backend flips the y-axis itself.

use crate::plot::canvas::Figure;

pub const POINTS_PER_INCH: f64 = 72.0;

const LEFT_MARGIN: f64 = 90.0;
const RIGHT_MARGIN: f64 = 30.0;
const TOP_MARGIN: f64 = 70.0;
const BOTTOM_MARGIN: f64 = 70.0;

/// Page size and the rectangle the data area occupies on it.
#[derive(Debug, Clone, PartialEq)]
pub struct PageFrame {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    x_limits: (f64, f64),
    y_limits: (f64, f64),
}

impl PageFrame {
    pub fn new(figure: &Figure) -> Self {
        let width = figure.width_in * POINTS_PER_INCH;
        let height = figure.height_in * POINTS_PER_INCH;
        Self {
            width,
            height,
            left: LEFT_MARGIN,
            right: width - RIGHT_MARGIN,
            top: TOP_MARGIN,
            bottom: height - BOTTOM_MARGIN,
            x_limits: figure.x_limits,
            y_limits: figure.y_limits,
        }
    }

    /// Page position of the data point `(x, y)`.
    pub fn map(&self, x: f64, y: f64) -> (f64, f64) {
        let u = fraction(x, self.x_limits);
        let v = fraction(y, self.y_limits);
        (
            self.left + u * (self.right - self.left),
            self.bottom - v * (self.bottom - self.top),
        )
    }

    /// Ticks that fall inside the visible x-range.
    pub fn visible_x_ticks(&self, ticks: &[f64]) -> Vec<f64> {
        visible(ticks, self.x_limits)
    }

    /// Ticks that fall inside the visible y-range.
    pub fn visible_y_ticks(&self, ticks: &[f64]) -> Vec<f64> {
        visible(ticks, self.y_limits)
    }
}

fn visible(ticks: &[f64], (lo, hi): (f64, f64)) -> Vec<f64> {
    ticks.iter().copied().filter(|t| *t >= lo && *t <= hi).collect()
}

fn fraction(value: f64, (lo, hi): (f64, f64)) -> f64 {
    if hi > lo { (value - lo) / (hi - lo) } else { 0.5 }
}

/// Tick label text.
pub fn tick_label(value: f64) -> String {
    format!("{value:.0}")
}
