//! Data extent and axis layout (limits, tick granularity, margins).

use crate::domain::Grid;

/// Tick spacing for wide axes.
pub const COARSE_STEP: f64 = 200.0;
/// Tick spacing for axes spanning less than `FINE_SPAN_LIMIT`.
pub const FINE_STEP: f64 = 100.0;
pub const FINE_SPAN_LIMIT: f64 = 1200.0;
pub const COARSE_MARGIN: f64 = 100.0;
pub const FINE_MARGIN: f64 = 50.0;

/// Ticks are anchored to multiples of this.
const ROUNDING: f64 = 100.0;

/// Bounding box of the scan points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Extent {
    /// Extent of all points in non-empty columns, or `None` when the grid has no points.
    pub fn of_grid(grid: &Grid) -> Option<Self> {
        let mut points = grid.points();
        let first = points.next()?;
        let init = Extent {
            x_min: first.x(),
            x_max: first.x(),
            y_min: first.y(),
            y_max: first.y(),
        };
        Some(points.fold(init, |e, p| Extent {
            x_min: e.x_min.min(p.x()),
            x_max: e.x_max.max(p.x()),
            y_min: e.y_min.min(p.y()),
            y_max: e.y_max.max(p.y()),
        }))
    }

    /// Grow the extent so it also covers the optional hint ranges.
    pub fn with_hints(self, x: Option<(f64, f64)>, y: Option<(f64, f64)>) -> Self {
        let mut out = self;
        if let Some((lo, hi)) = x {
            out.x_min = out.x_min.min(lo.min(hi));
            out.x_max = out.x_max.max(lo.max(hi));
        }
        if let Some((lo, hi)) = y {
            out.y_min = out.y_min.min(lo.min(hi));
            out.y_max = out.y_max.max(lo.max(hi));
        }
        out
    }
}

/// Layout of one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLayout {
    /// Data minimum (before margins).
    pub min: f64,
    /// Data maximum (before margins).
    pub max: f64,
    pub step: f64,
    pub margin: f64,
    pub ticks: Vec<f64>,
}

impl AxisLayout {
    /// Visible range: the data range widened by the margin on both sides.
    pub fn limits(&self) -> (f64, f64) {
        (self.min - self.margin, self.max + self.margin)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Tick spacing for a data span.
pub fn tick_step(span: f64) -> f64 {
    if span < FINE_SPAN_LIMIT {
        FINE_STEP
    } else {
        COARSE_STEP
    }
}

/// Lay out one axis covering `[min, max]`.
///
/// Ticks start at `min` rounded down to a multiple of 100 and stop before `max`
/// rounded up past the next multiple of 100.
pub fn axis_layout(min: f64, max: f64) -> AxisLayout {
    let step = tick_step(max - min);
    let margin = if step == FINE_STEP {
        FINE_MARGIN
    } else {
        COARSE_MARGIN
    };

    let tick_min = min - min.rem_euclid(ROUNDING);
    let tick_max = max + ROUNDING - max.rem_euclid(ROUNDING);
    let n = ((tick_max - tick_min) / step).ceil().max(0.0) as usize;
    let ticks = (0..n).map(|i| tick_min + i as f64 * step).collect();

    AxisLayout {
        min,
        max,
        step,
        margin,
        ticks,
    }
}
