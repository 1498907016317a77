//! Shared domain types.
//!
//! These are deliberately small value types: the data loader builds them once and the
//! physics lookups and the renderer only ever read them.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::ScanError;

/// Named production channel of the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Process {
    GlGl,
    StopStop,
    SbotSbot,
    SqSq,
    C1N2,
    C1C1,
    N2N3,
    StauStau,
}

impl Process {
    pub const ALL: [Process; 8] = [
        Process::GlGl,
        Process::StopStop,
        Process::SbotSbot,
        Process::SqSq,
        Process::C1N2,
        Process::C1C1,
        Process::N2N3,
        Process::StauStau,
    ];

    /// Canonical name, as used on the command line and in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Process::GlGl => "GlGl",
            Process::StopStop => "StopStop",
            Process::SbotSbot => "SbotSbot",
            Process::SqSq => "SqSq",
            Process::C1N2 => "C1N2",
            Process::C1C1 => "C1C1",
            Process::N2N3 => "N2N3",
            Process::StauStau => "StauStau",
        }
    }

    /// Axis label for the produced particle mass.
    pub fn mass_label(self) -> &'static str {
        match self {
            Process::GlGl => "m(g\u{303}) [GeV]",
            Process::StopStop => "m(t\u{303}) [GeV]",
            Process::SbotSbot => "m(b\u{303}) [GeV]",
            Process::SqSq => "m(q\u{303}) [GeV]",
            Process::C1N2 | Process::C1C1 => "m(χ±₁) [GeV]",
            Process::N2N3 => "m(χ⁰₂) [GeV]",
            Process::StauStau => "m(τ\u{303}) [GeV]",
        }
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Process {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Process::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| ScanError::UnknownProcess(s.to_string()))
    }
}

impl TryFrom<String> for Process {
    type Error = ScanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Process> for String {
    fn from(value: Process) -> Self {
        value.name().to_string()
    }
}

/// Value shown at each mass point of the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlotType {
    /// Raw event count.
    Events,
    /// Equivalent luminosity in fb⁻¹.
    Lumi,
    /// Luminosity divided by 8.
    Lumix8,
    /// Luminosity times 5.
    LumiBr5,
    /// Luminosity times 4.
    LumiBr4,
    /// Luminosity divided by the 0.446 branching fraction.
    LumiBr2,
}

impl PlotType {
    pub const ALL: [PlotType; 6] = [
        PlotType::Events,
        PlotType::Lumi,
        PlotType::Lumix8,
        PlotType::LumiBr5,
        PlotType::LumiBr4,
        PlotType::LumiBr2,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PlotType::Events => "events",
            PlotType::Lumi => "lumi",
            PlotType::Lumix8 => "lumix8",
            PlotType::LumiBr5 => "lumi_br5",
            PlotType::LumiBr4 => "lumi_br4",
            PlotType::LumiBr2 => "lumi_br2",
        }
    }

    /// `true` for every luminosity flavour.
    pub fn is_lumi(self) -> bool {
        self != PlotType::Events
    }

    /// Rescale a plain luminosity (fb⁻¹) into this plot's flavour.
    pub fn scale_lumi(self, lumi: f64) -> f64 {
        match self {
            PlotType::Events | PlotType::Lumi => lumi,
            PlotType::Lumix8 => lumi / 8.0,
            PlotType::LumiBr5 => lumi * 5.0,
            PlotType::LumiBr4 => lumi * 4.0,
            PlotType::LumiBr2 => lumi / 0.446,
        }
    }
}

impl fmt::Display for PlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlotType {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlotType::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| ScanError::UnknownPlotType(s.to_string()))
    }
}

/// One sample of the scan: `(x-mass, y-mass, event count)`.
///
/// Serialized as a 3-element array, matching how scan grids are usually written out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 3]", into = "[f64; 3]")]
pub struct MassPoint {
    x: f64,
    y: f64,
    events: f64,
}

impl MassPoint {
    /// Build a point; all three components must be finite and non-negative.
    pub fn new(x: f64, y: f64, events: f64) -> Result<Self, ScanError> {
        for (name, value) in [("x-mass", x), ("y-mass", y), ("event count", events)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ScanError::InvalidMassPoint(format!(
                    "{name} must be finite and >= 0, got {value}"
                )));
            }
        }
        Ok(Self { x, y, events })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn events(&self) -> f64 {
        self.events
    }
}

impl TryFrom<[f64; 3]> for MassPoint {
    type Error = ScanError;

    fn try_from([x, y, events]: [f64; 3]) -> Result<Self, Self::Error> {
        MassPoint::new(x, y, events)
    }
}

impl From<MassPoint> for [f64; 3] {
    fn from(p: MassPoint) -> Self {
        [p.x, p.y, p.events]
    }
}

/// Scan grid: columns of points, each column sharing one x-mass.
///
/// Column order only matters for drawing; aggregations ignore it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    columns: Vec<Vec<MassPoint>>,
}

impl Grid {
    pub fn new(columns: Vec<Vec<MassPoint>>) -> Self {
        Self { columns }
    }

    /// Group a flat point list into columns by x-mass, in first-seen order.
    pub fn from_points(points: impl IntoIterator<Item = MassPoint>) -> Self {
        let mut columns: Vec<Vec<MassPoint>> = Vec::new();
        for point in points {
            match columns.iter_mut().find(|col| col[0].x == point.x) {
                Some(col) => col.push(point),
                None => columns.push(vec![point]),
            }
        }
        Self { columns }
    }

    pub fn columns(&self) -> &[Vec<MassPoint>] {
        &self.columns
    }

    pub fn points(&self) -> impl Iterator<Item = &MassPoint> + '_ {
        self.columns.iter().flatten()
    }

    pub fn point_count(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }

    /// Sum of raw event counts over all points.
    pub fn total_events(&self) -> f64 {
        self.points().map(MassPoint::events).sum()
    }
}

/// Matching parameters for one mass: merging scale and truth-matching efficiency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchParams {
    pub qcut: f64,
    pub efficiency: f64,
}

/// Output file format of the rendered plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Pdf,
    Svg,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Svg => "svg",
        }
    }
}

/// Everything one `mcgrid plot` run needs besides the grid itself.
///
/// Built from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub grid_path: PathBuf,
    pub model: String,
    pub process: Process,
    pub plot_types: Vec<PlotType>,
    pub format: OutputFormat,
    pub out_dir: PathBuf,
    /// Optional x-range the axes must cover in addition to the data.
    pub x_range: Option<(f64, f64)>,
    /// Optional y-range the axes must cover in addition to the data.
    pub y_range: Option<(f64, f64)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_names_round_trip_through_from_str() {
        for p in Process::ALL {
            assert_eq!(p.name().parse::<Process>().unwrap(), p);
        }
    }

    #[test]
    fn unknown_process_is_named_in_error() {
        let err = "Unknown".parse::<Process>().unwrap_err();
        assert!(matches!(err, ScanError::UnknownProcess(ref name) if name == "Unknown"));
        assert!(err.to_string().contains("Unknown"));
    }

    #[test]
    fn plot_type_parses_underscored_names() {
        assert_eq!("lumi_br2".parse::<PlotType>().unwrap(), PlotType::LumiBr2);
        assert!("lumi-br2".parse::<PlotType>().is_err());
    }

    #[test]
    fn mass_point_rejects_negative_counts() {
        assert!(MassPoint::new(500.0, 100.0, -1.0).is_err());
        assert!(MassPoint::new(f64::NAN, 100.0, 1.0).is_err());
        assert!(MassPoint::new(0.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn from_points_groups_by_x_mass() {
        let pts = [
            MassPoint::new(600.0, 0.0, 10.0).unwrap(),
            MassPoint::new(700.0, 0.0, 20.0).unwrap(),
            MassPoint::new(600.0, 100.0, 30.0).unwrap(),
        ];
        let grid = Grid::from_points(pts);
        assert_eq!(grid.columns().len(), 2);
        assert_eq!(grid.columns()[0].len(), 2);
        assert_eq!(grid.total_events(), 60.0);
    }
}
