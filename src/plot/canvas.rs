//! The drawing port used by the grid renderer.
//!
//! `Canvas` is the small set of primitives the renderer needs (text, axis limits and
//! ticks, labels, title, save). `Figure` implements it as a plain display list, which
//! is what tests inspect; `FileCanvas` wraps a `Figure` and hands it to the PDF or
//! SVG backend on `save`.

use std::path::{Path, PathBuf};

use crate::domain::OutputFormat;
use crate::error::ScanError;

/// Named colors used by the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotColor {
    Black,
    Green,
    Blue,
    Purple,
    Red,
}

impl PlotColor {
    pub fn name(self) -> &'static str {
        match self {
            PlotColor::Black => "black",
            PlotColor::Green => "green",
            PlotColor::Blue => "blue",
            PlotColor::Purple => "purple",
            PlotColor::Red => "red",
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            PlotColor::Black => (0, 0, 0),
            PlotColor::Green => (0, 128, 0),
            PlotColor::Blue => (0, 0, 255),
            PlotColor::Purple => (128, 0, 128),
            PlotColor::Red => (255, 0, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// A text label anchored at data coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub color: PlotColor,
    pub bold: bool,
    pub h_align: HAlign,
    pub v_align: VAlign,
    /// Font size in points.
    pub font_size: f64,
}

/// Drawing surface consumed by the renderer.
pub trait Canvas {
    /// Figure size in inches.
    fn set_figure_size(&mut self, width_in: f64, height_in: f64);

    fn set_axis_labels(&mut self, x: &str, y: &str);

    fn set_title(&mut self, title: &str);

    fn draw_text(&mut self, text: TextItem);

    /// Visible data range of both axes.
    fn set_limits(&mut self, x: (f64, f64), y: (f64, f64));

    fn set_ticks(&mut self, x: &[f64], y: &[f64]);

    fn set_grid(&mut self, on: bool);

    /// Extension of the files this canvas writes.
    fn file_extension(&self) -> &'static str {
        "pdf"
    }

    fn save(&mut self, path: &Path) -> Result<(), ScanError>;
}

/// In-memory display list.
///
/// Saving a bare `Figure` only records the target path; nothing touches the disk.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub width_in: f64,
    pub height_in: f64,
    pub x_label: String,
    pub y_label: String,
    pub title: String,
    pub texts: Vec<TextItem>,
    pub x_limits: (f64, f64),
    pub y_limits: (f64, f64),
    pub x_ticks: Vec<f64>,
    pub y_ticks: Vec<f64>,
    pub grid: bool,
    pub saved_to: Option<PathBuf>,
}

impl Default for Figure {
    fn default() -> Self {
        Self {
            width_in: 17.0,
            height_in: 10.0,
            x_label: String::new(),
            y_label: String::new(),
            title: String::new(),
            texts: Vec::new(),
            x_limits: (0.0, 1.0),
            y_limits: (0.0, 1.0),
            x_ticks: Vec::new(),
            y_ticks: Vec::new(),
            grid: false,
            saved_to: None,
        }
    }
}

impl Canvas for Figure {
    fn set_figure_size(&mut self, width_in: f64, height_in: f64) {
        self.width_in = width_in;
        self.height_in = height_in;
    }

    fn set_axis_labels(&mut self, x: &str, y: &str) {
        self.x_label = x.to_string();
        self.y_label = y.to_string();
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn draw_text(&mut self, text: TextItem) {
        self.texts.push(text);
    }

    fn set_limits(&mut self, x: (f64, f64), y: (f64, f64)) {
        self.x_limits = x;
        self.y_limits = y;
    }

    fn set_ticks(&mut self, x: &[f64], y: &[f64]) {
        self.x_ticks = x.to_vec();
        self.y_ticks = y.to_vec();
    }

    fn set_grid(&mut self, on: bool) {
        self.grid = on;
    }

    fn save(&mut self, path: &Path) -> Result<(), ScanError> {
        self.saved_to = Some(path.to_path_buf());
        Ok(())
    }
}

/// Canvas that writes the recorded figure to disk in the chosen format.
#[derive(Debug, Clone)]
pub struct FileCanvas {
    figure: Figure,
    format: OutputFormat,
}

impl FileCanvas {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            figure: Figure::default(),
            format,
        }
    }
}

impl Canvas for FileCanvas {
    fn set_figure_size(&mut self, width_in: f64, height_in: f64) {
        self.figure.set_figure_size(width_in, height_in);
    }

    fn set_axis_labels(&mut self, x: &str, y: &str) {
        self.figure.set_axis_labels(x, y);
    }

    fn set_title(&mut self, title: &str) {
        self.figure.set_title(title);
    }

    fn draw_text(&mut self, text: TextItem) {
        self.figure.draw_text(text);
    }

    fn set_limits(&mut self, x: (f64, f64), y: (f64, f64)) {
        self.figure.set_limits(x, y);
    }

    fn set_ticks(&mut self, x: &[f64], y: &[f64]) {
        self.figure.set_ticks(x, y);
    }

    fn set_grid(&mut self, on: bool) {
        self.figure.set_grid(on);
    }

    fn file_extension(&self) -> &'static str {
        self.format.extension()
    }

    fn save(&mut self, path: &Path) -> Result<(), ScanError> {
        match self.format {
            OutputFormat::Pdf => super::pdf::write_pdf(&self.figure, path)?,
            OutputFormat::Svg => super::svg::write_svg(&self.figure, path)?,
        }
        self.figure.save(path)
    }
}
