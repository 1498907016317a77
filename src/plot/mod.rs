//! Grid plot rendering.
//!
//! - severity bands and value formatting (`bands`)
//! - data extent and axis layout (`axes`)
//! - the renderer itself (`grid_plot`)
//! - the drawing port and its file backends (`canvas`, `pdf`, `svg`, `layout`)

pub mod axes;
pub mod bands;
pub mod canvas;
pub mod grid_plot;
pub mod layout;
pub mod pdf;
pub mod svg;

pub use canvas::{Canvas, FileCanvas, Figure, PlotColor, TextItem};
pub use grid_plot::*;
