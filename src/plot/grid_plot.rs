//! Categorized scan-grid plot.
//!
//! Every mass point is printed at its coordinates, colored by severity band. The value
//! is either the number of events to generate or the equivalent MC luminosity
//! `events / σ · 1000` (optionally rescaled by a branching-ratio factor).

use std::path::Path;

use crate::domain::{Grid, MassPoint, PlotType, Process};
use crate::error::ScanError;
use crate::models::xsec;
use crate::plot::axes::{AxisLayout, Extent, axis_layout};
use crate::plot::bands::{BAND_COUNT, BANDS, band_index, format_value, legend_labels};
use crate::plot::canvas::{Canvas, HAlign, PlotColor, TextItem, VAlign};

pub const FIGURE_SIZE_IN: (f64, f64) = (17.0, 10.0);
const POINT_FONT_SIZE: f64 = 9.0;
const LEGEND_FONT_SIZE: f64 = 16.0;
/// Legend rows are spaced by `y-span / LEGEND_SPACING_DIVISOR`.
const LEGEND_SPACING_DIVISOR: f64 = 22.0;

/// What to plot and where to put the artifact.
#[derive(Debug, Clone)]
pub struct PlotRequest<'a> {
    pub model: &'a str,
    pub process: Process,
    pub plot_type: PlotType,
    pub x_range: Option<(f64, f64)>,
    pub y_range: Option<(f64, f64)>,
    pub out_dir: &'a Path,
}

/// Value shown for `point` in a `plot_type` plot.
pub fn display_value(
    point: &MassPoint,
    plot_type: PlotType,
    process: Process,
) -> Result<f64, ScanError> {
    if plot_type == PlotType::Events {
        return Ok(point.events());
    }
    let lumi = point.events() / xsec(point.x(), process)? * 1000.0;
    Ok(plot_type.scale_lumi(lumi))
}

/// Run every per-point lookup for all of `plot_types` without drawing anything.
///
/// A multi-plot run calls this first so that one failing plot type leaves no
/// files from the others on disk.
pub fn check_values(
    grid: &Grid,
    process: Process,
    plot_types: &[PlotType],
) -> Result<(), ScanError> {
    for &plot_type in plot_types {
        for point in grid.points() {
            display_value(point, plot_type, process)?;
        }
    }
    Ok(())
}

/// `"{model}_{plot_type}.{extension}"`.
pub fn artifact_name(model: &str, plot_type: PlotType, extension: &str) -> String {
    format!("{model}_{plot_type}.{extension}")
}

/// Label of the y-axis (the lighter sparticle of the decay chain).
pub fn lsp_label(model: &str) -> &'static str {
    if model == "T6ttWW" {
        "m(χ±₁) [GeV]"
    } else {
        "m(χ⁰₁) [GeV]"
    }
}

/// Plot title; `total_events` is in thousands, so the total is shown in millions.
pub fn plot_title(plot_type: PlotType, model: &str, total_events: f64) -> String {
    let title = if plot_type.is_lumi() {
        format!("Equivalent {model} MC luminosity in fb⁻¹")
    } else {
        format!("Thousands of {model} events to generate")
    };
    format!(
        "{title} ({:.1} million events in the scan)",
        total_events / 1000.0
    )
}

/// Draw `grid` onto `canvas`, save it as `{model}_{plot_type}.<ext>` inside
/// `request.out_dir`, and return the total number of events in the scan.
///
/// All per-point lookups run before anything is saved, so a failed lookup never
/// leaves a partial artifact behind.
pub fn make_plot(
    grid: &Grid,
    request: &PlotRequest<'_>,
    canvas: &mut dyn Canvas,
) -> Result<f64, ScanError> {
    let extent = Extent::of_grid(grid)
        .ok_or(ScanError::EmptyGrid)?
        .with_hints(request.x_range, request.y_range);
    for (idx, column) in grid.columns().iter().enumerate() {
        if column.is_empty() {
            log::warn!("column {idx} of the {} grid is empty", request.model);
        }
    }

    let mut total_events = 0.0;
    let mut labels = Vec::with_capacity(grid.point_count());
    let mut band_counts = [0usize; BAND_COUNT];
    for point in grid.points() {
        total_events += point.events();
        let value = display_value(point, request.plot_type, request.process)?;
        let band = band_index(value);
        band_counts[band] += 1;
        labels.push(TextItem {
            x: point.x(),
            y: point.y(),
            text: format_value(value),
            color: BANDS[band].color,
            bold: true,
            h_align: HAlign::Center,
            v_align: VAlign::Center,
            font_size: POINT_FONT_SIZE,
        });
    }
    let counts: Vec<String> = BANDS
        .iter()
        .zip(band_counts)
        .map(|(band, n)| format!("{}={n}", band.color.name()))
        .collect();
    log::debug!(
        "{} {}: {}",
        request.model,
        request.plot_type,
        counts.join(" ")
    );

    canvas.set_figure_size(FIGURE_SIZE_IN.0, FIGURE_SIZE_IN.1);
    canvas.set_axis_labels(request.process.mass_label(), lsp_label(request.model));
    for label in labels {
        canvas.draw_text(label);
    }

    let x_axis = axis_layout(extent.x_min, extent.x_max);
    let y_axis = axis_layout(extent.y_min, extent.y_max);
    log::debug!(
        "axes: x {:?} step {}, y {:?} step {}",
        x_axis.limits(),
        x_axis.step,
        y_axis.limits(),
        y_axis.step
    );
    canvas.set_limits(x_axis.limits(), y_axis.limits());
    canvas.set_ticks(&x_axis.ticks, &y_axis.ticks);
    canvas.set_grid(true);

    draw_legend(canvas, request.plot_type, &x_axis, &y_axis);
    canvas.set_title(&plot_title(request.plot_type, request.model, total_events));

    let path = request.out_dir.join(artifact_name(
        request.model,
        request.plot_type,
        canvas.file_extension(),
    ));
    canvas.save(&path)?;
    log::info!("open {}", path.display());

    Ok(total_events)
}

fn draw_legend(
    canvas: &mut dyn Canvas,
    plot_type: PlotType,
    x_axis: &AxisLayout,
    y_axis: &AxisLayout,
) {
    let x = x_axis.min - x_axis.margin / 1.5;
    let top = y_axis.max + y_axis.margin / 1.5;
    let spacing = y_axis.span() / LEGEND_SPACING_DIVISOR;

    for (i, (text, color)) in legend_labels(plot_type).into_iter().enumerate() {
        canvas.draw_text(legend_item(x, top - i as f64 * spacing, text, color));
    }
}

fn legend_item(x: f64, y: f64, text: String, color: PlotColor) -> TextItem {
    TextItem {
        x,
        y,
        text,
        color,
        bold: true,
        h_align: HAlign::Left,
        v_align: VAlign::Top,
        font_size: LEGEND_FONT_SIZE,
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::plot::canvas::Figure;

    fn pt(x: f64, y: f64, events: f64) -> MassPoint {
        MassPoint::new(x, y, events).unwrap()
    }

    fn request(plot_type: PlotType, process: Process) -> PlotRequest<'static> {
        PlotRequest {
            model: "T1tttt",
            process,
            plot_type,
            x_range: None,
            y_range: None,
            out_dir: Path::new("plots"),
        }
    }

    fn point_texts(figure: &Figure) -> Vec<&TextItem> {
        figure
            .texts
            .iter()
            .filter(|t| t.font_size == POINT_FONT_SIZE)
            .collect()
    }

    #[test]
    fn single_point_events_plot() {
        let grid = Grid::new(vec![vec![pt(500.0, 100.0, 5000.0)]]);
        let mut figure = Figure::default();

        let req = request(PlotType::Events, Process::SqSq);
        let total = make_plot(&grid, &req, &mut figure).unwrap();

        assert_eq!(total, 5000.0);
        let points = point_texts(&figure);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].text, "5.0");
        assert_eq!(points[0].color, PlotColor::Red);
        assert_eq!((points[0].x, points[0].y), (500.0, 100.0));
        assert_eq!(figure.saved_to.as_deref(), Some(Path::new("plots/T1tttt_events.pdf")));
        assert!(figure.title.contains("5.0 million events"));
        assert!(figure.title.starts_with("Thousands of T1tttt events to generate"));
    }

    #[test]
    fn lumi_values_divide_by_xsec() {
        let p = pt(1000.0, 100.0, 50.0);
        let sigma = xsec(1000.0, Process::GlGl).unwrap();
        let lumi = display_value(&p, PlotType::Lumi, Process::GlGl).unwrap();
        assert_approx_eq!(f64, lumi, 50.0 / sigma * 1000.0, ulps = 2);

        let x8 = display_value(&p, PlotType::Lumix8, Process::GlGl).unwrap();
        assert_approx_eq!(f64, x8, lumi / 8.0, ulps = 2);
        let br2 = display_value(&p, PlotType::LumiBr2, Process::GlGl).unwrap();
        assert_approx_eq!(f64, br2, lumi / 0.446, ulps = 2);
        let br5 = display_value(&p, PlotType::LumiBr5, Process::GlGl).unwrap();
        assert_approx_eq!(f64, br5, lumi * 5.0, ulps = 2);
        let br4 = display_value(&p, PlotType::LumiBr4, Process::GlGl).unwrap();
        assert_approx_eq!(f64, br4, lumi * 4.0, ulps = 2);
    }

    #[test]
    fn electroweak_lumi_is_scaled_event_count() {
        let p = pt(300.0, 0.0, 0.125);
        assert_eq!(display_value(&p, PlotType::Lumi, Process::C1N2).unwrap(), 125.0);
    }

    #[test]
    fn points_are_colored_by_band() {
        let grid = Grid::new(vec![
            vec![pt(600.0, 0.0, 40.0), pt(600.0, 100.0, 150.0)],
            vec![pt(700.0, 0.0, 151.0), pt(700.0, 100.0, 2500.0)],
        ]);
        let mut figure = Figure::default();
        let req = request(PlotType::Events, Process::GlGl);
        let total = make_plot(&grid, &req, &mut figure).unwrap();
        assert_eq!(total, 2841.0);

        let colors: Vec<(String, PlotColor)> = point_texts(&figure)
            .into_iter()
            .map(|t| (t.text.clone(), t.color))
            .collect();
        assert_eq!(
            colors,
            [
                ("40".to_string(), PlotColor::Black),
                ("150".to_string(), PlotColor::Green),
                ("151".to_string(), PlotColor::Blue),
                ("2.5".to_string(), PlotColor::Red),
            ]
        );
    }

    #[test]
    fn legend_is_stacked_at_top_left() {
        let grid = Grid::new(vec![
            vec![pt(600.0, 0.0, 10.0), pt(600.0, 1100.0, 10.0)],
            vec![pt(1000.0, 0.0, 10.0)],
        ]);
        let mut figure = Figure::default();
        make_plot(&grid, &request(PlotType::Lumi, Process::GlGl), &mut figure).unwrap();

        let legend: Vec<&TextItem> = figure
            .texts
            .iter()
            .filter(|t| t.font_size == LEGEND_FONT_SIZE)
            .collect();
        assert_eq!(legend.len(), 5);
        // x: span 400 -> margin 50; y: span 1100 -> margin 50
        assert_approx_eq!(f64, legend[0].x, 600.0 - 50.0 / 1.5, ulps = 2);
        assert_approx_eq!(f64, legend[0].y, 1100.0 + 50.0 / 1.5, ulps = 2);
        assert_approx_eq!(f64, legend[0].y - legend[1].y, 1100.0 / 22.0, epsilon = 1e-9);
        assert_eq!(legend[0].text, "1-50 fb⁻¹");
        assert_eq!(legend[4].color, PlotColor::Red);
        assert!(figure.title.starts_with("Equivalent T1tttt MC luminosity"));
    }

    #[test]
    fn axes_follow_data_extent() {
        let grid = Grid::new(vec![
            vec![pt(600.0, 0.0, 1.0)],
            vec![pt(2300.0, 1500.0, 1.0)],
        ]);
        let mut figure = Figure::default();
        make_plot(&grid, &request(PlotType::Events, Process::GlGl), &mut figure).unwrap();

        assert_eq!(figure.x_limits, (500.0, 2400.0));
        assert_eq!(figure.y_limits, (-100.0, 1600.0));
        assert_eq!(figure.x_ticks[1] - figure.x_ticks[0], 200.0);
        assert!(figure.grid);
        assert_eq!((figure.width_in, figure.height_in), FIGURE_SIZE_IN);
        assert_eq!(figure.x_label, Process::GlGl.mass_label());
    }

    #[test]
    fn range_hints_widen_the_axes() {
        let grid = Grid::new(vec![vec![pt(800.0, 100.0, 1.0)]]);
        let mut req = request(PlotType::Events, Process::GlGl);
        req.x_range = Some((600.0, 1000.0));
        let mut figure = Figure::default();
        make_plot(&grid, &req, &mut figure).unwrap();
        assert_eq!(figure.x_limits, (550.0, 1050.0));
    }

    #[test]
    fn lookup_failure_saves_nothing() {
        let grid = Grid::new(vec![vec![pt(0.0, 0.0, 10.0)]]);
        let mut figure = Figure::default();
        let req = request(PlotType::Lumi, Process::GlGl);
        let err = make_plot(&grid, &req, &mut figure).unwrap_err();
        assert!(matches!(err, ScanError::MassOutOfRange { .. }));
        assert!(figure.saved_to.is_none());
    }

    #[test]
    fn value_check_covers_every_plot_type() {
        let grid = Grid::new(vec![vec![pt(0.0, 0.0, 20.0)], vec![pt(700.0, 0.0, 30.0)]]);
        assert!(check_values(&grid, Process::GlGl, &[PlotType::Events]).is_ok());
        assert!(matches!(
            check_values(&grid, Process::GlGl, &[PlotType::Events, PlotType::Lumi]),
            Err(ScanError::MassOutOfRange { .. })
        ));
        let ok = Grid::new(vec![vec![pt(700.0, 0.0, 30.0)]]);
        assert!(check_values(&ok, Process::C1N2, &PlotType::ALL).is_ok());
    }

    #[test]
    fn empty_grid_is_rejected() {
        let grid = Grid::new(vec![vec![]]);
        let mut figure = Figure::default();
        assert!(matches!(
            make_plot(&grid, &request(PlotType::Events, Process::GlGl), &mut figure),
            Err(ScanError::EmptyGrid)
        ));
    }

    #[test]
    fn t6ttww_uses_chargino_y_label() {
        assert_eq!(lsp_label("T6ttWW"), "m(χ±₁) [GeV]");
        assert_eq!(lsp_label("T2tt"), "m(χ⁰₁) [GeV]");
    }
}
