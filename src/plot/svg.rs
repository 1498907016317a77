//! SVG backend (plotters).
//!
//! Everything is drawn on the root drawing area in page coordinates computed by
//! `PageFrame`, so both file backends place labels identically.

use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle, FontTransform};

use crate::error::ScanError;
use crate::plot::canvas::{Figure, HAlign, PlotColor, TextItem, VAlign};
use crate::plot::layout::{PageFrame, tick_label};

const TICK_FONT_SIZE: f64 = 12.0;
const AXIS_LABEL_FONT_SIZE: f64 = 18.0;
const TITLE_FONT_SIZE: f64 = 16.0;

/// Write `figure` as an SVG document (one pixel per point).
pub fn write_svg(figure: &Figure, path: &Path) -> Result<(), ScanError> {
    draw(figure, path).map_err(|e| ScanError::Render {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

type DrawResult = Result<(), Box<dyn std::error::Error>>;
type Root<'a> = DrawingArea<SVGBackend<'a>, plotters::coord::Shift>;

fn draw(figure: &Figure, path: &Path) -> DrawResult {
    let f = PageFrame::new(figure);
    let root = SVGBackend::new(path, (f.width.round() as u32, f.height.round() as u32))
        .into_drawing_area();
    root.fill(&WHITE)?;

    let x_ticks = f.visible_x_ticks(&figure.x_ticks);
    let y_ticks = f.visible_y_ticks(&figure.y_ticks);

    if figure.grid {
        let grid_style = ShapeStyle::from(&RGBColor(200, 200, 200)).stroke_width(1);
        for &t in &x_ticks {
            let (x, _) = f.map(t, 0.0);
            root.draw(&PathElement::new(vec![px(x, f.top), px(x, f.bottom)], grid_style))?;
        }
        for &t in &y_ticks {
            let (_, y) = f.map(0.0, t);
            root.draw(&PathElement::new(vec![px(f.left, y), px(f.right, y)], grid_style))?;
        }
    }

    root.draw(&Rectangle::new(
        [px(f.left, f.top), px(f.right, f.bottom)],
        BLACK.stroke_width(1),
    ))?;

    for &t in &x_ticks {
        let (x, _) = f.map(t, 0.0);
        segment(&root, px(x, f.bottom), px(x, f.bottom + 5.0))?;
        let style = black_text(TICK_FONT_SIZE, false, HAlign::Center, VAlign::Top);
        root.draw(&Text::new(tick_label(t), px(x, f.bottom + 8.0), style))?;
    }
    for &t in &y_ticks {
        let (_, y) = f.map(0.0, t);
        segment(&root, px(f.left - 5.0, y), px(f.left, y))?;
        let style = black_text(TICK_FONT_SIZE, false, HAlign::Right, VAlign::Center);
        root.draw(&Text::new(tick_label(t), px(f.left - 8.0, y), style))?;
    }

    let mid_x = (f.left + f.right) / 2.0;
    let mid_y = (f.top + f.bottom) / 2.0;
    let style = black_text(AXIS_LABEL_FONT_SIZE, false, HAlign::Center, VAlign::Top);
    root.draw(&Text::new(figure.x_label.clone(), px(mid_x, f.bottom + 32.0), style))?;
    let style = black_text(AXIS_LABEL_FONT_SIZE, false, HAlign::Center, VAlign::Bottom)
        .transform(FontTransform::Rotate270);
    root.draw(&Text::new(figure.y_label.clone(), px(f.left - 50.0, mid_y), style))?;
    let style = black_text(TITLE_FONT_SIZE, true, HAlign::Center, VAlign::Bottom);
    root.draw(&Text::new(figure.title.clone(), px(mid_x, f.top - 20.0), style))?;

    for item in &figure.texts {
        draw_item(&root, &f, item)?;
    }

    root.present()?;
    Ok(())
}

fn draw_item(root: &Root<'_>, f: &PageFrame, item: &TextItem) -> DrawResult {
    let (x, y) = f.map(item.x, item.y);
    let style = text_style(item.font_size, item.bold, item.color, item.h_align, item.v_align);
    root.draw(&Text::new(item.text.clone(), px(x, y), style))?;
    Ok(())
}

fn segment(root: &Root<'_>, from: (i32, i32), to: (i32, i32)) -> DrawResult {
    root.draw(&PathElement::new(vec![from, to], BLACK.stroke_width(1)))?;
    Ok(())
}

fn px(x: f64, y: f64) -> (i32, i32) {
    (x.round() as i32, y.round() as i32)
}

fn black_text(size: f64, bold: bool, h_align: HAlign, v_align: VAlign) -> TextStyle<'static> {
    text_style(size, bold, PlotColor::Black, h_align, v_align)
}

fn text_style(
    size: f64,
    bold: bool,
    color: PlotColor,
    h_align: HAlign,
    v_align: VAlign,
) -> TextStyle<'static> {
    let weight = if bold { FontStyle::Bold } else { FontStyle::Normal };
    let (r, g, b) = color.rgb();
    let h = match h_align {
        HAlign::Left => HPos::Left,
        HAlign::Center => HPos::Center,
        HAlign::Right => HPos::Right,
    };
    let v = match v_align {
        VAlign::Top => VPos::Top,
        VAlign::Center => VPos::Center,
        VAlign::Bottom => VPos::Bottom,
    };
    FontDesc::new(FontFamily::SansSerif, size, weight)
        .color(&RGBColor(r, g, b))
        .pos(Pos::new(h, v))
}
