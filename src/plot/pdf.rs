//! PDF backend (printpdf, built-in Helvetica fonts).
//!
//! Built-in PDF fonts only cover Latin-1, so labels are transliterated to ASCII
//! before they are written (`χ⁰₁` becomes `chi0_1`, `g̃` becomes `g~`).

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb,
};

use crate::error::ScanError;
use crate::plot::canvas::{Figure, HAlign, PlotColor, TextItem, VAlign};
use crate::plot::layout::{PageFrame, tick_label};

const MM_PER_POINT: f64 = 25.4 / 72.0;
/// Average Helvetica glyph width relative to the font size.
const GLYPH_WIDTH: f64 = 0.55;
const TICK_FONT_SIZE: f64 = 12.0;
const AXIS_LABEL_FONT_SIZE: f64 = 18.0;
const TITLE_FONT_SIZE: f64 = 16.0;
const GRID_GREY: (u8, u8, u8) = (200, 200, 200);

/// Write `figure` as a single-page PDF.
pub fn write_pdf(figure: &Figure, path: &Path) -> Result<(), ScanError> {
    let frame = PageFrame::new(figure);
    let (doc, page, layer) = PdfDocument::new(
        to_ascii(&figure.title),
        mm(frame.width),
        mm(frame.height),
        "plot".to_string(),
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| render_error(path, e))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| render_error(path, e))?;

    let page = PdfPage {
        layer: doc.get_page(page).get_layer(layer),
        frame,
        regular,
        bold,
    };
    page.draw(figure);

    let file = File::create(path).map_err(|e| ScanError::Render {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| render_error(path, e))?;
    Ok(())
}

fn render_error<E: std::fmt::Debug>(path: &Path, err: E) -> ScanError {
    ScanError::Render {
        path: path.to_path_buf(),
        message: format!("{err:?}"),
    }
}

/// Black label without a data position; placed directly in page coordinates.
fn label(text: &str, h_align: HAlign, v_align: VAlign, font_size: f64, bold: bool) -> TextItem {
    TextItem {
        x: 0.0,
        y: 0.0,
        text: text.to_string(),
        color: PlotColor::Black,
        bold,
        h_align,
        v_align,
        font_size,
    }
}

struct PdfPage {
    layer: PdfLayerReference,
    frame: PageFrame,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl PdfPage {
    fn draw(&self, figure: &Figure) {
        let f = &self.frame;
        let x_ticks = f.visible_x_ticks(&figure.x_ticks);
        let y_ticks = f.visible_y_ticks(&figure.y_ticks);

        if figure.grid {
            self.set_stroke(GRID_GREY, 0.5);
            for &t in &x_ticks {
                let (x, _) = f.map(t, 0.0);
                self.line((x, f.top), (x, f.bottom));
            }
            for &t in &y_ticks {
                let (_, y) = f.map(0.0, t);
                self.line((f.left, y), (f.right, y));
            }
        }

        self.set_stroke((0, 0, 0), 1.0);
        self.line((f.left, f.top), (f.right, f.top));
        self.line((f.right, f.top), (f.right, f.bottom));
        self.line((f.right, f.bottom), (f.left, f.bottom));
        self.line((f.left, f.bottom), (f.left, f.top));

        for &t in &x_ticks {
            let (x, _) = f.map(t, 0.0);
            self.line((x, f.bottom), (x, f.bottom + 5.0));
            let tick = label(&tick_label(t), HAlign::Center, VAlign::Top, TICK_FONT_SIZE, false);
            self.text_at(&tick, x, f.bottom + 8.0);
        }
        for &t in &y_ticks {
            let (_, y) = f.map(0.0, t);
            self.line((f.left - 5.0, y), (f.left, y));
            let tick = label(&tick_label(t), HAlign::Right, VAlign::Center, TICK_FONT_SIZE, false);
            self.text_at(&tick, f.left - 8.0, y);
        }

        let mid_x = (f.left + f.right) / 2.0;
        let x_label = label(
            &figure.x_label,
            HAlign::Center,
            VAlign::Top,
            AXIS_LABEL_FONT_SIZE,
            false,
        );
        self.text_at(&x_label, mid_x, f.bottom + 32.0);
        // Built-in fonts cannot be rotated through `use_text`, so the y label sits
        // above the frame instead of alongside it.
        let y_label = label(
            &figure.y_label,
            HAlign::Left,
            VAlign::Bottom,
            AXIS_LABEL_FONT_SIZE,
            false,
        );
        self.text_at(&y_label, f.left, f.top - 8.0);
        let title = label(&figure.title, HAlign::Center, VAlign::Bottom, TITLE_FONT_SIZE, true);
        self.text_at(&title, mid_x, f.top - 32.0);

        for item in &figure.texts {
            let (x, y) = f.map(item.x, item.y);
            self.text_at(item, x, y);
        }
    }

    /// Draw `item` anchored at the page position `(x, y)`.
    fn text_at(&self, item: &TextItem, x: f64, y: f64) {
        let text = to_ascii(&item.text);
        let size = item.font_size;
        let width = text.chars().count() as f64 * size * GLYPH_WIDTH;
        let x = match item.h_align {
            HAlign::Left => x,
            HAlign::Center => x - width / 2.0,
            HAlign::Right => x - width,
        };
        // Baseline position; page coordinates grow downwards.
        let y = match item.v_align {
            VAlign::Top => y + size * 0.75,
            VAlign::Center => y + size * 0.35,
            VAlign::Bottom => y,
        };

        let font = if item.bold { &self.bold } else { &self.regular };
        self.layer.set_fill_color(rgb(item.color.rgb()));
        self.layer
            .use_text(text, size as _, mm(x), mm(self.frame.height - y), font);
    }

    fn set_stroke(&self, color: (u8, u8, u8), width: f64) {
        self.layer.set_outline_color(rgb(color));
        self.layer.set_outline_thickness(width as _);
    }

    fn line(&self, from: (f64, f64), to: (f64, f64)) {
        let h = self.frame.height;
        self.layer.add_line(Line {
            points: vec![
                (Point::new(mm(from.0), mm(h - from.1)), false),
                (Point::new(mm(to.0), mm(h - to.1)), false),
            ],
            is_closed: false,
        });
    }
}

fn mm(points: f64) -> Mm {
    Mm((points * MM_PER_POINT) as _)
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(Rgb::new(
        (f64::from(r) / 255.0) as _,
        (f64::from(g) / 255.0) as _,
        (f64::from(b) / 255.0) as _,
        None,
    ))
}

/// Transliterate the Unicode used in labels into plain ASCII.
pub fn to_ascii(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\u{303}' => out.push('~'),
            'χ' => out.push_str("chi"),
            'τ' => out.push_str("tau"),
            '±' => out.push_str("+-"),
            '⁰' => out.push('0'),
            '¹' => out.push('1'),
            '⁻' => out.push_str("^-"),
            '₁' => out.push_str("_1"),
            '₂' => out.push_str("_2"),
            c if c.is_ascii() => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}
