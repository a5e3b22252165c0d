//! PDF drawing surface built on `printpdf`.
//!
//! Uses the built-in Helvetica faces, so text measurement works from an
//! average glyph width per point size rather than embedded font metrics.
//! That approximation is what the wrap contract promises; words wider than
//! the requested width stay on their own, overflowing line.

use std::fs;

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerIndex, PdfLayerReference, PdfPageIndex, Point, Rgb,
};

use crate::canvas::{DocumentCanvas, GridStyle, TextStyle};
use crate::error::{Error, Result};

/// Points to millimetres.
const PT_TO_MM: f32 = 0.352_778;

/// Mean Helvetica glyph advance as a fraction of the font size.
const MEAN_GLYPH_EM: f32 = 0.5;

/// Grid rule color (light gray).
const RULE_GRAY: f32 = 0.6;

/// A [`DocumentCanvas`] that renders into an in-memory PDF document and
/// writes it to disk on [`save`](DocumentCanvas::save).
///
/// Coordinates accepted by this canvas are top-down millimetres; they are
/// flipped into the PDF bottom-up coordinate space at draw time.
pub struct PdfCanvas {
    doc: Option<PdfDocumentReference>,
    pages: Vec<(PdfPageIndex, PdfLayerIndex)>,
    current: usize,
    width: f32,
    height: f32,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl PdfCanvas {
    /// Create a canvas with one empty page of the given size (mm).
    pub fn new(title: &str, width: f32, height: f32) -> Result<Self> {
        let (doc, page, layer) = PdfDocument::new(title, Mm(width.into()), Mm(height.into()), "content");
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
        Ok(Self {
            doc: Some(doc),
            pages: vec![(page, layer)],
            current: 0,
            width,
            height,
            regular,
            bold,
        })
    }

    /// Create an A4 portrait canvas.
    pub fn a4(title: &str) -> Result<Self> {
        Self::new(title, 210.0, 297.0)
    }

    fn document(&self) -> Result<&PdfDocumentReference> {
        self.doc
            .as_ref()
            .ok_or_else(|| Error::Canvas("document already saved".to_string()))
    }

    fn layer(&self) -> Result<PdfLayerReference> {
        let doc = self.document()?;
        let (page, layer) = self.pages[self.current];
        Ok(doc.get_page(page).get_layer(layer))
    }

    fn font(&self, style: &TextStyle) -> &IndirectFontRef {
        if style.bold {
            &self.bold
        } else {
            &self.regular
        }
    }

    fn stroke_line(&self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<()> {
        let layer = self.layer()?;
        layer.set_outline_color(Color::Rgb(Rgb::new(RULE_GRAY.into(), RULE_GRAY.into(), RULE_GRAY.into(), None)));
        layer.set_outline_thickness(0.2);
        layer.add_line(Line {
            points: vec![
                (Point::new(Mm(x1.into()), Mm((self.height - y1).into())), false),
                (Point::new(Mm(x2.into()), Mm((self.height - y2).into())), false),
            ],
            is_closed: false,
        });
        Ok(())
    }

    /// Wrapped lines for every cell of a row, at the given font size.
    fn wrap_cells(&self, cells: &[String], cell_width: f32, size: f32) -> Vec<Vec<String>> {
        cells
            .iter()
            .map(|cell| self.wrap(cell, cell_width, size))
            .collect()
    }

    /// Height one grid row occupies, padding included.
    fn row_height(wrapped: &[Vec<String>], style: &GridStyle) -> f32 {
        let lines = wrapped.iter().map(|c| c.len()).max().unwrap_or(0).max(1);
        lines as f32 * style.cell_line_height + 2.0 * style.cell_padding
    }

    /// Draw one grid row (text plus rules) at `y`, returning the y just
    /// below it. The caller has already checked that the row fits.
    fn draw_grid_row(
        &mut self,
        cells: &[String],
        columns: usize,
        col_width: f32,
        y: f32,
        bold: bool,
        style: &GridStyle,
    ) -> Result<f32> {
        let size = if bold { style.header_size } else { style.body_size };
        let text_style = TextStyle { size, bold };
        let inner_width = col_width - 2.0 * style.cell_padding;
        let wrapped = self.wrap_cells(cells, inner_width, size);
        let height = Self::row_height(&wrapped, style);

        for (col, lines) in wrapped.iter().enumerate() {
            let x = style.margin_x + col as f32 * col_width + style.cell_padding;
            for (i, line) in lines.iter().enumerate() {
                let baseline =
                    y + style.cell_padding + (i as f32 + 0.8) * style.cell_line_height;
                self.draw_text(line, x, baseline, &text_style)?;
            }
        }

        // Rules: bottom edge plus the vertical column separators.
        let right = style.margin_x + columns as f32 * col_width;
        self.stroke_line(style.margin_x, y + height, right, y + height)?;
        for col in 0..=columns {
            let x = style.margin_x + col as f32 * col_width;
            self.stroke_line(x, y, x, y + height)?;
        }

        Ok(y + height)
    }
}

impl DocumentCanvas for PdfCanvas {
    fn page_width(&self) -> f32 {
        self.width
    }

    fn page_height(&self) -> f32 {
        self.height
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn current_page(&self) -> usize {
        self.current
    }

    fn add_page(&mut self) -> Result<()> {
        let doc = self.document()?;
        let (page, layer) = doc.add_page(Mm(self.width.into()), Mm(self.height.into()), "content");
        self.pages.push((page, layer));
        self.current = self.pages.len() - 1;
        Ok(())
    }

    fn set_current_page(&mut self, index: usize) -> Result<()> {
        if index >= self.pages.len() {
            return Err(Error::PageOutOfRange(index, self.pages.len()));
        }
        self.current = index;
        Ok(())
    }

    fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * MEAN_GLYPH_EM * PT_TO_MM
    }

    fn wrap(&self, text: &str, max_width: f32, size: f32) -> Vec<String> {
        let mut lines = Vec::new();
        for source in text.split('\n') {
            let source = source.trim_end();
            if source.trim().is_empty() {
                lines.push(String::new());
                continue;
            }
            let mut current = String::new();
            for word in source.split_whitespace() {
                let candidate = if current.is_empty() {
                    word.to_string()
                } else {
                    format!("{current} {word}")
                };
                if current.is_empty() || self.text_width(&candidate, size) <= max_width {
                    current = candidate;
                } else {
                    lines.push(std::mem::take(&mut current));
                    current = word.to_string();
                }
            }
            if !current.is_empty() {
                lines.push(current);
            }
        }
        lines
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) -> Result<()> {
        let layer = self.layer()?;
        layer.use_text(
            text,
            style.size.into(),
            Mm(x.into()),
            Mm((self.height - y).into()),
            self.font(style),
        );
        Ok(())
    }

    fn draw_grid(
        &mut self,
        header: &[String],
        rows: &[Vec<String>],
        start_y: f32,
        style: &GridStyle,
    ) -> Result<f32> {
        let columns = rows
            .iter()
            .map(|r| r.len())
            .chain(std::iter::once(header.len()))
            .max()
            .unwrap_or(0);
        if columns == 0 {
            return Ok(start_y);
        }
        let col_width = (self.width - 2.0 * style.margin_x) / columns as f32;
        let bottom = self.height - style.margin_y;

        let mut y = self.draw_grid_row(header, columns, col_width, start_y, true, style)?;
        for row in rows {
            let inner_width = col_width - 2.0 * style.cell_padding;
            let wrapped = self.wrap_cells(row, inner_width, style.body_size);
            if y + Self::row_height(&wrapped, style) > bottom {
                self.add_page()?;
                log::debug!("grid: row overflow, continuing on page {}", self.current + 1);
                y = self.draw_grid_row(header, columns, col_width, style.margin_y, true, style)?;
            }
            y = self.draw_grid_row(row, columns, col_width, y, false, style)?;
        }
        Ok(y)
    }

    fn save(&mut self, name: &str) -> Result<()> {
        let doc = self
            .doc
            .take()
            .ok_or_else(|| Error::Canvas("document already saved".to_string()))?;
        let bytes = doc.save_to_bytes()?;
        fs::write(name, bytes)?;
        Ok(())
    }
}
