//! Drawing surface abstraction.
//!
//! The layout engines never touch a PDF library directly; they draw through
//! the [`DocumentCanvas`] trait. Coordinates are top-down millimetres: `y`
//! grows toward the bottom of the page and `(0, 0)` is the top-left corner.
//! Implementations translate into their native coordinate system.

mod pdf;

pub use pdf::PdfCanvas;

use crate::error::Result;

/// Text drawing style for a single run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in points.
    pub size: f32,

    /// Whether the bold face is used.
    pub bold: bool,
}

impl TextStyle {
    /// Regular text at the given size.
    pub fn regular(size: f32) -> Self {
        Self { size, bold: false }
    }

    /// Bold text at the given size.
    pub fn bold(size: f32) -> Self {
        Self { size, bold: true }
    }
}

/// Visual styling for the table grid renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct GridStyle {
    /// Horizontal page margin in millimetres.
    pub margin_x: f32,

    /// Vertical page margin in millimetres; the renderer breaks to a new
    /// page when a row would cross the bottom margin.
    pub margin_y: f32,

    /// Header row font size in points (drawn bold).
    pub header_size: f32,

    /// Body cell font size in points.
    pub body_size: f32,

    /// Height of one wrapped cell line in millimetres.
    pub cell_line_height: f32,

    /// Vertical padding inside a cell in millimetres.
    pub cell_padding: f32,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            margin_x: 10.0,
            margin_y: 15.0,
            header_size: 10.0,
            body_size: 9.0,
            cell_line_height: 5.0,
            cell_padding: 1.5,
        }
    }
}

/// The external drawing/encoding surface consumed by the export engine.
///
/// Implementations own the page list; `add_page` appends a page and makes
/// it current, `set_current_page` re-targets drawing for the finishing
/// pass. `draw_grid` performs its own internal pagination when a table
/// overflows the page and reports the vertical position it finished at.
pub trait DocumentCanvas {
    /// Page width in millimetres.
    fn page_width(&self) -> f32;

    /// Page height in millimetres.
    fn page_height(&self) -> f32;

    /// Number of pages produced so far (always at least 1).
    fn page_count(&self) -> usize;

    /// Zero-based index of the page drawing currently targets.
    fn current_page(&self) -> usize;

    /// Append a new page and make it current.
    fn add_page(&mut self) -> Result<()>;

    /// Re-target drawing at an existing page (zero-based).
    fn set_current_page(&mut self, index: usize) -> Result<()>;

    /// Measured width of `text` at `size` points, in millimetres.
    fn text_width(&self, text: &str, size: f32) -> f32;

    /// Wrap `text` to `max_width` millimetres at `size` points, returning
    /// visual lines. Embedded newlines force line breaks; blank source
    /// lines yield empty visual lines.
    fn wrap(&self, text: &str, max_width: f32, size: f32) -> Vec<String>;

    /// Draw one line of text with its baseline at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) -> Result<()>;

    /// Draw a ruled grid with a bold header row starting at `start_y`,
    /// returning the y position just below the last drawn row (which may be
    /// on a later page than the one drawing started on).
    fn draw_grid(
        &mut self,
        header: &[String],
        rows: &[Vec<String>],
        start_y: f32,
        style: &GridStyle,
    ) -> Result<f32>;

    /// Persist the rendered document under `name`. Consumes the internal
    /// document; further drawing fails.
    fn save(&mut self, name: &str) -> Result<()>;
}
