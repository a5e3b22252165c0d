//! Pagination controller.
//!
//! Owns the layout cursor shared by the flow engines: the canvas's current
//! page plus the vertical write position. Engines never move the cursor
//! themselves; they request space and advances through this controller.

use crate::canvas::{DocumentCanvas, TextStyle};
use crate::error::Result;
use crate::layout::PageStyle;

/// Page/cursor state for one export invocation.
pub struct Paginator<'a, C: DocumentCanvas + ?Sized> {
    canvas: &'a mut C,
    style: &'a PageStyle,
    y: f32,
}

impl<'a, C: DocumentCanvas + ?Sized> Paginator<'a, C> {
    /// Create a paginator with the cursor at the top margin of page 1.
    pub fn new(canvas: &'a mut C, style: &'a PageStyle) -> Self {
        let y = style.margin_y;
        Self { canvas, style, y }
    }

    /// Current vertical write position (top-down mm).
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Zero-based index of the page the cursor is on.
    pub fn page(&self) -> usize {
        self.canvas.current_page()
    }

    /// The shared page style.
    pub fn style(&self) -> &PageStyle {
        self.style
    }

    /// Mutable access to the drawing surface.
    pub fn canvas(&mut self) -> &mut C {
        self.canvas
    }

    /// Guarantee `height` of vertical space on the current page, starting a
    /// new page first when the cursor would cross the bottom margin.
    pub fn ensure_space(&mut self, height: f32) -> Result<()> {
        if self.y + height > self.style.bottom_limit() {
            log::debug!("paginator: breaking to page {}", self.canvas.page_count() + 1);
            self.canvas.add_page()?;
            self.y = self.style.margin_y;
        }
        Ok(())
    }

    /// Unconditionally start a new page and reset the cursor to its top
    /// margin.
    pub fn force_page_break(&mut self) -> Result<()> {
        self.canvas.add_page()?;
        self.y = self.style.margin_y;
        Ok(())
    }

    /// Move the cursor down by `height` on the current page.
    pub fn advance(&mut self, height: f32) {
        self.y += height;
    }

    /// Re-anchor the cursor after a collaborator drew at its own pace (the
    /// grid renderer paginates internally and reports where it stopped).
    pub fn resync(&mut self, y: f32) {
        self.y = y;
    }

    /// Finishing pass: stamp a right-aligned `Page i / N` footer on every
    /// produced page. N is only known once layout is complete, so this
    /// revisits already-rendered pages rather than keeping a running count.
    pub fn finish(&mut self) -> Result<usize> {
        let total = self.canvas.page_count();
        let footer = TextStyle::regular(self.style.footer_size);
        for index in 0..total {
            self.canvas.set_current_page(index)?;
            let label = format!("Page {} / {}", index + 1, total);
            let x = self.style.page_width
                - self.style.margin_x
                - self.canvas.text_width(&label, self.style.footer_size);
            let y = self.style.page_height - self.style.footer_offset;
            self.canvas.draw_text(&label, x, y, &footer)?;
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::GridStyle;
    use crate::error::Error;

    /// Minimal canvas that only tracks pages.
    struct CountingCanvas {
        pages: usize,
        current: usize,
        texts: Vec<(usize, String, f32)>,
    }

    impl CountingCanvas {
        fn new() -> Self {
            Self {
                pages: 1,
                current: 0,
                texts: Vec::new(),
            }
        }
    }

    impl DocumentCanvas for CountingCanvas {
        fn page_width(&self) -> f32 {
            210.0
        }
        fn page_height(&self) -> f32 {
            297.0
        }
        fn page_count(&self) -> usize {
            self.pages
        }
        fn current_page(&self) -> usize {
            self.current
        }
        fn add_page(&mut self) -> Result<()> {
            self.pages += 1;
            self.current = self.pages - 1;
            Ok(())
        }
        fn set_current_page(&mut self, index: usize) -> Result<()> {
            if index >= self.pages {
                return Err(Error::PageOutOfRange(index, self.pages));
            }
            self.current = index;
            Ok(())
        }
        fn text_width(&self, text: &str, size: f32) -> f32 {
            text.chars().count() as f32 * size * 0.18
        }
        fn wrap(&self, text: &str, _max_width: f32, _size: f32) -> Vec<String> {
            text.split('\n').map(str::to_string).collect()
        }
        fn draw_text(&mut self, text: &str, x: f32, _y: f32, _style: &TextStyle) -> Result<()> {
            self.texts.push((self.current, text.to_string(), x));
            Ok(())
        }
        fn draw_grid(
            &mut self,
            _header: &[String],
            _rows: &[Vec<String>],
            start_y: f32,
            _style: &GridStyle,
        ) -> Result<f32> {
            Ok(start_y)
        }
        fn save(&mut self, _name: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_ensure_space_breaks_at_bottom() {
        let style = PageStyle::default();
        let mut canvas = CountingCanvas::new();
        let mut pager = Paginator::new(&mut canvas, &style);

        pager.ensure_space(7.0).unwrap();
        assert_eq!(pager.page(), 0);

        pager.resync(280.0);
        pager.ensure_space(7.0).unwrap();
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.y(), style.margin_y);
    }

    #[test]
    fn test_force_page_break() {
        let style = PageStyle::default();
        let mut canvas = CountingCanvas::new();
        let mut pager = Paginator::new(&mut canvas, &style);
        pager.advance(100.0);
        pager.force_page_break().unwrap();
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.y(), style.margin_y);
    }

    #[test]
    fn test_finish_stamps_every_page() {
        let style = PageStyle::default();
        let mut canvas = CountingCanvas::new();
        let mut pager = Paginator::new(&mut canvas, &style);
        pager.force_page_break().unwrap();
        pager.force_page_break().unwrap();
        let total = pager.finish().unwrap();
        assert_eq!(total, 3);

        let footers: Vec<_> = canvas.texts.iter().map(|(p, t, _)| (*p, t.clone())).collect();
        assert_eq!(
            footers,
            vec![
                (0, "Page 1 / 3".to_string()),
                (1, "Page 2 / 3".to_string()),
                (2, "Page 3 / 3".to_string()),
            ]
        );
    }
}
