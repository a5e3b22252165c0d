//! Fixed page geometry and typography.

use crate::canvas::GridStyle;

/// Page geometry and typography for one export invocation.
///
/// Defaults describe a conventional A4 portrait print page. All lengths are
/// millimetres, font sizes are points.
#[derive(Debug, Clone, PartialEq)]
pub struct PageStyle {
    /// Page width.
    pub page_width: f32,

    /// Page height.
    pub page_height: f32,

    /// Horizontal margin on both sides.
    pub margin_x: f32,

    /// Vertical margin at top and bottom.
    pub margin_y: f32,

    /// Advance per visual text line.
    pub line_height: f32,

    /// Extra gap after a flushed paragraph block.
    pub paragraph_gap: f32,

    /// Title font size (drawn bold).
    pub title_size: f32,

    /// Body text font size.
    pub body_size: f32,

    /// Table header font size (drawn bold).
    pub table_header_size: f32,

    /// Table body font size.
    pub table_body_size: f32,

    /// Footer font size.
    pub footer_size: f32,

    /// Footer baseline distance from the bottom page edge.
    pub footer_offset: f32,
}

impl PageStyle {
    /// Create a style with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the page size.
    pub fn with_page_size(mut self, width: f32, height: f32) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    /// Override the margins.
    pub fn with_margins(mut self, horizontal: f32, vertical: f32) -> Self {
        self.margin_x = horizontal;
        self.margin_y = vertical;
        self
    }

    /// Override the line height.
    pub fn with_line_height(mut self, height: f32) -> Self {
        self.line_height = height;
        self
    }

    /// Usable width between the horizontal margins.
    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin_x
    }

    /// Lowest cursor position before a page break is required.
    pub fn bottom_limit(&self) -> f32 {
        self.page_height - self.margin_y
    }

    /// Grid styling derived from this page style.
    pub fn grid_style(&self) -> GridStyle {
        GridStyle {
            margin_x: self.margin_x,
            margin_y: self.margin_y,
            header_size: self.table_header_size,
            body_size: self.table_body_size,
            ..GridStyle::default()
        }
    }
}

impl Default for PageStyle {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin_x: 10.0,
            margin_y: 15.0,
            line_height: 7.0,
            paragraph_gap: 3.0,
            title_size: 16.0,
            body_size: 11.0,
            table_header_size: 10.0,
            table_body_size: 9.0,
            footer_size: 9.0,
            footer_offset: 8.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_width() {
        let style = PageStyle::default();
        assert_eq!(style.content_width(), 190.0);
        assert_eq!(style.bottom_limit(), 282.0);
    }

    #[test]
    fn test_builder() {
        let style = PageStyle::new()
            .with_page_size(100.0, 150.0)
            .with_margins(5.0, 10.0)
            .with_line_height(4.0);
        assert_eq!(style.content_width(), 90.0);
        assert_eq!(style.bottom_limit(), 140.0);
        assert_eq!(style.line_height, 4.0);
    }
}
