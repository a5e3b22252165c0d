//! Integration tests for the export pipeline, using a recording canvas.

use markpage::error::Result;
use markpage::{
    export_to_canvas, DocumentCanvas, Error, ExportOptions, GridStyle, PageStyle, TextStyle,
};

/// A drawn operation captured by the mock canvas.
#[derive(Debug, Clone, PartialEq)]
enum Op {
    Text {
        page: usize,
        text: String,
        x: f32,
        y: f32,
        size: f32,
        bold: bool,
    },
    Grid {
        page: usize,
        header: Vec<String>,
        rows: Vec<Vec<String>>,
        start_y: f32,
    },
    AddPage,
}

/// Mock canvas that records every operation. One source line maps to one
/// visual line, so tests control pagination by line count.
struct RecordingCanvas {
    width: f32,
    height: f32,
    pages: usize,
    current: usize,
    ops: Vec<Op>,
}

impl RecordingCanvas {
    fn new() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            pages: 1,
            current: 0,
            ops: Vec::new(),
        }
    }

    fn texts(&self) -> Vec<(usize, String)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { page, text, .. } => Some((*page, text.clone())),
                _ => None,
            })
            .collect()
    }

    fn add_page_count(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::AddPage)).count()
    }
}

impl DocumentCanvas for RecordingCanvas {
    fn page_width(&self) -> f32 {
        self.width
    }

    fn page_height(&self) -> f32 {
        self.height
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
        self.ops.push(Op::AddPage);
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

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) -> Result<()> {
        self.ops.push(Op::Text {
            page: self.current,
            text: text.to_string(),
            x,
            y,
            size: style.size,
            bold: style.bold,
        });
        Ok(())
    }

    fn draw_grid(
        &mut self,
        header: &[String],
        rows: &[Vec<String>],
        start_y: f32,
        _style: &GridStyle,
    ) -> Result<f32> {
        self.ops.push(Op::Grid {
            page: self.current,
            header: header.to_vec(),
            rows: rows.to_vec(),
            start_y,
        });
        Ok(start_y + (1 + rows.len()) as f32 * 6.0)
    }

    fn save(&mut self, _name: &str) -> Result<()> {
        Ok(())
    }
}

fn export(text: &str, title: &str, force_breaks: bool) -> RecordingCanvas {
    let mut canvas = RecordingCanvas::new();
    let options = ExportOptions::new().with_force_page_breaks(force_breaks);
    export_to_canvas(&mut canvas, text, title, &options).unwrap();
    canvas
}

#[test]
fn test_title_is_stripped_and_bold() {
    let canvas = export("body text", "# **Fractions**", false);
    match &canvas.ops[0] {
        Op::Text {
            page,
            text,
            size,
            bold,
            ..
        } => {
            assert_eq!(*page, 0);
            assert_eq!(text, "Fractions");
            assert_eq!(*size, 16.0);
            assert!(bold);
        }
        other => panic!("expected title text op, got {other:?}"),
    }
}

#[test]
fn test_forced_break_produces_page_transition() {
    let canvas = export("page one\n[PAGE_BREAK]\npage two", "T", true);

    assert_eq!(canvas.page_count(), 2);
    assert_eq!(canvas.add_page_count(), 1);

    let texts = canvas.texts();
    // The marker contributes no visible text to either page.
    assert!(texts.iter().all(|(_, t)| !t.contains("PAGE_BREAK")));
    assert!(texts.contains(&(0, "page one".to_string())));
    assert!(texts.contains(&(1, "page two".to_string())));

    // Cursor reset: the first line after the break sits at the top margin.
    let style = PageStyle::default();
    let after_break = canvas
        .ops
        .iter()
        .find_map(|op| match op {
            Op::Text { page: 1, text, y, .. } if text == "page two" => Some(*y),
            _ => None,
        })
        .expect("page two not drawn");
    assert_eq!(after_break, style.margin_y);
}

#[test]
fn test_marker_is_verbatim_text_when_disabled() {
    let canvas = export("page one\n[PAGE_BREAK]\npage two", "T", false);

    assert_eq!(canvas.page_count(), 1);
    assert_eq!(canvas.add_page_count(), 0);
    assert!(canvas
        .texts()
        .iter()
        .any(|(_, t)| t == "[PAGE_BREAK]"));
}

#[test]
fn test_long_paragraph_spans_pages_with_consistent_footers() {
    let text: Vec<String> = (1..=60).map(|i| format!("line {i}")).collect();
    let canvas = export(&text.join("\n"), "T", false);

    assert_eq!(canvas.page_count(), 2);
    let texts = canvas.texts();
    assert!(texts.contains(&(0, "Page 1 / 2".to_string())));
    assert!(texts.contains(&(1, "Page 2 / 2".to_string())));
    // Every source line was drawn exactly once.
    for i in 1..=60 {
        let line = format!("line {i}");
        assert_eq!(texts.iter().filter(|(_, t)| *t == line).count(), 1);
    }
}

#[test]
fn test_footer_is_right_aligned() {
    let canvas = export("short", "T", false);
    let style = PageStyle::default();
    let footer = canvas
        .ops
        .iter()
        .find_map(|op| match op {
            Op::Text { text, x, size, .. } if text.starts_with("Page ") => Some((*x, *size)),
            _ => None,
        })
        .expect("no footer drawn");
    let (x, size) = footer;
    assert_eq!(size, style.footer_size);
    let width = canvas.text_width("Page 1 / 1", size);
    assert!((x + width - (style.page_width - style.margin_x)).abs() < 0.01);
}

#[test]
fn test_table_block_renders_stripped_grid() {
    let text = "\
| **Name** | Qty |
|---|---|
| `bolts` | 4 |
| nuts | 9 |
|  |  |";
    let canvas = export(text, "T", false);

    let grid = canvas
        .ops
        .iter()
        .find_map(|op| match op {
            Op::Grid { header, rows, .. } => Some((header.clone(), rows.clone())),
            _ => None,
        })
        .expect("no grid drawn");
    assert_eq!(grid.0, vec!["Name", "Qty"]);
    // The all-blank trailing row is dropped; formatting is stripped.
    assert_eq!(grid.1, vec![vec!["bolts", "4"], vec!["nuts", "9"]]);
}

#[test]
fn test_table_near_bottom_starts_on_new_page() {
    // 34 paragraph lines leave less than three line heights of room, so
    // the table's pre-emptive space check moves it to page 2.
    let mut lines: Vec<String> = (1..=34).map(|i| format!("filler {i}")).collect();
    lines.push("| A | B |".to_string());
    lines.push("|---|---|".to_string());
    lines.push("| 1 | 2 |".to_string());
    let canvas = export(&lines.join("\n"), "T", false);

    let style = PageStyle::default();
    let grid = canvas
        .ops
        .iter()
        .find_map(|op| match op {
            Op::Grid { page, start_y, .. } => Some((*page, *start_y)),
            _ => None,
        })
        .expect("no grid drawn");
    assert_eq!(grid.0, 1);
    assert_eq!(grid.1, style.margin_y);
}

#[test]
fn test_cursor_resyncs_below_grid() {
    let text = "\
| A | B |
|---|---|
| 1 | 2 |
after table";
    let canvas = export(text, "T", false);
    let style = PageStyle::default();

    let grid_start = canvas
        .ops
        .iter()
        .find_map(|op| match op {
            Op::Grid { start_y, .. } => Some(*start_y),
            _ => None,
        })
        .expect("no grid drawn");
    // Mock grid height: (1 header + 1 row) * 6.0.
    let expected = grid_start + 12.0 + style.line_height;
    let after = canvas
        .ops
        .iter()
        .find_map(|op| match op {
            Op::Text { text, y, .. } if text == "after table" => Some(*y),
            _ => None,
        })
        .expect("text after table not drawn");
    assert_eq!(after, expected);
}

#[test]
fn test_empty_input_aborts_before_drawing() {
    let mut canvas = RecordingCanvas::new();
    let result = export_to_canvas(&mut canvas, "   \n\t", "T", &ExportOptions::new());
    assert!(matches!(result, Err(Error::NoContent)));
    assert!(canvas.ops.is_empty());
}
