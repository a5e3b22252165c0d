//! Export orchestration: audience selection, block feeding, finishing.

use unicode_normalization::UnicodeNormalization;

use crate::canvas::{DocumentCanvas, PdfCanvas, TextStyle};
use crate::error::{Error, Result};
use crate::layout::{flow_paragraph, flow_table, PageStyle, Paginator};
use crate::model::{Block, RawDocument};
use crate::scan::{
    extract_section, remove_section, BlockScanner, MarkdownStripper, STUDENT_PAGES, TEACHER_PAGES,
};

/// The audience a view is produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    /// Student-facing pages (hard page breaks honored).
    Student,
    /// Teacher-facing pages (answer keys, rubrics).
    Teacher,
}

impl Audience {
    /// Select the source text for this audience from the full text.
    ///
    /// Student: the `[STUDENT_PAGES]` section, falling back to the full
    /// text. Teacher: the `[TEACHER_PAGES]` section, falling back to the
    /// full text with any student section removed. Returns `None` when the
    /// selection is empty.
    pub fn select_source(&self, full: &str) -> Option<String> {
        let text = match self {
            Audience::Student => extract_section(full, STUDENT_PAGES)
                .unwrap_or_else(|| full.trim().to_string()),
            Audience::Teacher => extract_section(full, TEACHER_PAGES)
                .unwrap_or_else(|| remove_section(full, STUDENT_PAGES).trim().to_string()),
        };
        (!text.is_empty()).then_some(text)
    }

    /// Whether this audience's flow honors `[PAGE_BREAK]` markers.
    pub fn forces_page_breaks(&self) -> bool {
        matches!(self, Audience::Student)
    }

    /// Suffix used when deriving per-audience file names.
    pub fn file_suffix(&self) -> &'static str {
        match self {
            Audience::Student => "student",
            Audience::Teacher => "teacher",
        }
    }
}

/// Options for one export invocation.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Honor bare `[PAGE_BREAK]` marker lines as hard page breaks. When
    /// disabled the marker text flows into the output verbatim; only the
    /// student-facing flow enables this.
    pub force_page_breaks: bool,

    /// Page geometry and typography.
    pub style: PageStyle,
}

impl ExportOptions {
    /// Create options with defaults (markers treated as ordinary text).
    pub fn new() -> Self {
        Self::default()
    }

    /// Options matching the given audience's page-break policy.
    pub fn for_audience(audience: Audience) -> Self {
        Self::new().with_force_page_breaks(audience.forces_page_breaks())
    }

    /// Enable or disable hard page breaks.
    pub fn with_force_page_breaks(mut self, force: bool) -> Self {
        self.force_page_breaks = force;
        self
    }

    /// Override the page style.
    pub fn with_style(mut self, style: PageStyle) -> Self {
        self.style = style;
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            force_page_breaks: false,
            style: PageStyle::default(),
        }
    }
}

/// Lay out `raw_text` onto `canvas` without persisting it.
///
/// Draws the stripped title bold at the top of page 1, scans the text into
/// blocks, feeds them in order to the flow engines, and runs the footer
/// pass. The caller decides what to do with the canvas afterwards. Errors
/// with [`Error::NoContent`] before any drawing when the text is blank.
pub fn export_to_canvas<C: DocumentCanvas + ?Sized>(
    canvas: &mut C,
    raw_text: &str,
    title: &str,
    options: &ExportOptions,
) -> Result<()> {
    if raw_text.trim().is_empty() {
        return Err(Error::NoContent);
    }
    let text: String = raw_text.nfc().collect();
    let stripper = MarkdownStripper::new();
    let blocks = BlockScanner::new()
        .with_forced_breaks(options.force_page_breaks)
        .scan(&text);
    log::debug!("export: {} blocks", blocks.len());

    let style = options.style.clone();
    let mut pager = Paginator::new(canvas, &style);

    let title_text = stripper.strip(title);
    let y = pager.y();
    pager
        .canvas()
        .draw_text(&title_text, style.margin_x, y, &TextStyle::bold(style.title_size))?;
    pager.advance(1.5 * style.line_height);

    for block in &blocks {
        match block {
            Block::Paragraph { lines } => flow_paragraph(&mut pager, &stripper, lines)?,
            Block::Table(table) => flow_table(&mut pager, &stripper, table)?,
            Block::ForcedBreak => pager.force_page_break()?,
        }
    }

    let pages = pager.finish()?;
    log::debug!("export: finished with {pages} pages");
    Ok(())
}

/// Export `raw_text` as a paginated PDF saved under `output_name`.
///
/// Synchronous and side-effecting: the only external effect is the final
/// artifact write. State is local to the invocation, so concurrent exports
/// are fully independent.
pub fn export_document(
    raw_text: &str,
    title: &str,
    output_name: &str,
    options: &ExportOptions,
) -> Result<()> {
    let mut canvas = PdfCanvas::new(title, options.style.page_width, options.style.page_height)?;
    export_to_canvas(&mut canvas, raw_text, title, options)?;
    canvas.save(output_name)
}

/// Export a [`RawDocument`] under its embedded title and output name.
pub fn export_raw(doc: &RawDocument, options: &ExportOptions) -> Result<()> {
    if !doc.has_content() {
        return Err(Error::NoContent);
    }
    export_document(&doc.text, &doc.title, &doc.output_name, options)
}

/// Export both audience views of `full_text`.
///
/// Produces `<base>_student.pdf` and `<base>_teacher.pdf`, applying the
/// per-audience selection policy and page-break handling. Both selections
/// are validated up front, so an empty view errors with
/// [`Error::NoContent`] before either artifact is written.
pub fn export_views(full_text: &str, title: &str, base_name: &str, style: &PageStyle) -> Result<()> {
    let mut views = Vec::with_capacity(2);
    for audience in [Audience::Student, Audience::Teacher] {
        let source = audience.select_source(full_text).ok_or(Error::NoContent)?;
        views.push((audience, source));
    }
    for (audience, source) in views {
        let options = ExportOptions::for_audience(audience).with_style(style.clone());
        let doc = RawDocument::new(
            source,
            title,
            format!("{}_{}.pdf", base_name, audience.file_suffix()),
        );
        export_raw(&doc, &options)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_selection_prefers_section() {
        let text = "intro [STUDENT_PAGES]work[/STUDENT_PAGES] outro";
        assert_eq!(
            Audience::Student.select_source(text).as_deref(),
            Some("work")
        );
    }

    #[test]
    fn test_student_selection_falls_back_to_full() {
        let text = "no tags here";
        assert_eq!(
            Audience::Student.select_source(text).as_deref(),
            Some("no tags here")
        );
    }

    #[test]
    fn test_teacher_selection_prefers_section() {
        let text = "[TEACHER_PAGES]key[/TEACHER_PAGES] [STUDENT_PAGES]work[/STUDENT_PAGES]";
        assert_eq!(Audience::Teacher.select_source(text).as_deref(), Some("key"));
    }

    #[test]
    fn test_teacher_selection_removes_student_block() {
        let text = "shared notes [STUDENT_PAGES]work[/STUDENT_PAGES]";
        assert_eq!(
            Audience::Teacher.select_source(text).as_deref(),
            Some("shared notes")
        );
    }

    #[test]
    fn test_selection_empty_is_none() {
        assert_eq!(Audience::Teacher.select_source("   "), None);
        // Everything lives in the student block: nothing left for the
        // teacher fallback.
        let text = "[STUDENT_PAGES]work[/STUDENT_PAGES]";
        assert_eq!(Audience::Teacher.select_source(text), None);
    }

    #[test]
    fn test_options_for_audience() {
        assert!(ExportOptions::for_audience(Audience::Student).force_page_breaks);
        assert!(!ExportOptions::for_audience(Audience::Teacher).force_page_breaks);
    }
}
