//! Paragraph flow engine.

use crate::canvas::{DocumentCanvas, TextStyle};
use crate::error::Result;
use crate::layout::Paginator;
use crate::scan::MarkdownStripper;

/// Lay out one paragraph block: strip formatting, wrap to the content
/// width, and draw line by line. Pagination granularity is per visual line,
/// so a paragraph may span any number of pages.
pub fn flow_paragraph<C: DocumentCanvas + ?Sized>(
    pager: &mut Paginator<'_, C>,
    stripper: &MarkdownStripper,
    lines: &[String],
) -> Result<()> {
    let text = stripper.strip(&lines.join("\n"));
    let style = pager.style().clone();
    let body = TextStyle::regular(style.body_size);
    let visual = pager
        .canvas()
        .wrap(&text, style.content_width(), style.body_size);

    log::debug!("paragraph: {} visual lines", visual.len());
    for line in visual {
        pager.ensure_space(style.line_height)?;
        let y = pager.y();
        pager.canvas().draw_text(&line, style.margin_x, y, &body)?;
        pager.advance(style.line_height);
    }
    pager.advance(style.paragraph_gap);
    Ok(())
}
