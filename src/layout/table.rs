//! Table flow engine.

use crate::canvas::DocumentCanvas;
use crate::error::Result;
use crate::layout::Paginator;
use crate::model::TableBlock;
use crate::scan::MarkdownStripper;

/// Minimum line-heights a table needs before drawing starts. Exact table
/// height is unknown until the grid renderer runs, so this is a heuristic
/// pre-check only.
const MIN_TABLE_LINES: f32 = 3.0;

/// Lay out one table block: strip formatting from header and cells, drop
/// rows that are entirely empty after stripping, and delegate drawing to
/// the canvas grid renderer. The renderer paginates internally on
/// overflow; afterwards the cursor is re-anchored to the position it
/// reports, plus one line height of trailing gap.
pub fn flow_table<C: DocumentCanvas + ?Sized>(
    pager: &mut Paginator<'_, C>,
    stripper: &MarkdownStripper,
    table: &TableBlock,
) -> Result<()> {
    if table.is_empty() {
        return Ok(());
    }
    let header = stripper.strip_row(&table.header);
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| stripper.strip_row(row))
        .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()))
        .collect();

    log::debug!(
        "table: {} columns, {} rows after blank-row filtering",
        table.column_count(),
        rows.len()
    );

    let style = pager.style().clone();
    pager.ensure_space(MIN_TABLE_LINES * style.line_height)?;
    let start_y = pager.y();
    let final_y = pager
        .canvas()
        .draw_grid(&header, &rows, start_y, &style.grid_style())?;
    pager.resync(final_y + style.line_height);
    Ok(())
}
