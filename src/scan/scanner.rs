//! Line-by-line block classification.
//!
//! A two-state scanner walks the logical lines of the source text and
//! produces an ordered sequence of [`Block`]s. Text lines accumulate into a
//! paragraph buffer; a pipe-row line whose *next* line is a valid separator
//! opens a table; once inside a table, every contiguous row-shaped line
//! belongs to it and the first line that is not row-shaped (or end of
//! input) closes it.

use crate::model::{Block, TableBlock};
use crate::scan::tags::is_page_break_marker;

/// Check whether a line has the generic table-row shape: after trimming it
/// is bracketed by pipe delimiters.
pub fn is_table_row(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() > 1 && trimmed.starts_with('|') && trimmed.ends_with('|')
}

/// Check whether a line is a valid table separator row: a row-shaped line
/// whose every cell is an optional leading colon, at least three dashes,
/// and an optional trailing colon.
pub fn is_separator_row(line: &str) -> bool {
    if !is_table_row(line) {
        return false;
    }
    let cells = parse_row(line);
    !cells.is_empty()
        && cells.iter().all(|cell| {
            let core = cell.strip_prefix(':').unwrap_or(cell);
            let core = core.strip_suffix(':').unwrap_or(core);
            core.len() >= 3 && core.chars().all(|c| c == '-')
        })
}

/// Split a row line into trimmed cells: trim the line, drop a single
/// leading and a single trailing pipe if present, split on pipes.
pub fn parse_row(line: &str) -> Vec<String> {
    let mut trimmed = line.trim();
    trimmed = trimmed.strip_prefix('|').unwrap_or(trimmed);
    trimmed = trimmed.strip_suffix('|').unwrap_or(trimmed);
    trimmed.split('|').map(|cell| cell.trim().to_string()).collect()
}

/// Scanner state: plain text accumulation or an open table.
enum ScanState {
    Text,
    Table(TableBlock),
}

/// Classifies source lines into ordered paragraph / table / forced-break
/// blocks.
#[derive(Debug, Clone)]
pub struct BlockScanner {
    force_page_breaks: bool,
}

impl BlockScanner {
    /// Create a scanner that treats `[PAGE_BREAK]` marker lines as ordinary
    /// text.
    pub fn new() -> Self {
        Self {
            force_page_breaks: false,
        }
    }

    /// Enable or disable forced page breaks.
    ///
    /// When enabled, a line that is exactly the bare `[PAGE_BREAK]` marker
    /// emits a [`Block::ForcedBreak`] instead of joining the paragraph
    /// buffer. When disabled the marker line flows through as ordinary
    /// text, verbatim. Only the student-facing flow enables this.
    pub fn with_forced_breaks(mut self, enabled: bool) -> Self {
        self.force_page_breaks = enabled;
        self
    }

    /// Scan `text` into an ordered sequence of blocks.
    pub fn scan(&self, text: &str) -> Vec<Block> {
        let lines: Vec<&str> = text.lines().collect();
        let mut blocks = Vec::new();
        let mut paragraph: Vec<String> = Vec::new();
        let mut state = ScanState::Text;
        let mut i = 0;

        while i < lines.len() {
            let line = lines[i];
            state = match state {
                ScanState::Text => {
                    let next_is_separator =
                        lines.get(i + 1).is_some_and(|next| is_separator_row(next));
                    if is_table_row(line) && next_is_separator {
                        log::debug!("scanner: table header at line {i}");
                        Self::flush_paragraph(&mut paragraph, &mut blocks);
                        i += 2; // consume header + separator
                        ScanState::Table(TableBlock::new(parse_row(line)))
                    } else if self.force_page_breaks && is_page_break_marker(line) {
                        log::debug!("scanner: forced page break at line {i}");
                        Self::flush_paragraph(&mut paragraph, &mut blocks);
                        blocks.push(Block::ForcedBreak);
                        i += 1;
                        ScanState::Text
                    } else {
                        paragraph.push(line.to_string());
                        i += 1;
                        ScanState::Text
                    }
                }
                ScanState::Table(mut table) => {
                    if is_table_row(line) {
                        table.add_row(parse_row(line));
                        i += 1;
                        ScanState::Table(table)
                    } else {
                        // First non-row line closes the table; re-process it
                        // as text.
                        log::debug!(
                            "scanner: table closed at line {i} ({} rows)",
                            table.row_count()
                        );
                        blocks.push(Block::Table(table));
                        ScanState::Text
                    }
                }
            };
        }

        match state {
            ScanState::Table(table) => blocks.push(Block::Table(table)),
            ScanState::Text => {}
        }
        Self::flush_paragraph(&mut paragraph, &mut blocks);

        blocks
    }

    fn flush_paragraph(paragraph: &mut Vec<String>, blocks: &mut Vec<Block>) {
        if !paragraph.is_empty() {
            blocks.push(Block::paragraph(std::mem::take(paragraph)));
        }
    }
}

impl Default for BlockScanner {
    fn default() -> Self {
        Self::new()
    }
}
