//! Block types produced by the scanner.

use serde::{Deserialize, Serialize};

/// A maximal contiguous unit of one content kind, identified by the block
/// scanner. Blocks are consumed once, in order, and never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A run of plain text lines (blank lines included).
    Paragraph {
        /// Raw source lines, in order.
        lines: Vec<String>,
    },

    /// A markdown pipe table.
    Table(TableBlock),

    /// An explicit page-break marker line.
    ForcedBreak,
}

impl Block {
    /// Create a paragraph block from raw lines.
    pub fn paragraph<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Block::Paragraph {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

/// A parsed pipe table: one header row plus zero or more body rows.
///
/// Columns are not width-validated; ragged rows (differing cell counts) are
/// kept as-is and handed to the grid renderer unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableBlock {
    /// Header cells, in column order.
    pub header: Vec<String>,

    /// Body rows, each an ordered sequence of cells.
    pub rows: Vec<Vec<String>>,
}

impl TableBlock {
    /// Create a table with the given header and no body rows.
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    /// Append a body row.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Number of body rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Widest cell count across header and body rows.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.len())
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or(0)
    }

    /// Check whether the table has neither header cells nor body rows.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.rows.is_empty()
    }
}
