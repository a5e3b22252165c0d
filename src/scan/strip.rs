//! Inline markdown formatting removal.
//!
//! The drawing surface renders plain glyphs only, so everything destined for
//! it (paragraph text, table headers, table cells, the title) passes through
//! this stripper first.

use regex::Regex;

/// Removes inline markdown syntax, leaving the enclosed text.
///
/// Markers are removed in a fixed order, independent of line position
/// within the input: heading markers, list markers, bold, italic, inline
/// code. The pass repeats until the text stops changing, so stripped
/// output is a fixed point: nested markers (`# # Title`, `- - item`, bold
/// around a heading) strip fully on the first call and stripping
/// already-stripped text is a no-op.
pub struct MarkdownStripper {
    heading: Regex,
    bullet: Regex,
    ordered: Regex,
    bold: Regex,
    italic: Regex,
    code: Regex,
}

impl MarkdownStripper {
    /// Create a stripper with its patterns pre-compiled.
    pub fn new() -> Self {
        Self {
            heading: Regex::new(r"(?m)^#{1,6}\s+").unwrap(),
            bullet: Regex::new(r"(?m)^[-*+]\s+").unwrap(),
            ordered: Regex::new(r"(?m)^\d+\.\s+").unwrap(),
            bold: Regex::new(r"\*\*(.+?)\*\*").unwrap(),
            italic: Regex::new(r"\*([^*]+)\*").unwrap(),
            code: Regex::new(r"`([^`]*)`").unwrap(),
        }
    }

    /// Strip all recognized inline formatting from `text`.
    pub fn strip(&self, text: &str) -> String {
        // A single pass can expose a fresh marker at line start ("# # Title"
        // loses one hash per pass; "**# Heading**" reveals a heading marker
        // only after the bold pass). Every replacement shortens the text, so
        // repeating until it settles terminates and makes the output a fixed
        // point of strip().
        let mut text = text.to_string();
        loop {
            let next = self.strip_once(&text);
            if next == text {
                return text;
            }
            text = next;
        }
    }

    fn strip_once(&self, text: &str) -> String {
        let text = self.heading.replace_all(text, "");
        let text = self.bullet.replace_all(&text, "");
        let text = self.ordered.replace_all(&text, "");
        let text = self.bold.replace_all(&text, "$1");
        let text = self.italic.replace_all(&text, "$1");
        let text = self.code.replace_all(&text, "$1");
        text.into_owned()
    }

    /// Strip every cell of a row in place, returning the stripped row.
    pub fn strip_row(&self, row: &[String]) -> Vec<String> {
        row.iter().map(|cell| self.strip(cell)).collect()
    }
}

impl Default for MarkdownStripper {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot convenience wrapper around [`MarkdownStripper`].
pub fn strip_markdown(text: &str) -> String {
    MarkdownStripper::new().strip(text)
}
