//! Source text scanning: formatting removal, tag extraction, and block
//! classification.

mod scanner;
mod strip;
mod tags;

pub use scanner::{is_separator_row, is_table_row, parse_row, BlockScanner};
pub use strip::{strip_markdown, MarkdownStripper};
pub use tags::{
    extract_section, is_page_break_marker, remove_section, strip_known_tags, PAGE_BREAK,
    STUDENT_PAGES, TEACHER_PAGES,
};
