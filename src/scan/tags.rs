//! Bracket-delimited audience tags.
//!
//! The source text may contain `[STUDENT_PAGES]…[/STUDENT_PAGES]` and
//! `[TEACHER_PAGES]…[/TEACHER_PAGES]` sections plus bare `[PAGE_BREAK]`
//! marker lines. Tag names match case-insensitively and whitespace inside
//! the brackets is tolerated.

use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

/// Tag delimiting the student-facing section.
pub const STUDENT_PAGES: &str = "STUDENT_PAGES";

/// Tag delimiting the teacher-facing section.
pub const TEACHER_PAGES: &str = "TEACHER_PAGES";

/// Bare marker forcing a page break in the student flow.
pub const PAGE_BREAK: &str = "PAGE_BREAK";

fn section_regex(tag: &str) -> Regex {
    let pattern = format!(
        r"\[\s*{tag}\s*\](.*?)\[\s*/\s*{tag}\s*\]",
        tag = regex::escape(tag)
    );
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
        .unwrap()
}

/// Extract the first `[tag]…[/tag]` section from `full`.
///
/// Matching is case-insensitive and non-greedy; only the first occurrence
/// of a given tag is recognized. Returns the trimmed interior, or `None`
/// when no matching pair exists.
pub fn extract_section(full: &str, tag: &str) -> Option<String> {
    section_regex(tag)
        .captures(full)
        .map(|caps| caps[1].trim().to_string())
}

/// Remove every `[tag]…[/tag]` block (markers and interior) from `full`.
pub fn remove_section(full: &str, tag: &str) -> String {
    section_regex(tag).replace_all(full, "").into_owned()
}

/// Remove all open/close markers of the three recognized tags, keeping
/// their interior content. Used when showing the raw text on screen.
pub fn strip_known_tags(text: &str) -> String {
    let pattern = format!(
        r"\[\s*/?\s*(?:{}|{}|{})\s*\]",
        regex::escape(STUDENT_PAGES),
        regex::escape(TEACHER_PAGES),
        regex::escape(PAGE_BREAK)
    );
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .unwrap();
    re.replace_all(text, "").into_owned()
}

/// Check whether a line is exactly a bare `[PAGE_BREAK]` marker.
///
/// Runs once per scanned line, so the pattern is compiled lazily and
/// cached.
pub fn is_page_break_marker(line: &str) -> bool {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    let re = MARKER.get_or_init(|| {
        RegexBuilder::new(r"^\[\s*PAGE_BREAK\s*\]$")
            .case_insensitive(true)
            .build()
            .unwrap()
    });
    re.is_match(line.trim())
}
