//! # markpage
//!
//! Paginated PDF export for lightly-tagged Markdown worksheets.
//!
//! markpage turns free-form, lightly-tagged markdown (the kind an assistant
//! produces for classroom material) into fixed-size, printable PDF pages,
//! split into audience-specific views: `[STUDENT_PAGES]…[/STUDENT_PAGES]`
//! for handouts and `[TEACHER_PAGES]…[/TEACHER_PAGES]` for answer keys,
//! with bare `[PAGE_BREAK]` marker lines forcing hard breaks in the
//! student flow.
//!
//! ## Quick Start
//!
//! ```no_run
//! use markpage::{export_document, Audience, ExportOptions};
//!
//! fn main() -> markpage::Result<()> {
//!     let text = std::fs::read_to_string("worksheet.md")?;
//!
//!     let audience = Audience::Student;
//!     let source = audience.select_source(&text).ok_or(markpage::Error::NoContent)?;
//!     let options = ExportOptions::for_audience(audience);
//!     export_document(&source, "Fraction Worksheet", "worksheet_student.pdf", &options)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Scan**: classify source lines into paragraph, table, and
//!   forced-break blocks ([`scan::BlockScanner`])
//! - **Strip**: remove inline markdown syntax before drawing
//!   ([`scan::MarkdownStripper`])
//! - **Flow**: wrap paragraphs and render tables across pages, sharing one
//!   pagination cursor ([`layout`])
//! - **Finish**: stamp `Page i / N` footers once the total is known
//! - **Persist**: write the PDF through the [`canvas::DocumentCanvas`]
//!   seam ([`canvas::PdfCanvas`])
//!
//! The whole pipeline is synchronous and keeps all state local to one
//! invocation; concurrent exports never interfere.

pub mod canvas;
pub mod error;
pub mod export;
pub mod layout;
pub mod model;
pub mod scan;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types
pub use canvas::{DocumentCanvas, GridStyle, PdfCanvas, TextStyle};
pub use error::{Error, Result};
pub use export::{
    export_document, export_raw, export_to_canvas, export_views, Audience, ExportOptions,
};
pub use layout::{PageStyle, Paginator};
pub use model::{Block, RawDocument, TableBlock};
pub use scan::{extract_section, strip_known_tags, strip_markdown, BlockScanner, MarkdownStripper};
