//! Error types for the markpage library.

use std::io;
use thiserror::Error;

/// Result type alias for markpage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while exporting a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading source text or writing the artifact.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// There is no eligible text to export (empty input, or the selected
    /// audience section is empty after tag extraction).
    #[error("No content to export")]
    NoContent,

    /// A page index outside the produced page range was requested.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(usize, usize),

    /// Failure raised by the drawing/encoding surface. Aborts the current
    /// invocation only; no state is shared across invocations.
    #[error("Canvas error: {0}")]
    Canvas(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<printpdf::Error> for Error {
    fn from(err: printpdf::Error) -> Self {
        Error::Canvas(err.to_string())
    }
}
