//! Raw input document.

use serde::{Deserialize, Serialize};

/// The unprocessed export input: source text plus display title and the
/// output file name the artifact is saved under. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDocument {
    /// Full source text, possibly containing audience tags.
    pub text: String,

    /// Display title, drawn at the top of the first page.
    pub title: String,

    /// File name for the persisted artifact.
    pub output_name: String,
}

impl RawDocument {
    /// Create a new raw document.
    pub fn new(
        text: impl Into<String>,
        title: impl Into<String>,
        output_name: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            title: title.into(),
            output_name: output_name.into(),
        }
    }

    /// Check whether there is any non-whitespace source text.
    pub fn has_content(&self) -> bool {
        !self.text.trim().is_empty()
    }
}
