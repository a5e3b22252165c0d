//! Document model types for the export pipeline.
//!
//! This module defines the intermediate representation that bridges block
//! scanning and page layout: the raw input document and the ordered blocks
//! the scanner classifies it into.

mod block;
mod document;

pub use block::{Block, TableBlock};
pub use document::RawDocument;
