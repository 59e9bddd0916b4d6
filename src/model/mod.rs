//! Document model types for classified text.
//!
//! This module defines the intermediate representation between raw input
//! text and platform rendering: a document is a sequence of paragraphs,
//! each a sequence of trimmed, classified lines.

mod document;
mod line;
mod paragraph;

pub use document::{Document, PARAGRAPH_SEPARATOR};
pub use line::{Category, Line};
pub use paragraph::{Paragraph, LINE_SEPARATOR};
