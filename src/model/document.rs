//! Document-level types.

use serde::{Deserialize, Serialize};

use super::{Category, Paragraph};

/// Separator between paragraphs in raw and rendered text.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Input text split into classified paragraphs.
///
/// Paragraph boundaries are the exact `"\n\n"` separator. Blocks without
/// any non-blank line are kept as empty paragraphs so that the paragraph
/// layout of the input survives rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Paragraphs in input order
    pub paragraphs: Vec<Paragraph>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Split raw text into paragraphs of classified lines.
    ///
    /// # Example
    ///
    /// ```
    /// use postfmt::{Category, Document};
    ///
    /// let doc = Document::parse("TITLE\n\n- first\n- second");
    /// assert_eq!(doc.paragraph_count(), 2);
    /// assert_eq!(doc.paragraphs[0].lines[0].category, Category::Heading);
    /// assert_eq!(doc.count(Category::BulletItem), 2);
    /// ```
    pub fn parse(text: &str) -> Self {
        let paragraphs = text.split(PARAGRAPH_SEPARATOR).map(Paragraph::parse).collect();
        Self { paragraphs }
    }

    /// Add a paragraph to the document.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Get the number of paragraphs, including empty ones.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Get the number of non-empty lines across all paragraphs.
    pub fn line_count(&self) -> usize {
        self.paragraphs.iter().map(|p| p.lines.len()).sum()
    }

    /// Count lines of a given category across all paragraphs.
    pub fn count(&self, category: Category) -> usize {
        self.paragraphs.iter().map(|p| p.count(category)).sum()
    }

    /// Check if the document has no lines at all.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.iter().all(Paragraph::is_empty)
    }
}
