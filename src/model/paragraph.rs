//! Paragraph type.

use serde::{Deserialize, Serialize};

use super::{Category, Line};

/// Separator between lines inside a paragraph.
pub const LINE_SEPARATOR: &str = "\n";

/// A block of lines bounded by blank-line separators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Non-empty lines in input order
    pub lines: Vec<Line>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a paragraph block into classified lines.
    ///
    /// Lines are trimmed; lines left empty are dropped.
    pub fn parse(block: &str) -> Self {
        let lines = block
            .split(LINE_SEPARATOR)
            .map(Line::new)
            .filter(|line| !line.is_empty())
            .collect();
        Self { lines }
    }

    /// Add a line to the paragraph.
    pub fn add_line(&mut self, line: Line) {
        if !line.is_empty() {
            self.lines.push(line);
        }
    }

    /// Check if the paragraph has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Count lines of a given category.
    pub fn count(&self, category: Category) -> usize {
        self.lines.iter().filter(|l| l.category == category).count()
    }

    /// Check if the paragraph holds at least one numbered-list marker.
    pub fn has_numbered_items(&self) -> bool {
        self.lines.iter().any(Line::is_numbered)
    }

    /// Get the trimmed source text of the paragraph.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join(LINE_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_drops_blank_lines() {
        let para = Paragraph::parse("  first  \n\n   \nsecond");
        assert_eq!(para.lines.len(), 2);
        assert_eq!(para.plain_text(), "first\nsecond");
    }

    #[test]
    fn test_empty_block() {
        assert!(Paragraph::parse("").is_empty());
        assert!(Paragraph::parse(" \n\t").is_empty());
    }

    #[test]
    fn test_counts() {
        let para = Paragraph::parse("1.\n2.\n- bullet\nplain text here and more words");
        assert_eq!(para.count(Category::NumberedListItem), 2);
        assert_eq!(para.count(Category::BulletItem), 1);
        assert!(para.has_numbered_items());
    }

    #[test]
    fn test_add_line_skips_empty() {
        let mut para = Paragraph::new();
        para.add_line(Line::new("   "));
        para.add_line(Line::new("kept"));
        assert_eq!(para.lines.len(), 1);
    }
}
