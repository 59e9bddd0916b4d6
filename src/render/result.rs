//! Formatting result with statistics.

use serde::{Deserialize, Serialize};

use super::Platform;
use crate::model::Category;

/// Result of formatting a text, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatResult {
    /// The formatted content
    pub content: String,

    /// Platform the content was formatted for
    pub platform: Platform,

    /// Formatting statistics
    pub stats: FormatStats,
}

impl FormatResult {
    /// Create a new format result.
    pub fn new(content: String, platform: Platform, stats: FormatStats) -> Self {
        Self {
            content,
            platform,
            stats,
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected while formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatStats {
    /// Paragraph blocks, including empty ones
    pub paragraph_count: u32,

    /// Non-empty lines rendered
    pub line_count: u32,

    /// Lines rendered as headings
    pub heading_count: u32,

    /// Lines rendered as numbered-list items
    pub numbered_item_count: u32,

    /// Lines rendered as bullets
    pub bullet_count: u32,

    /// Lines carrying links
    pub link_line_count: u32,

    /// Plain prose lines
    pub plain_count: u32,

    /// Paragraph boundaries where the list counter was carried over
    pub counter_carry_overs: u32,

    /// Em-dashes replaced with hyphens
    pub dashes_replaced: u32,
}

impl FormatStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Count a rendered line of the given category.
    pub fn add_line(&mut self, category: Category) {
        self.line_count += 1;
        let counter = match category {
            Category::Heading => &mut self.heading_count,
            Category::NumberedListItem => &mut self.numbered_item_count,
            Category::BulletItem => &mut self.bullet_count,
            Category::LinkLine => &mut self.link_line_count,
            Category::Plain => &mut self.plain_count,
        };
        *counter += 1;
    }

    /// Increment carry-over count.
    pub fn add_carry_over(&mut self) {
        self.counter_carry_overs += 1;
    }

    /// Add replaced em-dashes.
    pub fn add_dashes(&mut self, count: usize) {
        self.dashes_replaced += count as u32;
    }

    /// Get the count for a single category.
    pub fn count(&self, category: Category) -> u32 {
        match category {
            Category::Heading => self.heading_count,
            Category::NumberedListItem => self.numbered_item_count,
            Category::BulletItem => self.bullet_count,
            Category::LinkLine => self.link_line_count,
            Category::Plain => self.plain_count,
        }
    }
}
