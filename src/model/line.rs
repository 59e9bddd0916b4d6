//! Line-level types.

use serde::{Deserialize, Serialize};

use crate::classify::classify;

/// The category a single line is assigned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// All-caps line or short capitalized phrase
    Heading,
    /// Bare numbered-list marker such as `"1."`
    NumberedListItem,
    /// Line starting with `•` or `-`
    BulletItem,
    /// Line containing `http` or `t.me`
    LinkLine,
    /// Anything else
    Plain,
}

impl Category {
    /// Get the snake_case name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Heading => "heading",
            Category::NumberedListItem => "numbered_list_item",
            Category::BulletItem => "bullet_item",
            Category::LinkLine => "link_line",
            Category::Plain => "plain",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trimmed line of input text with its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Trimmed line text
    pub text: String,

    /// Category derived from the text
    pub category: Category,
}

impl Line {
    /// Create a line, trimming and classifying the text.
    pub fn new(text: impl AsRef<str>) -> Self {
        let text = text.as_ref().trim().to_string();
        let category = classify(&text);
        Self { text, category }
    }

    /// Check if the line has no content.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if this line is a heading.
    pub fn is_heading(&self) -> bool {
        self.category == Category::Heading
    }

    /// Check if this line is a numbered-list marker.
    pub fn is_numbered(&self) -> bool {
        self.category == Category::NumberedListItem
    }
}
