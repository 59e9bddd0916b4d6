//! Paragraph reformatting for a target platform.

use std::borrow::Cow;

use crate::classify::{is_numbered_marker, BULLET};
use crate::model::{Category, Document, Line, Paragraph, LINE_SEPARATOR, PARAGRAPH_SEPARATOR};

use super::cleanup::{normalize_dashes, normalize_unicode, EM_DASH};
use super::{FormatOptions, FormatResult, FormatStats, NumberingMode, Platform, PlatformPolicy};

/// Format text for a platform with default options.
pub fn format(text: &str, platform: Platform) -> String {
    Formatter::new(FormatOptions::for_platform(platform)).format(text)
}

/// Format text with custom options.
pub fn format_with_options(text: &str, options: &FormatOptions) -> String {
    Formatter::new(options.clone()).format(text)
}

/// Format text with custom options and collect statistics.
pub fn format_with_stats(text: &str, options: &FormatOptions) -> FormatResult {
    Formatter::new(options.clone()).format_with_stats(text)
}

/// Counter for numbered-list items.
///
/// Owned by a single format call; never shared between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCounter {
    value: usize,
}

impl ListCounter {
    /// Create a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current value.
    pub fn value(&self) -> usize {
        self.value
    }

    /// Increment and return the new value.
    pub fn next_number(&mut self) -> usize {
        self.value += 1;
        self.value
    }

    /// Reset to zero.
    pub fn reset(&mut self) {
        self.value = 0;
    }
}

/// Reformats text paragraph by paragraph through a platform policy.
pub struct Formatter {
    options: FormatOptions,
    policy: &'static dyn PlatformPolicy,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(options: FormatOptions) -> Self {
        let policy = options.platform.policy();
        Self { options, policy }
    }

    /// Get the options this formatter was built with.
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Format a text.
    pub fn format(&self, text: &str) -> String {
        let mut stats = FormatStats::new();
        self.render_document(&self.parse(text), &mut stats)
    }

    /// Format a text and collect statistics.
    pub fn format_with_stats(&self, text: &str) -> FormatResult {
        let mut stats = FormatStats::new();
        let content = self.render_document(&self.parse(text), &mut stats);
        FormatResult::new(content, self.options.platform, stats)
    }

    /// Split and classify a text without rendering it.
    pub fn parse(&self, text: &str) -> Document {
        let text = if self.options.normalize_unicode {
            normalize_unicode(text)
        } else {
            Cow::Borrowed(text)
        };
        Document::parse(&text)
    }

    /// Render an already classified document.
    pub fn render_document(&self, doc: &Document, stats: &mut FormatStats) -> String {
        let mut counter = ListCounter::new();
        let mut rendered = Vec::with_capacity(doc.paragraphs.len());

        for (index, paragraph) in doc.paragraphs.iter().enumerate() {
            if self.options.numbering == NumberingMode::PerParagraph {
                counter.reset();
            }

            let lines = self.render_paragraph(paragraph, &mut counter, stats);

            if !lines.is_empty() {
                if lines.iter().any(|l| is_numbered_marker(l)) {
                    let has_next = index + 1 < doc.paragraphs.len();
                    if has_next && counter.value() > 0 {
                        log::debug!(
                            "paragraph {}: list counter carried over at {}",
                            index,
                            counter.value()
                        );
                        stats.add_carry_over();
                    }
                } else {
                    counter.reset();
                }
            }

            stats.add_paragraph();
            rendered.push(lines.join(LINE_SEPARATOR));
        }

        rendered.join(PARAGRAPH_SEPARATOR)
    }

    fn render_paragraph(
        &self,
        paragraph: &Paragraph,
        counter: &mut ListCounter,
        stats: &mut FormatStats,
    ) -> Vec<String> {
        paragraph
            .lines
            .iter()
            .map(|line| {
                stats.add_line(line.category);
                self.render_line(line, counter, stats)
            })
            .collect()
    }

    fn render_line(
        &self,
        line: &Line,
        counter: &mut ListCounter,
        stats: &mut FormatStats,
    ) -> String {
        let text = line.text.as_str();
        let rendered = match line.category {
            Category::Heading => self.policy.render_heading(text),
            Category::NumberedListItem => {
                let number = counter.next_number();
                self.policy.render_list_item(number, &list_item_remainder(text))
            }
            Category::BulletItem => self.policy.render_bullet(bullet_content(text)),
            Category::LinkLine => self.policy.render_link_line(text),
            Category::Plain => self.policy.render_plain(text),
        };

        stats.add_dashes(rendered.matches(EM_DASH).count());
        normalize_dashes(&rendered).into_owned()
    }
}

/// Text after the first `.`-delimited token, trimmed.
fn list_item_remainder(line: &str) -> String {
    line.split('.')
        .skip(1)
        .collect::<Vec<_>>()
        .join(".")
        .trim()
        .to_string()
}

/// Bullet content with the leading glyph run, then hyphen run, removed.
fn bullet_content(line: &str) -> &str {
    line.trim_start_matches(BULLET).trim_start_matches('-').trim()
}
