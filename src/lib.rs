//! # postfmt
//!
//! Reformat freeform text into Telegram and LinkedIn post layouts.
//!
//! Every line of the input is classified by a fixed set of lexical
//! heuristics (heading, numbered-list marker, bullet, link line, plain
//! prose) and then rendered through a platform policy. Paragraphs are
//! separated by blank lines and keep their order.
//!
//! ## Quick Start
//!
//! ```
//! use postfmt::{format, Platform};
//!
//! let text = "TITLE\n\n- first point\n- second point";
//!
//! assert_eq!(
//!     format(text, Platform::Telegram),
//!     "**TITLE**\n\n• first point\n• second point"
//! );
//! assert_eq!(
//!     format(text, Platform::LinkedIn),
//!     "TITLE\n\n• first point\n• second point"
//! );
//! ```
//!
//! ## Features
//!
//! - **Two platforms**: Telegram (bold headings) and LinkedIn (uppercase headings)
//! - **List normalization**: bullets unified to `•`, bare numbered markers renumbered
//! - **Dash cleanup**: em-dashes replaced with plain hyphens
//! - **Batch processing**: Uses Rayon to format many independent texts
//! - **JSON export**: classified documents and formatting statistics

pub mod classify;
pub mod error;
pub mod model;
pub mod render;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types
pub use classify::classify;
pub use error::{Error, Result};
pub use model::{Category, Document, Line, Paragraph};
pub use render::{
    format, format_with_options, format_with_stats, FormatOptions, FormatResult, FormatStats,
    Formatter, JsonFormat, NumberingMode, Platform, PlatformPolicy,
};

use rayon::prelude::*;
use std::path::Path;

/// Read a UTF-8 text file and format it.
///
/// # Arguments
///
/// * `path` - Path to the text file
/// * `options` - Formatting options
///
/// # Example
///
/// ```no_run
/// use postfmt::{format_file, FormatOptions, Platform};
///
/// let options = FormatOptions::for_platform(Platform::LinkedIn);
/// let post = format_file("draft.txt", &options).unwrap();
/// println!("{}", post);
/// ```
pub fn format_file<P: AsRef<Path>>(path: P, options: &FormatOptions) -> Result<String> {
    let text = read_text(path)?;
    Ok(format_with_options(&text, options))
}

/// Read a UTF-8 text file and split it into classified paragraphs.
pub fn classify_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let text = read_text(path)?;
    Ok(Document::parse(&text))
}

/// Format many independent texts in parallel.
///
/// Each text gets its own list counter; output order matches input order.
///
/// # Example
///
/// ```
/// use postfmt::{format_batch, FormatOptions, Platform};
///
/// let drafts = ["ONE\n\n1.", "TWO\n\n1."];
/// let posts = format_batch(&drafts, &FormatOptions::for_platform(Platform::Telegram));
/// assert_eq!(posts, vec!["**ONE**\n\n1. ", "**TWO**\n\n1. "]);
/// ```
pub fn format_batch<S>(texts: &[S], options: &FormatOptions) -> Vec<String>
where
    S: AsRef<str> + Sync,
{
    let formatter = Formatter::new(options.clone());
    texts
        .par_iter()
        .map(|text| formatter.format(text.as_ref()))
        .collect()
}

fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    String::from_utf8(bytes)
        .map_err(|e| Error::Encoding(format!("{} is not valid UTF-8: {}", path.display(), e)))
}

/// Builder for formatting posts.
///
/// # Example
///
/// ```
/// use postfmt::{NumberingMode, Platform, Postfmt};
///
/// let post = Postfmt::new()
///     .platform(Platform::LinkedIn)
///     .numbering(NumberingMode::PerParagraph)
///     .format("Launch Day\n\n1.\n\n1.");
/// assert_eq!(post, "LAUNCH DAY\n\n1. \n\n1. ");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Postfmt {
    options: FormatOptions,
}

impl Postfmt {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target platform.
    pub fn platform(mut self, platform: Platform) -> Self {
        self.options = self.options.with_platform(platform);
        self
    }

    /// Set the numbering mode.
    pub fn numbering(mut self, numbering: NumberingMode) -> Self {
        self.options = self.options.with_numbering(numbering);
        self
    }

    /// Normalize input to Unicode NFC before formatting.
    pub fn normalize_unicode(mut self) -> Self {
        self.options = self.options.with_unicode_normalization(true);
        self
    }

    /// Get the accumulated options.
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Format a text.
    pub fn format(&self, text: &str) -> String {
        format_with_options(text, &self.options)
    }

    /// Format a text and collect statistics.
    pub fn format_with_stats(&self, text: &str) -> FormatResult {
        format_with_stats(text, &self.options)
    }

    /// Read and format a file.
    pub fn format_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        format_file(path, &self.options)
    }
}
