//! Formatting options and configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Platform;
use crate::error::Error;

/// Options for formatting a text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Target platform
    pub platform: Platform,

    /// How the list counter behaves across paragraphs
    pub numbering: NumberingMode,

    /// Normalize input to Unicode NFC before splitting
    pub normalize_unicode: bool,
}

impl FormatOptions {
    /// Create new format options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options targeting a platform.
    pub fn for_platform(platform: Platform) -> Self {
        Self::new().with_platform(platform)
    }

    /// Set the target platform.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Set the numbering mode.
    pub fn with_numbering(mut self, numbering: NumberingMode) -> Self {
        self.numbering = numbering;
        self
    }

    /// Enable or disable Unicode NFC normalization of the input.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }
}

/// How the numbered-list counter behaves at paragraph boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumberingMode {
    /// Reset after a paragraph only when it holds no bare numbered marker;
    /// otherwise numbering continues into the next paragraph.
    #[default]
    CarryOver,
    /// Reset at the start of every paragraph.
    PerParagraph,
}

impl NumberingMode {
    /// Get the kebab-case selector name.
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberingMode::CarryOver => "carry-over",
            NumberingMode::PerParagraph => "per-paragraph",
        }
    }
}

impl fmt::Display for NumberingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumberingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "carry-over" | "carryover" => Ok(NumberingMode::CarryOver),
            "per-paragraph" | "paragraph" => Ok(NumberingMode::PerParagraph),
            _ => Err(Error::InvalidNumberingMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_options_builder() {
        let options = FormatOptions::new()
            .with_platform(Platform::LinkedIn)
            .with_numbering(NumberingMode::PerParagraph)
            .with_unicode_normalization(true);

        assert_eq!(options.platform, Platform::LinkedIn);
        assert_eq!(options.numbering, NumberingMode::PerParagraph);
        assert!(options.normalize_unicode);
    }

    #[test]
    fn test_format_options_default() {
        let options = FormatOptions::default();
        assert_eq!(options.platform, Platform::Telegram);
        assert_eq!(options.numbering, NumberingMode::CarryOver);
        assert!(!options.normalize_unicode);
    }

    #[test]
    fn test_numbering_mode_parse() {
        assert_eq!(
            "carry-over".parse::<NumberingMode>().unwrap(),
            NumberingMode::CarryOver
        );
        assert_eq!(
            "Per-Paragraph".parse::<NumberingMode>().unwrap(),
            NumberingMode::PerParagraph
        );
        assert!(matches!(
            "sometimes".parse::<NumberingMode>(),
            Err(Error::InvalidNumberingMode(_))
        ));
    }
}
