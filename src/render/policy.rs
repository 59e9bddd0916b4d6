//! Platform rendering policies.
//!
//! Both platforms share one paragraph loop (see [`Formatter`](super::Formatter));
//! a policy only decides how each line category is drawn. The shared rules
//! live in the default methods of [`PlatformPolicy`], and each platform
//! overrides what differs, which today is only the heading style.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::classify::{is_link_token, BULLET};
use crate::error::Error;

/// Bold delimiter used by Telegram Markdown.
const BOLD: &str = "**";

/// Target platform for formatted output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Telegram chat message (Markdown bold headings)
    #[default]
    Telegram,
    /// LinkedIn post (uppercase headings)
    LinkedIn,
}

impl Platform {
    /// All supported platforms, in selection order.
    pub const ALL: [Platform; 2] = [Platform::Telegram, Platform::LinkedIn];

    /// Get the lowercase selector name of the platform.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Telegram => "telegram",
            Platform::LinkedIn => "linkedin",
        }
    }

    /// Get the rendering policy bound to this platform.
    pub fn policy(&self) -> &'static dyn PlatformPolicy {
        match self {
            Platform::Telegram => &TelegramPolicy,
            Platform::LinkedIn => &LinkedInPolicy,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "telegram" => Ok(Platform::Telegram),
            "linkedin" => Ok(Platform::LinkedIn),
            _ => Err(Error::UnknownPlatform(s.to_string())),
        }
    }
}

/// Per-category rendering rules for a target platform.
///
/// Implementors receive already-extracted pieces of a line: the list
/// number and remainder for numbered items, the stripped content for
/// bullets. Dash normalization runs after every method.
pub trait PlatformPolicy: Send + Sync {
    /// Human-readable platform name.
    fn name(&self) -> &'static str;

    /// Render a heading line.
    fn render_heading(&self, line: &str) -> String;

    /// Render a numbered-list item as `"{number}. {remainder}"`.
    fn render_list_item(&self, number: usize, remainder: &str) -> String {
        format!("{}. {}", number, remainder)
    }

    /// Render a bullet item as `"• {content}"`.
    fn render_bullet(&self, content: &str) -> String {
        format!("{} {}", BULLET, content)
    }

    /// Render a line carrying links.
    ///
    /// Links stay plain text; the words are rejoined with single spaces.
    fn render_link_line(&self, line: &str) -> String {
        let words: Vec<&str> = line.split_whitespace().collect();
        let links = words.iter().filter(|w| is_link_token(w)).count();
        log::trace!("{}: keeping {} link(s) as plain text", self.name(), links);
        words.join(" ")
    }

    /// Render a plain prose line.
    fn render_plain(&self, line: &str) -> String {
        line.to_string()
    }
}

/// Telegram policy: headings are wrapped in bold delimiters.
#[derive(Debug, Clone, Copy, Default)]
pub struct TelegramPolicy;

impl PlatformPolicy for TelegramPolicy {
    fn name(&self) -> &'static str {
        "Telegram"
    }

    fn render_heading(&self, line: &str) -> String {
        if is_bold(line) {
            return line.to_string();
        }
        format!("{BOLD}{line}{BOLD}")
    }
}

/// LinkedIn policy: headings are converted to full uppercase.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedInPolicy;

impl PlatformPolicy for LinkedInPolicy {
    fn name(&self) -> &'static str {
        "LinkedIn"
    }

    fn render_heading(&self, line: &str) -> String {
        line.to_uppercase()
    }
}

/// Check whether a line is already wrapped as a whole in one bold span.
fn is_bold(line: &str) -> bool {
    line.len() > 2 * BOLD.len()
        && line.starts_with(BOLD)
        && line.ends_with(BOLD)
        && !line[BOLD.len()..line.len() - BOLD.len()].contains(BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_from_str() {
        assert_eq!("telegram".parse::<Platform>().unwrap(), Platform::Telegram);
        assert_eq!(" LinkedIn ".parse::<Platform>().unwrap(), Platform::LinkedIn);
        assert!(matches!(
            "facebook".parse::<Platform>(),
            Err(Error::UnknownPlatform(_))
        ));
        assert!("".parse::<Platform>().is_err());
    }

    #[test]
    fn test_platform_display_roundtrip() {
        for platform in Platform::ALL {
            assert_eq!(platform.to_string().parse::<Platform>().unwrap(), platform);
        }
    }

    #[test]
    fn test_platform_serde_name() {
        let json = serde_json::to_string(&Platform::LinkedIn).unwrap();
        assert_eq!(json, "\"linkedin\"");
    }

    #[test]
    fn test_telegram_heading() {
        let policy = TelegramPolicy;
        assert_eq!(policy.render_heading("TITLE"), "**TITLE**");
        assert_eq!(policy.render_heading("**TITLE**"), "**TITLE**");
        assert_eq!(policy.render_heading("**A** VS **B**"), "****A** VS **B****");
    }

    #[test]
    fn test_linkedin_heading() {
        let policy = LinkedInPolicy;
        assert_eq!(policy.render_heading("Short Heading"), "SHORT HEADING");
    }

    #[test]
    fn test_shared_rules() {
        for platform in Platform::ALL {
            let policy = platform.policy();
            assert_eq!(policy.render_list_item(3, "third"), "3. third");
            assert_eq!(policy.render_bullet("point"), "• point");
            assert_eq!(
                policy.render_link_line("go   to  https://example.com"),
                "go to https://example.com"
            );
            assert_eq!(policy.render_plain("as is  here"), "as is  here");
        }
    }
}
