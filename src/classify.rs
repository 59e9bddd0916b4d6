//! Line classification heuristics.
//!
//! Each trimmed line is assigned exactly one [`Category`] by a fixed chain
//! of lexical predicates. The first predicate that matches wins:
//!
//! 1. heading (all caps, or a short phrase starting with a capital)
//! 2. bare numbered-list marker (`"1."`, `"12"`)
//! 3. bullet (`•` or `-` prefix)
//! 4. link line (`http` or `t.me` anywhere)
//! 5. plain prose
//!
//! The heuristics over-match on purpose: "Buy More Milk" is a heading.

use crate::model::Category;

/// Maximum number of words in a capitalized phrase still treated as a heading.
pub const MAX_HEADING_WORDS: usize = 5;

/// Bullet glyph used in rendered output.
pub const BULLET: char = '•';

/// Substrings that mark a line as carrying a link.
const LINK_MARKERS: [&str; 2] = ["http", "t.me"];

/// Classify a single line.
///
/// The line is expected to be trimmed already; surrounding whitespace is
/// not stripped here.
///
/// # Example
///
/// ```
/// use postfmt::classify::classify;
/// use postfmt::Category;
///
/// assert_eq!(classify("TITLE"), Category::Heading);
/// assert_eq!(classify("3."), Category::NumberedListItem);
/// assert_eq!(classify("- milk"), Category::BulletItem);
/// assert_eq!(classify("see https://example.com"), Category::LinkLine);
/// assert_eq!(classify("just some words here"), Category::Plain);
/// ```
pub fn classify(line: &str) -> Category {
    let category = if is_heading(line) {
        Category::Heading
    } else if is_numbered_marker(line) {
        Category::NumberedListItem
    } else if is_bullet(line) {
        Category::BulletItem
    } else if is_link_line(line) {
        Category::LinkLine
    } else {
        Category::Plain
    };
    log::trace!("classified {:?} as {:?}", line, category);
    category
}

/// Check whether a line looks like a heading.
///
/// A line is a heading when every alphabetic character is uppercase (and
/// there is at least one), or when it starts with an uppercase character
/// and has at most [`MAX_HEADING_WORDS`] words. The short-phrase rule does
/// not apply to lines carrying a link.
pub fn is_heading(line: &str) -> bool {
    let Some(first) = line.chars().next() else {
        return false;
    };

    if is_all_caps(line) {
        return true;
    }

    first.is_uppercase()
        && line.split_whitespace().count() <= MAX_HEADING_WORDS
        && !is_link_line(line)
}

/// Check whether a line is a bare numbered-list marker.
///
/// Periods are removed and the rest trimmed; what remains must be a
/// non-empty run of ASCII decimal digits. `"1."` and `"1.2."` qualify,
/// `"1. Buy milk"` and `"½."` do not.
pub fn is_numbered_marker(line: &str) -> bool {
    let stripped: String = line.trim().chars().filter(|&c| c != '.').collect();
    let stripped = stripped.trim();
    !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit())
}

/// Check whether a line starts with a bullet glyph or hyphen.
pub fn is_bullet(line: &str) -> bool {
    line.starts_with(BULLET) || line.starts_with('-')
}

/// Check whether a line contains a link marker anywhere.
pub fn is_link_line(line: &str) -> bool {
    LINK_MARKERS.iter().any(|marker| line.contains(marker))
}

/// Check whether a single whitespace-separated token is a link.
pub fn is_link_token(token: &str) -> bool {
    LINK_MARKERS.iter().any(|marker| token.starts_with(marker))
}

fn is_all_caps(line: &str) -> bool {
    let mut letters = line.chars().filter(|c| c.is_alphabetic()).peekable();
    letters.peek().is_some() && letters.all(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_caps_heading() {
        assert!(is_heading("TITLE"));
        assert!(is_heading("A VERY LONG ALL CAPS LINE WITH MANY WORDS IN IT"));
        assert!(is_heading("Q3 2024: RESULTS!"));
    }

    #[test]
    fn test_short_capitalized_heading() {
        assert!(is_heading("Short Heading"));
        assert!(is_heading("Buy more milk today please"));
        assert!(!is_heading("Buy more milk today please now"));
        assert!(!is_heading("lowercase start"));
    }

    #[test]
    fn test_heading_needs_letters() {
        assert!(!is_heading(""));
        assert!(!is_heading("1."));
        assert!(!is_heading("42"));
        assert!(!is_heading("---"));
    }

    #[test]
    fn test_capitalized_link_line_is_not_heading() {
        assert!(!is_heading("Visit http://example.com now"));
        assert!(!is_heading("Join t.me/channel"));
    }

    #[test]
    fn test_numbered_marker() {
        assert!(is_numbered_marker("1."));
        assert!(is_numbered_marker("12"));
        assert!(is_numbered_marker("1.2."));
        assert!(is_numbered_marker(" 7 . "));
        assert!(!is_numbered_marker("1. Buy milk"));
        assert!(!is_numbered_marker("."));
        assert!(!is_numbered_marker(""));
        assert!(!is_numbered_marker("½."));
        assert!(!is_numbered_marker("²"));
    }

    #[test]
    fn test_bullet() {
        assert!(is_bullet("• point"));
        assert!(is_bullet("- point"));
        assert!(is_bullet("-point"));
        assert!(!is_bullet("* point"));
    }

    #[test]
    fn test_link_detection() {
        assert!(is_link_line("see https://example.com"));
        assert!(is_link_line("join t.me/channel"));
        assert!(!is_link_line("no links here"));

        assert!(is_link_token("http://example.com"));
        assert!(is_link_token("t.me/channel"));
        assert!(!is_link_token("(http://example.com)"));
    }

    #[test]
    fn test_precedence() {
        // Heading beats bullet when the line is all caps.
        assert_eq!(classify("- NOTE"), Category::Heading);
        // Bullet beats link.
        assert_eq!(classify("- read https://example.com"), Category::BulletItem);
        assert_eq!(classify("1. first"), Category::Plain);
        assert_eq!(classify("2."), Category::NumberedListItem);
    }

    #[test]
    fn test_unicode_lines() {
        assert_eq!(classify("ПРИВЕТ МИР"), Category::Heading);
        assert_eq!(classify("Привет мир"), Category::Heading);
        assert_eq!(classify("это обычный текст без заглавных букв"), Category::Plain);
        assert_eq!(classify("日本語のテキスト"), Category::Plain);
    }
}
