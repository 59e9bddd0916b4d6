//! Integration tests for platform formatting.

use postfmt::{format, format_with_options, FormatOptions, NumberingMode, Platform};

#[test]
fn test_telegram_heading_and_list() {
    let output = format("TITLE\n\n1. first\n2. second", Platform::Telegram);
    assert_eq!(output, "**TITLE**\n\n1. first\n2. second");
}

#[test]
fn test_linkedin_heading_and_bullets() {
    let output = format("Short Heading\n\n• point one\n- point two", Platform::LinkedIn);
    assert_eq!(output, "SHORT HEADING\n\n• point one\n• point two");
}

#[test]
fn test_empty_input() {
    for platform in Platform::ALL {
        assert_eq!(format("", platform), "");
    }
}

#[test]
fn test_whitespace_only_input() {
    for platform in Platform::ALL {
        assert_eq!(format("   \n \t \n", platform), "");
        assert_eq!(format("\n\n", platform), "\n\n");
    }
}

#[test]
fn test_link_line_passes_through() {
    let text = "Visit http://example.com now";
    for platform in Platform::ALL {
        assert_eq!(format(text, platform), text);
    }

    let text = "join us at t.me/somechannel for updates and more news";
    for platform in Platform::ALL {
        assert_eq!(format(text, platform), text);
    }
}

#[test]
fn test_em_dash_replaced_on_both_platforms() {
    let text = "this is prose — with an aside\n- bullet — aside\nTITLE — PART TWO";
    let telegram = format(text, Platform::Telegram);
    let linkedin = format(text, Platform::LinkedIn);

    assert!(!telegram.contains('—'));
    assert!(!linkedin.contains('—'));
    assert_eq!(
        telegram,
        "this is prose - with an aside\n• bullet - aside\n**TITLE - PART TWO**"
    );
    assert_eq!(
        linkedin,
        "this is prose - with an aside\n• bullet - aside\nTITLE - PART TWO"
    );
}

#[test]
fn test_no_double_bold_on_reformat() {
    let once = format("ANNOUNCEMENT\n\nsome details follow in this paragraph", Platform::Telegram);
    let twice = format(&once, Platform::Telegram);

    assert_eq!(once, "**ANNOUNCEMENT**\n\nsome details follow in this paragraph");
    assert_eq!(twice, once);
    assert!(!twice.contains("****"));
}

#[test]
fn test_numbering_consecutive_within_paragraph() {
    let output = format("7.\n3.\n9.", Platform::Telegram);
    assert_eq!(output, "1. \n2. \n3. ");
}

#[test]
fn test_numbering_starts_at_one_after_plain_paragraph() {
    let text = "some plain words in a paragraph\n\n4.\n5.";
    let output = format(text, Platform::LinkedIn);
    assert_eq!(output, "some plain words in a paragraph\n\n1. \n2. ");
}

#[test]
fn test_numbering_carries_over_by_default() {
    let text = "1.\n2.\n3.\n\n1.\n2.";
    let output = format(text, Platform::Telegram);
    assert_eq!(output, "1. \n2. \n3. \n\n4. \n5. ");
}

#[test]
fn test_numbering_resets_after_paragraph_without_markers() {
    let text = "1.\n2.\n\nplain text between the lists\n\n1.";
    let output = format(text, Platform::Telegram);
    assert_eq!(output, "1. \n2. \n\nplain text between the lists\n\n1. ");
}

#[test]
fn test_marker_with_remainder_resets_counter() {
    // "1.2" renders as "1. 2", which is not a bare marker once rendered.
    let output = format("1.2\n\n1.", Platform::Telegram);
    assert_eq!(output, "1. 2\n\n1. ");
}

#[test]
fn test_empty_paragraph_keeps_counter() {
    // The middle block has no lines, so it neither renders nor resets.
    let text = "1.\n\n\n\n1.";
    let output = format(text, Platform::Telegram);
    assert_eq!(output, "1. \n\n\n\n2. ");
}

#[test]
fn test_per_paragraph_numbering() {
    let options = FormatOptions::for_platform(Platform::Telegram)
        .with_numbering(NumberingMode::PerParagraph);
    let output = format_with_options("1.\n2.\n3.\n\n1.\n2.", &options);
    assert_eq!(output, "1. \n2. \n3. \n\n1. \n2. ");
}

#[test]
fn test_numbered_marker_keeps_trailing_segments() {
    let output = format("1.5.2", Platform::Telegram);
    assert_eq!(output, "1. 5.2");
}

#[test]
fn test_blank_lines_inside_paragraph_dropped() {
    let text = "first line of prose here\n   \nsecond line of prose here";
    let output = format(text, Platform::Telegram);
    assert_eq!(output, "first line of prose here\nsecond line of prose here");
}

#[test]
fn test_lines_are_trimmed() {
    let output = format("   - indented bullet   \n\t• tabbed bullet", Platform::LinkedIn);
    assert_eq!(output, "• indented bullet\n• tabbed bullet");
}

#[test]
fn test_short_capitalized_sentence_is_heading() {
    let output = format("We shipped it", Platform::Telegram);
    assert_eq!(output, "**We shipped it**");

    let output = format("We shipped it", Platform::LinkedIn);
    assert_eq!(output, "WE SHIPPED IT");
}

#[test]
fn test_long_capitalized_sentence_is_plain() {
    let text = "We shipped the new release to every customer today";
    assert_eq!(format(text, Platform::Telegram), text);
    assert_eq!(format(text, Platform::LinkedIn), text);
}

#[test]
fn test_unusual_unicode_does_not_panic() {
    let inputs = [
        "\u{0}\u{FEFF}\u{200B}",
        "ǅemal ǈubljana",
        "ß straße",
        "🚀 LAUNCH 🚀\n\n• 🎉",
        "١٢.\n٣.",
        "—\n—\n\n—",
        "\r\n\r\n",
    ];
    for input in inputs {
        for platform in Platform::ALL {
            let _ = format(input, platform);
        }
    }
}

#[test]
fn test_linkedin_uppercase_expands_sharp_s() {
    assert_eq!(format("GROSSE Straße", Platform::LinkedIn), "GROSSE STRASSE");
}

#[test]
fn test_full_post() {
    let text = "\
Big News

We are thrilled to announce our new product — built by the whole team over many months.

What you get:
- faster builds
• smaller binaries

Read more at https://example.com/blog";

    let expected_telegram = "\
**Big News**

We are thrilled to announce our new product - built by the whole team over many months.

**What you get:**
• faster builds
• smaller binaries

Read more at https://example.com/blog";

    let expected_linkedin = "\
BIG NEWS

We are thrilled to announce our new product - built by the whole team over many months.

WHAT YOU GET:
• faster builds
• smaller binaries

Read more at https://example.com/blog";

    assert_eq!(format(text, Platform::Telegram), expected_telegram);
    assert_eq!(format(text, Platform::LinkedIn), expected_linkedin);
}
