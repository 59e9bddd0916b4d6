//! Text normalization applied around rendering.

use std::borrow::Cow;

use unicode_normalization::{is_nfc, UnicodeNormalization};

/// Em-dash, replaced in every emitted line.
pub const EM_DASH: char = '\u{2014}';

/// Replace every em-dash with a plain hyphen.
pub fn normalize_dashes(line: &str) -> Cow<'_, str> {
    if line.contains(EM_DASH) {
        Cow::Owned(line.replace(EM_DASH, "-"))
    } else {
        Cow::Borrowed(line)
    }
}

/// Normalize text to Unicode NFC.
///
/// Text already in NFC is returned without copying.
pub fn normalize_unicode(text: &str) -> Cow<'_, str> {
    if is_nfc(text) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.nfc().collect())
    }
}
