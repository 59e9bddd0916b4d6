//! C-ABI FFI bindings for cross-language integration.
//!
//! This module lets message-handling shells written in other languages
//! (bots, web handlers) call the formatter directly. The caller is
//! responsible for obtaining the text and the platform choice; invalid
//! platform names are rejected here, before the engine runs.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use crate::error::{Error, Result};
use crate::render::{self, FormatOptions, JsonFormat, NumberingMode, Platform};
use crate::Document;

/// Result structure returned by FFI functions.
#[repr(C)]
pub struct PostfmtResult {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The result data (null if failed). Must be freed with `postfmt_free_result`.
    pub data: *mut c_char,
    /// Error message (null if succeeded). Must be freed with `postfmt_free_result`.
    pub error: *mut c_char,
}

impl PostfmtResult {
    fn success(data: String) -> Self {
        Self {
            success: true,
            data: CString::new(data).unwrap_or_default().into_raw(),
            error: ptr::null_mut(),
        }
    }

    fn error(message: String) -> Self {
        Self {
            success: false,
            data: ptr::null_mut(),
            error: CString::new(message).unwrap_or_default().into_raw(),
        }
    }
}

impl From<Result<String>> for PostfmtResult {
    fn from(result: Result<String>) -> Self {
        match result {
            Ok(data) => PostfmtResult::success(data),
            Err(e) => PostfmtResult::error(e.to_string()),
        }
    }
}

/// Options for formatting via FFI.
#[repr(C)]
pub struct PostfmtOptions {
    /// Platform name (`"telegram"` or `"linkedin"`).
    pub platform: *const c_char,
    /// Restart numbering at every paragraph instead of carrying it over.
    pub per_paragraph_numbering: bool,
    /// Normalize input to Unicode NFC before formatting.
    pub normalize_unicode: bool,
}

impl Default for PostfmtOptions {
    fn default() -> Self {
        Self {
            platform: ptr::null(),
            per_paragraph_numbering: false,
            normalize_unicode: false,
        }
    }
}

/// Format text for a platform.
///
/// # Safety
///
/// `text` and `platform` must be valid null-terminated UTF-8 strings.
/// The returned result must be freed with `postfmt_free_result`.
#[no_mangle]
pub unsafe extern "C" fn postfmt_format(
    text: *const c_char,
    platform: *const c_char,
) -> PostfmtResult {
    format_internal(text, platform, FormatOptions::new()).into()
}

/// Format text with options.
///
/// # Safety
///
/// `text` must be a valid null-terminated UTF-8 string.
/// `options.platform` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `postfmt_free_result`.
#[no_mangle]
pub unsafe extern "C" fn postfmt_format_with_options(
    text: *const c_char,
    options: PostfmtOptions,
) -> PostfmtResult {
    let numbering = if options.per_paragraph_numbering {
        NumberingMode::PerParagraph
    } else {
        NumberingMode::CarryOver
    };
    let base = FormatOptions::new()
        .with_numbering(numbering)
        .with_unicode_normalization(options.normalize_unicode);

    format_internal(text, options.platform, base).into()
}

unsafe fn format_internal(
    text: *const c_char,
    platform: *const c_char,
    base: FormatOptions,
) -> Result<String> {
    let text = read_str(text, "text")?;
    let platform: Platform = read_str(platform, "platform")?.parse()?;
    let options = base.with_platform(platform);
    Ok(render::format_with_options(text, &options))
}

/// Classify text and return the document as JSON.
///
/// # Safety
///
/// `text` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `postfmt_free_result`.
#[no_mangle]
pub unsafe extern "C" fn postfmt_classify(text: *const c_char, pretty: bool) -> PostfmtResult {
    classify_internal(text, pretty).into()
}

unsafe fn classify_internal(text: *const c_char, pretty: bool) -> Result<String> {
    let text = read_str(text, "text")?;
    let format = if pretty {
        JsonFormat::Pretty
    } else {
        JsonFormat::Compact
    };
    render::to_json(&Document::parse(text), format)
}

unsafe fn read_str<'a>(ptr: *const c_char, name: &str) -> Result<&'a str> {
    if ptr.is_null() {
        return Err(Error::Encoding(format!("{} cannot be null", name)));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|e| Error::Encoding(format!("invalid UTF-8 in {}: {}", name, e)))
}

/// Free a result returned by postfmt.
///
/// # Safety
///
/// The `result` must have been returned by a postfmt function.
/// This function should only be called once per result.
#[no_mangle]
pub unsafe extern "C" fn postfmt_free_result(result: PostfmtResult) {
    if !result.data.is_null() {
        drop(CString::from_raw(result.data));
    }
    if !result.error.is_null() {
        drop(CString::from_raw(result.error));
    }
}

/// Get the version of the postfmt library.
///
/// The returned string is statically allocated and should not be freed.
#[no_mangle]
pub extern "C" fn postfmt_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
