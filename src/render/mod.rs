//! Rendering module for reformatting classified text per platform.

mod cleanup;
mod formatter;
mod json;
mod options;
mod policy;
mod result;

pub use cleanup::{normalize_dashes, normalize_unicode, EM_DASH};
pub use formatter::{format, format_with_options, format_with_stats, Formatter, ListCounter};
pub use json::{result_to_json, to_json, JsonFormat};
pub use options::{FormatOptions, NumberingMode};
pub use policy::{LinkedInPolicy, Platform, PlatformPolicy, TelegramPolicy};
pub use result::{FormatResult, FormatStats};
