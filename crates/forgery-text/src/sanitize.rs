//! Identifier sanitation helpers

use forgery_core::{FakerError, FakerResult};
use tracing::warn;

/// `[A-Za-z0-9_.]`
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

pub fn is_identifier_safe(text: &str) -> bool {
    text.chars().all(is_identifier_char)
}

/// Drop every character outside `[A-Za-z0-9_.]`, codepoint by codepoint
pub fn strip_unsafe(text: &str) -> String {
    text.chars().filter(|c| is_identifier_char(*c)).collect()
}

/// True when nothing but `.` and `_` is left
pub fn is_exhausted(text: &str) -> bool {
    text.trim_matches(|c| c == '.' || c == '_').is_empty()
}

/// Fail with `TransliterationExhausted` when `text` carries no usable character
pub fn ensure_usable(text: String, operation: &str, locale: &str) -> FakerResult<String> {
    if is_exhausted(&text) {
        warn!(
            operation = operation,
            locale = locale,
            "transliteration removed every character"
        );
        return Err(FakerError::transliteration_exhausted(operation, locale));
    }
    Ok(text)
}

/// Collapse every run of `.` into a single `.`
pub fn collapse_dots(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut previous_dot = false;
    for c in text.chars() {
        if c == '.' && previous_dot {
            continue;
        }
        previous_dot = c == '.';
        output.push(c);
    }
    output
}

pub fn trim_trailing_dots(text: &str) -> &str {
    text.trim_end_matches('.')
}
