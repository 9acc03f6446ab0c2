//! Loose URL checks for project links and image URLs.
//!
//! Links are not parsed. A value is accepted when it starts with
//! `http://`, `https://` or `www.` and contains no whitespace.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Pattern accepted for every optional link field.
pub const LOOSE_URL_PATTERN: &str = r"^(?i:https?://|www\.)\S+$";

static LOOSE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LOOSE_URL_PATTERN).expect("valid regex"));

/// Whether `value` matches [`LOOSE_URL_PATTERN`].
pub fn is_loose_url(value: &str) -> bool {
    LOOSE_URL_RE.is_match(value)
}

/// Trim an optional link and check it.
///
/// Missing and blank values both become `None`. `field` names the input in
/// the validation message.
pub fn normalize_optional_url(
    field: &str,
    value: Option<&str>,
) -> Result<Option<String>, CoreError> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    if !is_loose_url(raw) {
        return Err(CoreError::Validation(format!(
            "{field} must start with http://, https:// or www."
        )));
    }

    Ok(Some(raw.to_string()))
}
