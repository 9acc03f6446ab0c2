//! Tag naming, colors, and classification.
//!
//! Tag names are unique case-insensitively. The original casing is stored and
//! displayed; [`tag_key`] gives the comparison form used when de-duplicating
//! the tag lists on a project.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Maximum tag name length, in characters.
pub const MAX_TAG_NAME_LEN: usize = 50;

/// Color assigned when a tag is created without one.
pub const DEFAULT_TAG_COLOR: &str = "#6366F1";

/// Whether a tag describes a kind of work or a technology used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    Category,
    Technology,
}

impl TagKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TagKind::Category => "category",
            TagKind::Technology => "technology",
        }
    }

    pub fn from_is_technology(is_technology: bool) -> Self {
        if is_technology {
            TagKind::Technology
        } else {
            TagKind::Category
        }
    }

    pub fn is_technology(self) -> bool {
        matches!(self, TagKind::Technology)
    }
}

impl std::str::FromStr for TagKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "category" => Ok(TagKind::Category),
            "technology" => Ok(TagKind::Technology),
            other => Err(CoreError::Validation(format!(
                "Invalid tag kind '{other}'. Must be one of: category, technology"
            ))),
        }
    }
}

/// Trim and collapse internal runs of whitespace to a single space.
pub fn normalize_tag_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case-insensitive comparison key for a tag name.
pub fn tag_key(name: &str) -> String {
    normalize_tag_name(name).to_lowercase()
}

/// Normalize a tag name and check it is non-empty and within bounds.
pub fn validate_tag_name(name: &str) -> Result<String, CoreError> {
    let normalized = normalize_tag_name(name);

    if normalized.is_empty() {
        return Err(CoreError::Validation("Tag name is required".into()));
    }

    if normalized.chars().count() > MAX_TAG_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Tag name must be at most {MAX_TAG_NAME_LEN} characters"
        )));
    }

    Ok(normalized)
}

/// Validate that a color string matches `#RRGGBB` hex format.
pub fn validate_color_hex(color: &str) -> Result<(), CoreError> {
    if color.len() != 7 || !color.starts_with('#') {
        return Err(CoreError::Validation(format!(
            "Invalid color '{color}'. Must be in #RRGGBB hex format"
        )));
    }

    if !color[1..].chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CoreError::Validation(format!(
            "Invalid color '{color}'. Must contain only hex digits after '#'"
        )));
    }

    Ok(())
}

/// Resolve the color for a new tag: validated and upper-cased, or the default.
pub fn resolve_color(color: Option<&str>) -> Result<String, CoreError> {
    match color.map(str::trim).filter(|c| !c.is_empty()) {
        Some(c) => {
            validate_color_hex(c)?;
            Ok(c.to_ascii_uppercase())
        }
        None => Ok(DEFAULT_TAG_COLOR.to_string()),
    }
}

/// Normalize a list of tag names, dropping blanks and case-insensitive
/// duplicates. The first spelling of each tag wins; order is preserved.
pub fn dedupe_tags<S: AsRef<str>>(tags: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.iter()
        .map(|t| normalize_tag_name(t.as_ref()))
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(tag_key(t)))
        .collect()
}
