//! Portfolio project rules.

use serde::Deserialize;

use crate::error::CoreError;
use crate::links::{is_loose_url, normalize_optional_url};
use crate::tag::dedupe_tags;

/// Maximum number of images on one project.
pub const MAX_PROJECT_IMAGES: usize = 5;

/// Maximum title length, in characters.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum description length, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 5000;

/// Maximum entries in each of the category and technology lists.
pub const MAX_TAGS_PER_LIST: usize = 20;

/// Editable fields of a project, as posted by the admin dashboard.
///
/// Used for both create and full replace. The flags are optional: on create
/// they default to `false`, on replace an absent flag keeps its stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub live_url: Option<String>,
    pub source_url: Option<String>,
    pub is_hidden: Option<bool>,
    pub is_starred: Option<bool>,
}

/// Validate a draft and return its normalized form.
///
/// Text is trimmed, tag lists are de-duplicated case-insensitively, blank
/// image entries are dropped, and blank links become `None`.
pub fn validate_draft(draft: ProjectDraft) -> Result<ProjectDraft, CoreError> {
    let title = draft.title.trim().to_string();
    if title.is_empty() {
        return Err(CoreError::Validation("Project title is required".into()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Project title must be at most {MAX_TITLE_LEN} characters"
        )));
    }

    let description = draft.description.trim().to_string();
    if description.is_empty() {
        return Err(CoreError::Validation(
            "Project description is required".into(),
        ));
    }
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(CoreError::Validation(format!(
            "Project description must be at most {MAX_DESCRIPTION_LEN} characters"
        )));
    }

    let categories = dedupe_tags(&draft.categories);
    let technologies = dedupe_tags(&draft.technologies);
    if categories.is_empty() && technologies.is_empty() {
        return Err(CoreError::Validation(
            "Project must have at least one tag".into(),
        ));
    }
    if categories.len() > MAX_TAGS_PER_LIST || technologies.len() > MAX_TAGS_PER_LIST {
        return Err(CoreError::Validation(format!(
            "A project can have at most {MAX_TAGS_PER_LIST} categories and {MAX_TAGS_PER_LIST} technologies"
        )));
    }

    let images = validate_images(&draft.images)?;
    let live_url = normalize_optional_url("live_url", draft.live_url.as_deref())?;
    let source_url = normalize_optional_url("source_url", draft.source_url.as_deref())?;

    Ok(ProjectDraft {
        title,
        description,
        images,
        categories,
        technologies,
        live_url,
        source_url,
        is_hidden: draft.is_hidden,
        is_starred: draft.is_starred,
    })
}

/// Trim image URLs, drop blanks, and enforce the count and URL rules.
/// Order is kept: the first image is the cover.
fn validate_images(images: &[String]) -> Result<Vec<String>, CoreError> {
    let images: Vec<String> = images
        .iter()
        .map(|u| u.trim())
        .filter(|u| !u.is_empty())
        .map(str::to_string)
        .collect();

    if images.len() > MAX_PROJECT_IMAGES {
        return Err(CoreError::Validation(format!(
            "A project can have at most {MAX_PROJECT_IMAGES} images"
        )));
    }

    if let Some((i, _)) = images.iter().enumerate().find(|(_, u)| !is_loose_url(u)) {
        return Err(CoreError::Validation(format!(
            "images[{i}] must start with http://, https:// or www."
        )));
    }

    Ok(images)
}
