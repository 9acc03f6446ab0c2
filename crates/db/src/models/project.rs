//! Portfolio project model and DTOs.
//!
//! Create and full-replace payloads use [`atelier_core::project::ProjectDraft`].

use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub categories: Vec<String>,
    pub technologies: Vec<String>,
    pub live_url: Option<String>,
    pub source_url: Option<String>,
    pub is_hidden: bool,
    pub is_starred: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for toggling visibility and the starred flag.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProjectFlags {
    pub is_hidden: Option<bool>,
    pub is_starred: Option<bool>,
}

impl UpdateProjectFlags {
    pub fn is_empty(&self) -> bool {
        self.is_hidden.is_none() && self.is_starred.is_none()
    }
}

/// Query parameters for `GET /api/projects`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectListParams {
    pub category: Option<String>,
    pub technology: Option<String>,
    #[serde(default)]
    pub starred: bool,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}
