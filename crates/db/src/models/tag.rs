//! Tag model and DTOs.

use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tags` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tag {
    pub id: DbId,
    pub name: String,
    pub color: String,
    pub is_technology: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a tag.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTag {
    #[serde(default)]
    pub name: String,
    /// Optional `#RRGGBB` color; a default is used when absent.
    pub color: Option<String>,
    #[serde(default)]
    pub is_technology: bool,
}

/// DTO for updating a tag. Absent fields are left alone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTag {
    pub name: Option<String>,
    pub color: Option<String>,
    pub is_technology: Option<bool>,
}

/// Query parameters for tag listing (`?kind=category|technology`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagListParams {
    pub kind: Option<String>,
}
