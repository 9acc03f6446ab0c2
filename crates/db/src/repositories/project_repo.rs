//! Repository for the `projects` table.
//!
//! Category and technology filters compare case-insensitively against the
//! stored tag names.

use atelier_core::portfolio::{Page, PortfolioFilter};
use atelier_core::project::ProjectDraft;
use atelier_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{Project, UpdateProjectFlags};

/// Column list for `projects` queries.
const PROJECT_COLUMNS: &str = "\
    id, title, description, images, categories, technologies, \
    live_url, source_url, is_hidden, is_starred, created_at, updated_at";

/// Predicate shared by the public listing and its count.
///
/// `$1` category, `$2` technology, `$3` starred-only.
const VISIBLE_FILTER: &str = "\
    NOT is_hidden \
    AND ($1::TEXT IS NULL OR EXISTS ( \
        SELECT 1 FROM unnest(categories) AS c WHERE lower(c) = lower($1))) \
    AND ($2::TEXT IS NULL OR EXISTS ( \
        SELECT 1 FROM unnest(technologies) AS t WHERE lower(t) = lower($2))) \
    AND (NOT $3 OR is_starred)";

/// Starred projects first, then newest.
const PROJECT_ORDER: &str = "is_starred DESC, created_at DESC, id DESC";

/// Provides CRUD operations for portfolio projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a validated draft. Absent flags default to `false`.
    pub async fn create(pool: &PgPool, draft: &ProjectDraft) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects \
                 (title, description, images, categories, technologies, \
                  live_url, source_url, is_hidden, is_starred) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {PROJECT_COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&draft.title)
            .bind(&draft.description)
            .bind(&draft.images)
            .bind(&draft.categories)
            .bind(&draft.technologies)
            .bind(draft.live_url.as_deref())
            .bind(draft.source_url.as_deref())
            .bind(draft.is_hidden.unwrap_or(false))
            .bind(draft.is_starred.unwrap_or(false))
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID, hidden or not.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Every project, hidden included, for the admin dashboard.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {PROJECT_COLUMNS} FROM projects ORDER BY {PROJECT_ORDER}");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// One page of visible projects matching the filter.
    pub async fn list_visible(
        pool: &PgPool,
        filter: &PortfolioFilter,
        page: Page,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {PROJECT_COLUMNS} FROM projects \
             WHERE {VISIBLE_FILTER} \
             ORDER BY {PROJECT_ORDER} \
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(filter.category.as_deref())
            .bind(filter.technology.as_deref())
            .bind(filter.starred_only)
            .bind(page.page_size)
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Number of visible projects matching the filter.
    pub async fn count_visible(
        pool: &PgPool,
        filter: &PortfolioFilter,
    ) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM projects WHERE {VISIBLE_FILTER}");
        let (count,): (i64,) = sqlx::query_as(&query)
            .bind(filter.category.as_deref())
            .bind(filter.technology.as_deref())
            .bind(filter.starred_only)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Replace every editable field with the validated draft.
    ///
    /// Flags absent from the draft keep their stored value. Returns `None`
    /// if no project with the given ID exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        draft: &ProjectDraft,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET \
                 title = $2, \
                 description = $3, \
                 images = $4, \
                 categories = $5, \
                 technologies = $6, \
                 live_url = $7, \
                 source_url = $8, \
                 is_hidden = COALESCE($9, is_hidden), \
                 is_starred = COALESCE($10, is_starred) \
             WHERE id = $1 \
             RETURNING {PROJECT_COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&draft.title)
            .bind(&draft.description)
            .bind(&draft.images)
            .bind(&draft.categories)
            .bind(&draft.technologies)
            .bind(draft.live_url.as_deref())
            .bind(draft.source_url.as_deref())
            .bind(draft.is_hidden)
            .bind(draft.is_starred)
            .fetch_optional(pool)
            .await
    }

    /// Set the hidden and/or starred flag.
    ///
    /// Returns `None` if no project with the given ID exists.
    pub async fn update_flags(
        pool: &PgPool,
        id: DbId,
        flags: &UpdateProjectFlags,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET \
                 is_hidden = COALESCE($2, is_hidden), \
                 is_starred = COALESCE($3, is_starred) \
             WHERE id = $1 \
             RETURNING {PROJECT_COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(flags.is_hidden)
            .bind(flags.is_starred)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
