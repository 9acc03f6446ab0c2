//! Repository for the `tags` table.
//!
//! Name uniqueness is case-insensitive and backed by the
//! `uq_tags_name_lower` index on `lower(name)`.

use atelier_core::tag::TagKind;
use atelier_core::types::DbId;
use sqlx::PgPool;

use crate::models::tag::Tag;

/// Column list for `tags` queries.
const TAG_COLUMNS: &str = "id, name, color, is_technology, created_at";

/// Provides CRUD operations for tags.
pub struct TagRepo;

impl TagRepo {
    /// Insert a tag. The caller passes an already normalized name and color.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        color: &str,
        is_technology: bool,
    ) -> Result<Tag, sqlx::Error> {
        let query = format!(
            "INSERT INTO tags (name, color, is_technology) \
             VALUES ($1, $2, $3) \
             RETURNING {TAG_COLUMNS}"
        );
        sqlx::query_as::<_, Tag>(&query)
            .bind(name)
            .bind(color)
            .bind(is_technology)
            .fetch_one(pool)
            .await
    }

    /// Find a tag by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tag>, sqlx::Error> {
        let query = format!("SELECT {TAG_COLUMNS} FROM tags WHERE id = $1");
        sqlx::query_as::<_, Tag>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a tag by name, ignoring case.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Tag>, sqlx::Error> {
        let query = format!("SELECT {TAG_COLUMNS} FROM tags WHERE lower(name) = lower($1)");
        sqlx::query_as::<_, Tag>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List tags alphabetically (case-insensitive), optionally of one kind.
    pub async fn list(pool: &PgPool, kind: Option<TagKind>) -> Result<Vec<Tag>, sqlx::Error> {
        let query = format!(
            "SELECT {TAG_COLUMNS} FROM tags \
             WHERE ($1::BOOLEAN IS NULL OR is_technology = $1) \
             ORDER BY lower(name), id"
        );
        sqlx::query_as::<_, Tag>(&query)
            .bind(kind.map(TagKind::is_technology))
            .fetch_all(pool)
            .await
    }

    /// Update name, color and/or kind. Absent values are left alone.
    ///
    /// Returns `None` if no tag with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        name: Option<&str>,
        color: Option<&str>,
        is_technology: Option<bool>,
    ) -> Result<Option<Tag>, sqlx::Error> {
        let query = format!(
            "UPDATE tags SET \
                 name = COALESCE($2, name), \
                 color = COALESCE($3, color), \
                 is_technology = COALESCE($4, is_technology) \
             WHERE id = $1 \
             RETURNING {TAG_COLUMNS}"
        );
        sqlx::query_as::<_, Tag>(&query)
            .bind(id)
            .bind(name)
            .bind(color)
            .bind(is_technology)
            .fetch_optional(pool)
            .await
    }

    /// Delete a tag. Projects keep the name in their tag lists.
    ///
    /// Returns `true` if a tag was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
