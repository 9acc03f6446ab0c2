//! Repository for the `contacts` table.

use atelier_core::portfolio::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use atelier_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact::{
    Contact, ContactListParams, ContactStats, NewContact, UpdateContactFlags,
};

/// Column list for `contacts` queries.
const CONTACT_COLUMNS: &str = "\
    id, name, email, message, ip_address, user_agent, \
    is_read, is_starred, submitted_at";

/// Provides CRUD operations for contact submissions.
pub struct ContactRepo;

impl ContactRepo {
    /// Store a new submission. Flags start cleared.
    pub async fn create(pool: &PgPool, input: &NewContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (name, email, message, ip_address, user_agent) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {CONTACT_COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.message)
            .bind(input.ip_address.as_deref())
            .bind(input.user_agent.as_deref())
            .fetch_one(pool)
            .await
    }

    /// Find a submission by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = $1");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List submissions, newest first, with optional read/starred filters.
    pub async fn list(
        pool: &PgPool,
        params: &ContactListParams,
    ) -> Result<Vec<Contact>, sqlx::Error> {
        let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        let offset = clamp_offset(params.offset);

        let query = format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts \
             WHERE ($1::BOOLEAN IS NULL OR is_read = NOT $1) \
               AND ($2::BOOLEAN IS NULL OR is_starred = $2) \
             ORDER BY submitted_at DESC, id DESC \
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(params.unread)
            .bind(params.starred)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Set the read and/or starred flag.
    ///
    /// Returns `None` if no submission with the given ID exists.
    pub async fn update_flags(
        pool: &PgPool,
        id: DbId,
        flags: &UpdateContactFlags,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!(
            "UPDATE contacts SET \
                 is_read = COALESCE($2, is_read), \
                 is_starred = COALESCE($3, is_starred) \
             WHERE id = $1 \
             RETURNING {CONTACT_COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .bind(flags.is_read)
            .bind(flags.is_starred)
            .fetch_optional(pool)
            .await
    }

    /// Delete a submission. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Inbox counters: total, unread, starred.
    pub async fn stats(pool: &PgPool) -> Result<ContactStats, sqlx::Error> {
        sqlx::query_as::<_, ContactStats>(
            "SELECT \
                 COUNT(*) AS total, \
                 COUNT(*) FILTER (WHERE NOT is_read) AS unread, \
                 COUNT(*) FILTER (WHERE is_starred) AS starred \
             FROM contacts",
        )
        .fetch_one(pool)
        .await
    }
}
