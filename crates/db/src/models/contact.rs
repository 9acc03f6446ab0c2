//! Contact submission model and DTOs.

use atelier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `contacts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contact {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub is_read: bool,
    pub is_starred: bool,
    pub submitted_at: Timestamp,
}

/// Insert payload, built from an already normalized form submission.
#[derive(Debug, Clone)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub message: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// DTO for toggling the read/starred flags. Absent fields are left alone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateContactFlags {
    pub is_read: Option<bool>,
    pub is_starred: Option<bool>,
}

impl UpdateContactFlags {
    pub fn is_empty(&self) -> bool {
        self.is_read.is_none() && self.is_starred.is_none()
    }
}

/// Query parameters for the admin contact list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactListParams {
    /// `true` keeps only unread submissions, `false` only read ones.
    pub unread: Option<bool>,
    /// `true` keeps only starred submissions, `false` only unstarred ones.
    pub starred: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Inbox counters for the admin dashboard.
#[derive(Debug, Clone, Copy, FromRow, Serialize)]
pub struct ContactStats {
    pub total: i64,
    pub unread: i64,
    pub starred: i64,
}
