//! Handlers for contact form submissions.
//!
//! Submitting is public. Reading, flagging, and deleting submissions
//! require the admin PIN via [`RequireAdmin`].

use atelier_core::contact::{normalize_contact, ContactInput};
use atelier_core::error::CoreError;
use atelier_core::types::{DbId, Timestamp};
use atelier_db::models::contact::{ContactListParams, NewContact, UpdateContactFlags};
use atelier_db::repositories::ContactRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::admin::RequireAdmin;
use crate::middleware::client::ClientMeta;
use crate::response::DataResponse;
use crate::state::AppState;

/// What the public site gets back after a successful submission.
#[derive(Debug, Serialize)]
pub struct ContactReceipt {
    pub id: DbId,
    pub submitted_at: Timestamp,
}

/// POST /api/contact
///
/// Validate and store a submission along with the requester's IP and
/// user-agent.
pub async fn submit(
    State(state): State<AppState>,
    client: ClientMeta,
    AppJson(input): AppJson<ContactInput>,
) -> AppResult<impl IntoResponse> {
    let input = normalize_contact(input)?;

    let contact = ContactRepo::create(
        &state.pool,
        &NewContact {
            name: input.name,
            email: input.email,
            message: input.message,
            ip_address: client.ip,
            user_agent: client.user_agent,
        },
    )
    .await?;

    tracing::info!(
        contact_id = contact.id,
        ip = contact.ip_address.as_deref().unwrap_or("unknown"),
        "Contact submission received",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: ContactReceipt {
                id: contact.id,
                submitted_at: contact.submitted_at,
            },
        }),
    ))
}

/// GET /api/admin/contacts (also GET /api/contact)
///
/// Newest first. `?unread=true` / `?starred=true` narrow the list.
pub async fn list(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ContactListParams>,
) -> AppResult<impl IntoResponse> {
    let contacts = ContactRepo::list(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: contacts }))
}

/// GET /api/admin/contacts/stats
pub async fn stats(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let stats = ContactRepo::stats(&state.pool).await?;
    Ok(Json(DataResponse { data: stats }))
}

/// GET /api/admin/contacts/{id}
pub async fn get_by_id(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let contact = ContactRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }))?;
    Ok(Json(DataResponse { data: contact }))
}

/// PATCH /api/admin/contacts/{id}
///
/// Set `is_read` and/or `is_starred`. At least one must be present.
pub async fn update_flags(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateContactFlags>,
) -> AppResult<impl IntoResponse> {
    if input.is_empty() {
        return Err(AppError::BadRequest(
            "Provide is_read and/or is_starred".into(),
        ));
    }

    let contact = ContactRepo::update_flags(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }))?;

    tracing::info!(
        contact_id = id,
        is_read = contact.is_read,
        is_starred = contact.is_starred,
        "Contact flags updated",
    );

    Ok(Json(DataResponse { data: contact }))
}

/// DELETE /api/admin/contacts/{id}
pub async fn delete(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if !ContactRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }));
    }

    tracing::info!(contact_id = id, "Contact deleted");

    Ok(StatusCode::NO_CONTENT)
}
