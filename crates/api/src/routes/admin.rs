//! Route definitions for the admin dashboard.
//!
//! Every handler behind `/admin` takes `RequireAdmin`, except `verify-pin`
//! which checks the PIN from the request body instead.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{contact, pin, uploads};
use crate::routes::{projects, tags};
use crate::state::AppState;

/// Admin routes mounted at `/admin`.
///
/// ```text
/// POST   /verify-pin            -> verify_pin
/// POST   /upload-image          -> upload_image
/// GET    /contacts              -> list contacts
/// GET    /contacts/stats        -> contact counters
/// GET    /contacts/{id}         -> get contact
/// PATCH  /contacts/{id}         -> mark read / starred
/// DELETE /contacts/{id}         -> delete contact
/// /projects/...                 -> see projects::admin_router
/// /tags/...                     -> see tags::admin_router
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/verify-pin", post(pin::verify_pin))
        .route(
            "/upload-image",
            // Size is enforced by the handler against MAX_UPLOAD_BYTES.
            post(uploads::upload_image).layer(DefaultBodyLimit::disable()),
        )
        .route("/contacts", get(contact::list))
        .route("/contacts/stats", get(contact::stats))
        .route(
            "/contacts/{id}",
            get(contact::get_by_id)
                .patch(contact::update_flags)
                .delete(contact::delete),
        )
        .nest("/projects", projects::admin_router())
        .nest("/tags", tags::admin_router())
}
