//! Route definitions for the tag vocabulary.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::tags;
use crate::state::AppState;

/// Public routes mounted at `/tags`.
///
/// ```text
/// GET    /                  -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(tags::list))
}

/// Admin routes mounted at `/admin/tags`.
///
/// ```text
/// GET    /                  -> list_admin
/// POST   /                  -> create
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(tags::list_admin).post(tags::create))
        .route("/{id}", put(tags::update).delete(tags::delete))
}
