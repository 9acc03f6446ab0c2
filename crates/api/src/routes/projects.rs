//! Route definitions for portfolio projects.

use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Public routes mounted at `/projects`.
///
/// ```text
/// GET    /                  -> list_public
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(projects::list_public))
}

/// Admin routes mounted at `/admin/projects`.
///
/// ```text
/// GET    /                  -> list_all
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> replace
/// PATCH  /{id}              -> update_flags
/// DELETE /{id}              -> delete
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list_all).post(projects::create))
        .route(
            "/{id}",
            get(projects::get_by_id)
                .put(projects::replace)
                .patch(projects::update_flags)
                .delete(projects::delete),
        )
}
