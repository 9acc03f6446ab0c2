pub mod admin;
pub mod contact;
pub mod health;
pub mod projects;
pub mod tags;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /contact                     submit (public), list (admin)
///
/// /projects                    visible projects, filtered and paged (public)
///
/// /tags                        tag vocabulary (public)
///
/// /admin/verify-pin            PIN check for the dashboard login
/// /admin/upload-image          project image upload (admin)
/// /admin/contacts              list (admin)
/// /admin/contacts/stats        counters (admin)
/// /admin/contacts/{id}         get, flag, delete (admin)
/// /admin/projects              list, create (admin)
/// /admin/projects/{id}         get, replace, flag, delete (admin)
/// /admin/tags                  list, create (admin)
/// /admin/tags/{id}             update, delete (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/contact", contact::router())
        .nest("/projects", projects::router())
        .nest("/tags", tags::router())
        .nest("/admin", admin::router())
}
