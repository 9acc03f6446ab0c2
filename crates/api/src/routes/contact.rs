//! Route definitions for the public contact form.

use axum::routing::post;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes mounted at `/contact`.
///
/// ```text
/// POST   /                  -> submit (public)
/// GET    /                  -> list (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(contact::submit).get(contact::list))
}
