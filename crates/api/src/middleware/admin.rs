//! Admin PIN extractor.
//!
//! Admin endpoints take [`RequireAdmin`] as a handler argument. The PIN is
//! read from the `X-Admin-Pin` header and compared with the configured one.

use atelier_core::error::CoreError;
use atelier_core::pin::check_pin;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the admin PIN.
pub const ADMIN_PIN_HEADER: &str = "x-admin-pin";

/// Proof that the request carried the admin PIN.
///
/// Rejects with 401 when the header is missing or wrong, and with 500 when
/// no PIN is configured on the server.
///
/// ```ignore
/// async fn admin_only(_admin: RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let submitted = parts
            .headers
            .get(ADMIN_PIN_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing X-Admin-Pin header".into(),
                ))
            })?;

        check_pin(state.config.admin_pin.as_deref(), submitted)?;

        Ok(RequireAdmin)
    }
}
