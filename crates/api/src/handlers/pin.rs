//! Admin PIN verification, used by the dashboard login screen.

use atelier_core::error::CoreError;
use atelier_core::pin::check_pin;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::client::ClientMeta;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct VerifyPinRequest {
    #[serde(default)]
    pub pin: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyPinResponse {
    pub valid: bool,
}

/// POST /api/admin/verify-pin
pub async fn verify_pin(
    State(state): State<AppState>,
    client: ClientMeta,
    AppJson(input): AppJson<VerifyPinRequest>,
) -> AppResult<impl IntoResponse> {
    if let Err(err) = check_pin(state.config.admin_pin.as_deref(), &input.pin) {
        if matches!(err, CoreError::Unauthorized(_)) {
            tracing::warn!(
                ip = client.ip.as_deref().unwrap_or("unknown"),
                "Admin PIN rejected",
            );
        }
        return Err(err.into());
    }

    Ok(Json(DataResponse {
        data: VerifyPinResponse { valid: true },
    }))
}
