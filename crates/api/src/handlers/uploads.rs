//! Project image upload, proxied to the image host.

use atelier_core::media::{check_upload_size, sniff_image};
use axum::extract::{Multipart, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::image_host::ImageUpload;
use crate::middleware::admin::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Multipart field holding the image.
const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadedImage {
    pub url: String,
}

/// POST /api/admin/upload-image
///
/// Accept one image in the `file` field, check its size and format, and
/// return the public URL the image host assigned to it.
pub async fn upload_image(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let host = state
        .image_host
        .clone()
        .ok_or_else(|| AppError::InternalError("Image hosting is not configured".into()))?;

    let max_bytes = state.config.max_upload_bytes;
    let mut bytes: Option<Vec<u8>> = None;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let mut buf = Vec::new();
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            check_upload_size(buf.len() + chunk.len(), max_bytes)?;
            buf.extend_from_slice(&chunk);
        }
        bytes = Some(buf);
        break;
    }

    let bytes = bytes.ok_or_else(|| {
        AppError::BadRequest(format!("Missing multipart field '{FILE_FIELD}'"))
    })?;
    let sniffed = sniff_image(&bytes)?;
    let size = bytes.len();

    let url = host
        .upload(ImageUpload {
            file_name: format!("{}.{}", uuid::Uuid::new_v4(), sniffed.extension),
            content_type: sniffed.mime,
            bytes,
        })
        .await?;

    tracing::info!(size, mime = sniffed.mime, %url, "Project image uploaded");

    Ok(Json(DataResponse {
        data: UploadedImage { url },
    }))
}
