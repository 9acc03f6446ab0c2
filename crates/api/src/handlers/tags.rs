//! Handlers for the tag vocabulary (categories and technologies).

use atelier_core::error::CoreError;
use atelier_core::tag::{resolve_color, validate_color_hex, validate_tag_name, TagKind};
use atelier_core::types::DbId;
use atelier_db::models::tag::{CreateTag, TagListParams, UpdateTag};
use atelier_db::repositories::TagRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::admin::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Tag", id })
}

fn duplicate(name: &str) -> AppError {
    AppError::Core(CoreError::Conflict(format!(
        "A tag named '{name}' already exists"
    )))
}

fn parse_kind(kind: Option<&str>) -> AppResult<Option<TagKind>> {
    match kind.map(str::trim).filter(|k| !k.is_empty()) {
        Some(k) => Ok(Some(k.parse::<TagKind>()?)),
        None => Ok(None),
    }
}

/// GET /api/tags and GET /api/admin/tags
///
/// Alphabetical. `?kind=category|technology` narrows the list.
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<TagListParams>,
) -> AppResult<impl IntoResponse> {
    let kind = parse_kind(params.kind.as_deref())?;
    let tags = TagRepo::list(&state.pool, kind).await?;
    Ok(Json(DataResponse { data: tags }))
}

/// Admin variant of [`list`]; same result behind the PIN gate.
pub async fn list_admin(
    _admin: RequireAdmin,
    state: State<AppState>,
    params: AppQuery<TagListParams>,
) -> AppResult<impl IntoResponse> {
    list(state, params).await
}

/// POST /api/admin/tags
pub async fn create(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTag>,
) -> AppResult<impl IntoResponse> {
    let name = validate_tag_name(&input.name)?;
    let color = resolve_color(input.color.as_deref())?;

    if TagRepo::find_by_name(&state.pool, &name).await?.is_some() {
        return Err(duplicate(&name));
    }

    let tag = TagRepo::create(&state.pool, &name, &color, input.is_technology).await?;

    tracing::info!(
        tag_id = tag.id,
        name = %tag.name,
        kind = TagKind::from_is_technology(tag.is_technology).as_str(),
        "Tag created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: tag })))
}

/// PUT /api/admin/tags/{id}
///
/// Rename, recolor, or change the kind. Renaming a tag does not rewrite the
/// names already stored on projects.
pub async fn update(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateTag>,
) -> AppResult<impl IntoResponse> {
    if input.name.is_none() && input.color.is_none() && input.is_technology.is_none() {
        return Err(AppError::BadRequest(
            "Provide at least one of name, color, is_technology".into(),
        ));
    }

    let name = input.name.as_deref().map(validate_tag_name).transpose()?;

    let color = match input.color.as_deref() {
        Some(c) => {
            let c = c.trim();
            validate_color_hex(c)?;
            Some(c.to_ascii_uppercase())
        }
        None => None,
    };

    if let Some(name) = &name {
        if let Some(existing) = TagRepo::find_by_name(&state.pool, name).await? {
            if existing.id != id {
                return Err(duplicate(name));
            }
        }
    }

    let tag = TagRepo::update(
        &state.pool,
        id,
        name.as_deref(),
        color.as_deref(),
        input.is_technology,
    )
    .await?
    .ok_or_else(|| not_found(id))?;

    tracing::info!(tag_id = id, name = %tag.name, "Tag updated");

    Ok(Json(DataResponse { data: tag }))
}

/// DELETE /api/admin/tags/{id}
pub async fn delete(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if !TagRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(tag_id = id, "Tag deleted");

    Ok(StatusCode::NO_CONTENT)
}
