//! Handlers for portfolio projects.
//!
//! The public listing only ever returns visible (non-hidden) projects. The
//! admin endpoints see everything and require [`RequireAdmin`].

use atelier_core::error::CoreError;
use atelier_core::portfolio::{Page, PageInfo, PortfolioFilter};
use atelier_core::project::{validate_draft, ProjectDraft};
use atelier_core::types::DbId;
use atelier_db::models::project::{ProjectListParams, UpdateProjectFlags};
use atelier_db::repositories::ProjectRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::admin::RequireAdmin;
use crate::response::{DataResponse, PagedResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// GET /api/projects
///
/// Visible projects, starred first then newest, filtered by
/// `?category=&technology=&starred=` and paged by `?page=&page_size=`.
pub async fn list_public(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ProjectListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = PortfolioFilter::new(
        params.category.as_deref(),
        params.technology.as_deref(),
        params.starred,
    );
    let page = Page::new(params.page, params.page_size);

    let total = ProjectRepo::count_visible(&state.pool, &filter).await?;
    let projects = ProjectRepo::list_visible(&state.pool, &filter, page).await?;

    Ok(Json(PagedResponse {
        data: projects,
        pagination: PageInfo::new(page, total),
    }))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /api/admin/projects
pub async fn list_all(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let projects = ProjectRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// POST /api/admin/projects
pub async fn create(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<ProjectDraft>,
) -> AppResult<impl IntoResponse> {
    let draft = validate_draft(input)?;
    let project = ProjectRepo::create(&state.pool, &draft).await?;

    tracing::info!(project_id = project.id, title = %project.title, "Project created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// GET /api/admin/projects/{id}
pub async fn get_by_id(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: project }))
}

/// PUT /api/admin/projects/{id}
///
/// Full replace of the editable fields. Flags absent from the body keep
/// their stored values.
pub async fn replace(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<ProjectDraft>,
) -> AppResult<impl IntoResponse> {
    let draft = validate_draft(input)?;
    let project = ProjectRepo::replace(&state.pool, id, &draft)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(project_id = id, "Project updated");

    Ok(Json(DataResponse { data: project }))
}

/// PATCH /api/admin/projects/{id}
///
/// Toggle `is_hidden` and/or `is_starred`. At least one must be present.
pub async fn update_flags(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateProjectFlags>,
) -> AppResult<impl IntoResponse> {
    if input.is_empty() {
        return Err(AppError::BadRequest(
            "Provide is_hidden and/or is_starred".into(),
        ));
    }

    let project = ProjectRepo::update_flags(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        project_id = id,
        is_hidden = project.is_hidden,
        is_starred = project.is_starred,
        "Project flags updated",
    );

    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/admin/projects/{id}
pub async fn delete(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if !ProjectRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(project_id = id, "Project deleted");

    Ok(StatusCode::NO_CONTENT)
}
