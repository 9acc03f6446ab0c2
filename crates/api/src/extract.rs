//! Request extractors whose rejections use the `{error, code}` envelope.
//!
//! Axum's own `Json`, `Query` and `Path` reject with plain-text bodies (and
//! 422 for a body of the wrong shape). These wrappers route the rejection
//! through [`AppError`] so clients always get a 400 JSON error.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// Path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
