use std::sync::Arc;

use crate::config::ServerConfig;
use crate::image_host::ImageHost;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: atelier_db::DbPool,
    /// Server configuration (admin PIN, upload limits).
    pub config: Arc<ServerConfig>,
    /// Image CDN client. `None` when uploads are not configured.
    pub image_host: Option<Arc<dyn ImageHost>>,
}
