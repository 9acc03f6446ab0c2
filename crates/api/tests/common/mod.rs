#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use atelier_api::config::ServerConfig;
use atelier_api::image_host::{ImageHost, ImageHostError, ImageUpload};
use atelier_api::router::build_app_router;
use atelier_api::state::AppState;

/// PIN configured on every test app.
pub const TEST_PIN: &str = "4821";

/// Upload cap used by test apps (small so oversize cases stay cheap).
pub const TEST_MAX_UPLOAD_BYTES: usize = 64 * 1024;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        admin_pin: Some(TEST_PIN.to_string()),
        max_upload_bytes: TEST_MAX_UPLOAD_BYTES,
        image_host: None,
    }
}

/// Build the full application router with the production middleware stack
/// and no image host.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app(pool, test_config(), None)
}

/// Build the application with an explicit config and image host.
pub fn build_app(
    pool: PgPool,
    config: ServerConfig,
    image_host: Option<Arc<dyn ImageHost>>,
) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        image_host,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fake image host
// ---------------------------------------------------------------------------

/// In-memory image host that records what it was sent.
#[derive(Default)]
pub struct FakeImageHost {
    pub uploads: Mutex<Vec<ImageUpload>>,
    pub fail: bool,
}

#[async_trait]
impl ImageHost for FakeImageHost {
    async fn upload(&self, upload: ImageUpload) -> Result<String, ImageHostError> {
        if self.fail {
            return Err(ImageHostError::HttpStatus(503));
        }
        let url = format!("https://cdn.example.test/portfolio/{}", upload.file_name);
        self.uploads.lock().unwrap().push(upload);
        Ok(url)
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    pin: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(pin) = pin {
        builder = builder.header("x-admin-pin", pin);
    }
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn admin_get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(TEST_PIN), None).await
}

pub async fn admin_post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(TEST_PIN), Some(body)).await
}

pub async fn admin_put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(TEST_PIN), Some(body)).await
}

pub async fn admin_patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(TEST_PIN), Some(body)).await
}

pub async fn admin_delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(TEST_PIN), None).await
}

/// Send a GET with an explicit (possibly wrong) PIN header.
pub async fn get_with_pin(app: Router, uri: &str, pin: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(pin), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
