use atelier_core::media::DEFAULT_MAX_UPLOAD_BYTES;

use crate::image_host::ImageHostConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Static admin PIN. `None` locks every admin endpoint.
    pub admin_pin: Option<String>,
    /// Largest accepted image upload, in bytes (default: 5 MiB).
    pub max_upload_bytes: usize,
    /// Image CDN settings. `None` disables uploads.
    pub image_host: Option<ImageHostConfig>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `ADMIN_PIN`            | unset                      |
    /// | `MAX_UPLOAD_BYTES`     | `5242880`                  |
    ///
    /// Image host variables are read by [`ImageHostConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let admin_pin = std::env::var("ADMIN_PIN")
            .ok()
            .filter(|pin| !pin.is_empty());
        if admin_pin.is_none() {
            tracing::warn!("ADMIN_PIN is not set; admin endpoints will reject every request");
        }

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .map(|v| v.parse().expect("MAX_UPLOAD_BYTES must be a valid usize"))
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        let image_host = ImageHostConfig::from_env();
        if image_host.is_none() {
            tracing::warn!("IMAGE_HOST_URL is not set; image uploads are disabled");
        }

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            admin_pin,
            max_upload_bytes,
            image_host,
        }
    }
}
