//! Client for the third-party image CDN used for project images.
//!
//! [`HttpImageHost`] posts a multipart form to the configured upload URL and
//! reads the public URL back from the JSON reply. Handlers depend on the
//! [`ImageHost`] trait so tests can swap in an in-memory host.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

/// HTTP request timeout for a single upload.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default folder sent with each upload.
const DEFAULT_FOLDER: &str = "portfolio";

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for image upload failures.
#[derive(Debug, thiserror::Error)]
pub enum ImageHostError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The image host answered with a non-2xx status code.
    #[error("Image host returned HTTP {0}")]
    HttpStatus(u16),

    /// The reply did not contain a usable URL.
    #[error("Image host reply did not include a URL")]
    MissingUrl,
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// An image ready to be sent to the host.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Name the file is stored under (without folder).
    pub file_name: String,
    /// Sniffed MIME type.
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Somewhere project images can be stored and served from.
#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Store the image and return its public URL.
    async fn upload(&self, upload: ImageUpload) -> Result<String, ImageHostError>;
}

// ---------------------------------------------------------------------------
// HTTP implementation
// ---------------------------------------------------------------------------

/// Image host settings loaded from the environment.
#[derive(Debug, Clone)]
pub struct ImageHostConfig {
    /// Upload endpoint (`IMAGE_HOST_URL`).
    pub upload_url: String,
    /// Upload preset form field (`IMAGE_HOST_PRESET`).
    pub upload_preset: Option<String>,
    /// Folder form field (`IMAGE_HOST_FOLDER`, default `portfolio`).
    pub folder: String,
}

impl ImageHostConfig {
    /// Returns `None` when `IMAGE_HOST_URL` is unset or blank.
    pub fn from_env() -> Option<Self> {
        let upload_url = std::env::var("IMAGE_HOST_URL")
            .ok()
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())?;

        let upload_preset = std::env::var("IMAGE_HOST_PRESET")
            .ok()
            .filter(|p| !p.is_empty());

        let folder = std::env::var("IMAGE_HOST_FOLDER")
            .ok()
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| DEFAULT_FOLDER.into());

        Some(Self {
            upload_url,
            upload_preset,
            folder,
        })
    }
}

/// Reply body of the upload endpoint. Only the URL fields are read.
#[derive(Debug, Deserialize)]
struct UploadReply {
    secure_url: Option<String>,
    url: Option<String>,
}

/// Uploads images to a CDN over HTTP multipart.
pub struct HttpImageHost {
    client: reqwest::Client,
    config: ImageHostConfig,
}

impl HttpImageHost {
    /// Create a host client with a pre-configured HTTP client.
    pub fn new(config: ImageHostConfig) -> Result<Self, ImageHostError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl ImageHost for HttpImageHost {
    async fn upload(&self, upload: ImageUpload) -> Result<String, ImageHostError> {
        let public_id = uuid::Uuid::new_v4().to_string();
        let size = upload.bytes.len();

        let file_part = reqwest::multipart::Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(upload.content_type)?;

        let mut form = reqwest::multipart::Form::new()
            .part("file", file_part)
            .text("folder", self.config.folder.clone())
            .text("public_id", public_id.clone());

        if let Some(preset) = &self.config.upload_preset {
            form = form.text("upload_preset", preset.clone());
        }

        let response = self
            .client
            .post(&self.config.upload_url)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageHostError::HttpStatus(status.as_u16()));
        }

        let reply: UploadReply = response.json().await?;
        let url = reply
            .secure_url
            .or(reply.url)
            .filter(|u| !u.is_empty())
            .ok_or(ImageHostError::MissingUrl)?;

        tracing::debug!(%public_id, size, %url, "Image stored on host");

        Ok(url)
    }
}
