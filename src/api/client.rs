use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::{Map, Value};

use super::ImageUpload;
use crate::config::ApiConfig;
use crate::error::PanelError;

/// Outbound side of the prediction service.
///
/// Implementations return the raw response body whatever the HTTP status;
/// interpreting it is left to [`super::parse_outcome`].
#[async_trait]
pub trait PredictionApi: Send + Sync {
    async fn post_json(&self, path: &str, body: &Map<String, Value>) -> Result<String, PanelError>;

    async fn post_image(&self, path: &str, image: &ImageUpload) -> Result<String, PanelError>;
}

#[derive(Debug, Clone)]
pub struct HttpPredictionApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpPredictionApi {
    pub fn new(config: &ApiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|err| {
                log::warn!("Falling back to default HTTP client: {err}");
                reqwest::Client::new()
            });

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_body(response: reqwest::Response) -> Result<String, PanelError> {
        let status = response.status();
        let body = response.text().await.map_err(|err| {
            log::error!("Failed to read response body: {err}");
            PanelError::transport(err)
        })?;
        log::info!("Received {status} ({} bytes)", body.len());
        Ok(body)
    }
}

#[async_trait]
impl PredictionApi for HttpPredictionApi {
    async fn post_json(&self, path: &str, body: &Map<String, Value>) -> Result<String, PanelError> {
        let url = self.url(path);
        log::info!("POST {url} ({} fields)", body.len());
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|err| {
                log::error!("POST {url} failed: {err}");
                PanelError::transport(err)
            })?;
        Self::read_body(response).await
    }

    async fn post_image(&self, path: &str, image: &ImageUpload) -> Result<String, PanelError> {
        let url = self.url(path);
        log::info!(
            "POST {url} (image {}, {} bytes)",
            image.file_name,
            image.bytes.len()
        );
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.media_type)
            .map_err(|err| PanelError::transport(format!("invalid media type: {err}")))?;
        let form = Form::new().part("image", part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|err| {
                log::error!("POST {url} failed: {err}");
                PanelError::transport(err)
            })?;
        Self::read_body(response).await
    }
}
