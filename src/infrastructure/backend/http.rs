//! HTTP backend adapter for the Sharify services

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response};
use serde::Deserialize;
use tracing::debug;

use crate::application::ports::{Backend, BackendError};
use crate::domain::config::{BackendSettings, WireShape};
use crate::domain::upload::{Credentials, UploadResult};

/// Per-request timeout; there is no retry after it fires
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// File name sent with clipboard images
pub const IMAGE_FILE_NAME: &str = "clipboard.png";

// Legacy credential headers
const LEGACY_TOKEN_HEADER: &str = "token";
const LEGACY_USER_HEADER: &str = "user-id";
const LEGACY_DOMAIN_HEADER: &str = "domain";

// Unified credential headers (token goes in Authorization)
const UNIFIED_USER_HEADER: &str = "x-user-id";
const UNIFIED_DOMAIN_HEADER: &str = "x-upload-domain";

/// `{"url": ...}` or `{"key": ...}` response envelope
#[derive(Debug, Deserialize)]
struct UrlEnvelope {
    url: Option<String>,
    key: Option<String>,
}

/// Paste host response
#[derive(Debug, Deserialize)]
struct PasteResponse {
    key: String,
}

/// Single adapter for every backend operation.
///
/// The wire shape only changes credential headers and whether pastes are
/// authenticated; endpoints, field names and status policy are shared.
pub struct HttpBackend {
    api_url: String,
    paste_url: String,
    shape: WireShape,
    client: reqwest::Client,
}

impl HttpBackend {
    /// Create a backend from resolved settings
    pub fn new(settings: &BackendSettings) -> Self {
        Self {
            api_url: settings.api_url_or_default(),
            paste_url: settings.paste_url_or_default(),
            shape: settings.wire_shape_or_default(),
            client: reqwest::Client::new(),
        }
    }

    pub fn shape(&self) -> WireShape {
        self.shape
    }

    fn api_endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }

    fn user_agent() -> String {
        format!("sharify-desktop/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Attach credential headers for the configured wire shape.
    /// Empty values are left out.
    fn authorize(&self, request: RequestBuilder, credentials: &Credentials) -> RequestBuilder {
        let (user_header, domain_header) = match self.shape {
            WireShape::Legacy => (LEGACY_USER_HEADER, LEGACY_DOMAIN_HEADER),
            WireShape::Unified => (UNIFIED_USER_HEADER, UNIFIED_DOMAIN_HEADER),
        };

        let mut request = request;
        if !credentials.token.is_empty() {
            request = match self.shape {
                WireShape::Legacy => request.header(LEGACY_TOKEN_HEADER, &credentials.token),
                WireShape::Unified => request.bearer_auth(&credentials.token),
            };
        }
        if !credentials.user_id.is_empty() {
            request = request.header(user_header, &credentials.user_id);
        }
        if let Some(domain) = credentials.domain.as_deref().filter(|d| !d.is_empty()) {
            request = request.header(domain_header, domain);
        }
        request
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, BackendError> {
        let response = request
            .header(USER_AGENT, Self::user_agent())
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "backend responded");

        if !status.is_success() {
            return Err(BackendError::UploadFailed {
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn body_text(response: Response) -> Result<String, BackendError> {
        response
            .text()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }

    /// Base used to compose `{"key": ...}` envelopes into URLs
    fn key_base(&self, credentials: &Credentials) -> String {
        match credentials.domain.as_deref().filter(|d| !d.is_empty()) {
            Some(domain) => format!("https://{}", domain),
            None => self.api_url.clone(),
        }
    }
}

/// Turn a response body into a URL: a bare URL string, or a JSON envelope
/// with either a full `url` or a `key` appended to `base`.
fn parse_url_body(body: &str, base: &str) -> Result<String, BackendError> {
    let trimmed = body.trim();

    if trimmed.is_empty() {
        return Err(BackendError::Decode("empty response body".to_string()));
    }

    if !trimmed.starts_with('{') {
        return Ok(trimmed.to_string());
    }

    let envelope: UrlEnvelope =
        serde_json::from_str(trimmed).map_err(|e| BackendError::Decode(e.to_string()))?;

    match (envelope.url, envelope.key) {
        (Some(url), _) if !url.is_empty() => Ok(url),
        (_, Some(key)) if !key.is_empty() => Ok(format!("{}/{}", base, key)),
        _ => Err(BackendError::Decode(
            "response has neither url nor key".to_string(),
        )),
    }
}

fn parse_paste_body(body: &str, paste_url: &str) -> Result<String, BackendError> {
    let response: PasteResponse =
        serde_json::from_str(body).map_err(|e| BackendError::Decode(e.to_string()))?;

    if response.key.is_empty() {
        return Err(BackendError::Decode("paste key is empty".to_string()));
    }
    Ok(format!("{}/{}", paste_url, response.key))
}

#[async_trait]
impl Backend for HttpBackend {
    async fn upload_image(
        &self,
        image: &[u8],
        credentials: &Credentials,
    ) -> Result<UploadResult, BackendError> {
        let part = Part::bytes(image.to_vec())
            .file_name(IMAGE_FILE_NAME)
            .mime_str("image/png")
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        let form = Form::new().part("file", part);

        let request = self
            .client
            .post(self.api_endpoint("upload"))
            .multipart(form);
        let response = self.send(self.authorize(request, credentials)).await?;

        let body = Self::body_text(response).await?;
        parse_url_body(&body, &self.key_base(credentials)).map(UploadResult::new)
    }

    async fn upload_paste(
        &self,
        text: &[u8],
        credentials: &Credentials,
    ) -> Result<UploadResult, BackendError> {
        let request = self
            .client
            .post(format!("{}/documents", self.paste_url))
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(text.to_vec());

        let request = match self.shape {
            WireShape::Legacy => request,
            WireShape::Unified => self.authorize(request, credentials),
        };
        let response = self.send(request).await?;

        let body = Self::body_text(response).await?;
        parse_paste_body(&body, &self.paste_url).map(UploadResult::new)
    }

    async fn shorten_link(
        &self,
        long_url: &str,
        credentials: &Credentials,
    ) -> Result<UploadResult, BackendError> {
        let form = Form::new().text("long_url", long_url.to_string());

        let request = self
            .client
            .post(self.api_endpoint("redirect"))
            .multipart(form);
        let response = self.send(self.authorize(request, credentials)).await?;

        let body = Self::body_text(response).await?;
        parse_url_body(&body, &self.key_base(credentials)).map(UploadResult::new)
    }

    async fn list_hosts(&self, credentials: &Credentials) -> Result<Vec<String>, BackendError> {
        let request = self.client.get(self.api_endpoint("hosts"));

        let response = self
            .send(self.authorize(request, credentials))
            .await
            .map_err(|e| BackendError::HostListUnavailable(e.to_string()))?;

        response
            .json::<Vec<String>>()
            .await
            .map_err(|e| BackendError::HostListUnavailable(e.to_string()))
    }
}
