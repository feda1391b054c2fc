//! Upload backend port interface

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::upload::{Credentials, UploadResult};

/// Backend errors. All of them are recoverable.
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server responded with status {status}")]
    UploadFailed { status: u16 },

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("host list unavailable: {0}")]
    HostListUnavailable(String),
}

impl BackendError {
    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UploadFailed { status } => Some(*status),
            _ => None,
        }
    }
}

/// Port for the remote upload service.
///
/// Every operation authenticates with the credentials current at the
/// time of the call.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Upload raw image bytes (PNG) and return the hosted URL.
    async fn upload_image(
        &self,
        image: &[u8],
        credentials: &Credentials,
    ) -> Result<UploadResult, BackendError>;

    /// Upload text as a paste document and return its URL.
    async fn upload_paste(
        &self,
        text: &[u8],
        credentials: &Credentials,
    ) -> Result<UploadResult, BackendError>;

    /// Create a short redirect for `long_url`.
    async fn shorten_link(
        &self,
        long_url: &str,
        credentials: &Credentials,
    ) -> Result<UploadResult, BackendError>;

    /// List the hosts the user may pick as preferred domain, in server order.
    async fn list_hosts(&self, credentials: &Credentials) -> Result<Vec<String>, BackendError>;
}

#[async_trait]
impl<T: Backend + ?Sized> Backend for Arc<T> {
    async fn upload_image(
        &self,
        image: &[u8],
        credentials: &Credentials,
    ) -> Result<UploadResult, BackendError> {
        self.as_ref().upload_image(image, credentials).await
    }

    async fn upload_paste(
        &self,
        text: &[u8],
        credentials: &Credentials,
    ) -> Result<UploadResult, BackendError> {
        self.as_ref().upload_paste(text, credentials).await
    }

    async fn shorten_link(
        &self,
        long_url: &str,
        credentials: &Credentials,
    ) -> Result<UploadResult, BackendError> {
        self.as_ref().shorten_link(long_url, credentials).await
    }

    async fn list_hosts(&self, credentials: &Credentials) -> Result<Vec<String>, BackendError> {
        self.as_ref().list_hosts(credentials).await
    }
}
