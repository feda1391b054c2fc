//! Clipboard port interface

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::clipboard::ClipboardSnapshot;

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Failed to read clipboard: {0}")]
    ReadFailed(String),

    #[error("Failed to copy to clipboard: {0}")]
    CopyFailed(String),
}

/// Port for clipboard operations
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Read the current clipboard contents in every supported format.
    ///
    /// Formats the clipboard does not hold are `None` in the snapshot;
    /// only a failure to reach the clipboard at all is an error.
    async fn read(&self) -> Result<ClipboardSnapshot, ClipboardError>;

    /// Replace the clipboard contents with text.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Blanket implementation for boxed clipboard types
#[async_trait]
impl Clipboard for Box<dyn Clipboard> {
    async fn read(&self) -> Result<ClipboardSnapshot, ClipboardError> {
        self.as_ref().read().await
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.as_ref().write_text(text).await
    }
}

#[async_trait]
impl<T: Clipboard + ?Sized> Clipboard for Arc<T> {
    async fn read(&self) -> Result<ClipboardSnapshot, ClipboardError> {
        self.as_ref().read().await
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.as_ref().write_text(text).await
    }
}
