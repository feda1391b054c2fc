//! Modal dialog port interface

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

/// Dialog errors
#[derive(Debug, Clone, Error)]
pub enum DialogError {
    #[error("zenity not found. Please install zenity.")]
    ZenityNotFound,

    #[error("Failed to show dialog: {0}")]
    ShowFailed(String),
}

/// Port for modal dialogs.
///
/// `Ok(None)` means the user dismissed the dialog.
#[async_trait]
pub trait Dialogs: Send + Sync {
    /// Let the user pick one entry of `options`.
    async fn choose(
        &self,
        title: &str,
        prompt: &str,
        options: &[String],
    ) -> Result<Option<String>, DialogError>;

    /// Ask the user for a line of free text.
    async fn enter_text(&self, title: &str, prompt: &str) -> Result<Option<String>, DialogError>;

    /// Show an error message and wait for it to be dismissed.
    async fn show_error(&self, title: &str, message: &str) -> Result<(), DialogError>;
}

/// Blanket implementation for boxed dialog types
#[async_trait]
impl Dialogs for Box<dyn Dialogs> {
    async fn choose(
        &self,
        title: &str,
        prompt: &str,
        options: &[String],
    ) -> Result<Option<String>, DialogError> {
        self.as_ref().choose(title, prompt, options).await
    }

    async fn enter_text(&self, title: &str, prompt: &str) -> Result<Option<String>, DialogError> {
        self.as_ref().enter_text(title, prompt).await
    }

    async fn show_error(&self, title: &str, message: &str) -> Result<(), DialogError> {
        self.as_ref().show_error(title, message).await
    }
}

#[async_trait]
impl<T: Dialogs + ?Sized> Dialogs for Arc<T> {
    async fn choose(
        &self,
        title: &str,
        prompt: &str,
        options: &[String],
    ) -> Result<Option<String>, DialogError> {
        self.as_ref().choose(title, prompt, options).await
    }

    async fn enter_text(&self, title: &str, prompt: &str) -> Result<Option<String>, DialogError> {
        self.as_ref().enter_text(title, prompt).await
    }

    async fn show_error(&self, title: &str, message: &str) -> Result<(), DialogError> {
        self.as_ref().show_error(title, message).await
    }
}
