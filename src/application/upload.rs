//! Clipboard upload use case

use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::clipboard::{ClipboardSnapshot, ContentKind};
use crate::domain::trigger::{InvalidPhaseTransition, TriggerSession};
use crate::domain::upload::{Credentials, UploadResult};

use super::ports::{
    Backend, BackendError, Clipboard, ClipboardError, ConfigStore, NotificationIcon, Notifier,
};

/// Title used for upload notifications
pub const NOTIFY_TITLE: &str = "Sharify";

/// Shown after the result URL was copied
pub const MESSAGE_UPLOAD_SUCCESS: &str = "URL copied to clipboard.";

/// Shown when the clipboard holds nothing usable
pub const MESSAGE_ERR_READING_CLIPBOARD: &str = "Failed to read clipboard. Please try again.";

/// Shared handle on the trigger session, read by status queries
pub type SessionHandle = Arc<Mutex<TriggerSession>>;

/// Errors from the upload use case. None of them are fatal.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("failed to upload image: {0}")]
    Image(#[source] BackendError),

    #[error("failed to upload text: {0}")]
    Text(#[source] BackendError),

    #[error("failed to shorten url: {0}")]
    Shorten(#[source] BackendError),

    #[error("failed to copy url to clipboard: {0}")]
    Clipboard(#[from] ClipboardError),
}

/// Result of one upload trigger
#[derive(Debug)]
pub enum UploadOutcome {
    /// The URL is now on the clipboard
    Uploaded(UploadResult),
    /// Nothing usable on the clipboard; no backend call was made
    ClipboardEmpty,
    /// The backend or clipboard write failed; clipboard left untouched
    Failed(UploadError),
}

impl UploadOutcome {
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Uploaded(result) => Some(&result.url),
            _ => None,
        }
    }
}

/// Upload orchestrator: classify the clipboard, call the matching backend
/// operation, put the URL back on the clipboard and notify.
pub struct UploadUseCase<S, B, C, N>
where
    S: ConfigStore,
    B: Backend,
    C: Clipboard,
    N: Notifier,
{
    store: S,
    backend: B,
    clipboard: C,
    notifier: N,
    session: SessionHandle,
}

impl<S, B, C, N> UploadUseCase<S, B, C, N>
where
    S: ConfigStore,
    B: Backend,
    C: Clipboard,
    N: Notifier,
{
    /// Create a new use case instance
    pub fn new(store: S, backend: B, clipboard: C, notifier: N) -> Self {
        Self::with_session(store, backend, clipboard, notifier, SessionHandle::default())
    }

    /// Create a use case that reports its phase through a shared session
    pub fn with_session(
        store: S,
        backend: B,
        clipboard: C,
        notifier: N,
        session: SessionHandle,
    ) -> Self {
        Self {
            store,
            backend,
            clipboard,
            notifier,
            session,
        }
    }

    /// "Upload clipboard" entry point: images go to the image host,
    /// text goes to the paste host.
    pub async fn upload_clipboard(&self) -> UploadOutcome {
        let snapshot = self.begin().await;
        let credentials = Credentials::from_config(&self.store.get());

        let kind = ContentKind::classify(snapshot);
        info!(kind = kind.as_str(), "classified clipboard");

        let result = match kind {
            ContentKind::Image(bytes) => {
                self.advance(TriggerSession::start_upload);
                self.backend
                    .upload_image(&bytes, &credentials)
                    .await
                    .map_err(UploadError::Image)
            }
            ContentKind::Text(bytes) => {
                self.advance(TriggerSession::start_upload);
                self.backend
                    .upload_paste(&bytes, &credentials)
                    .await
                    .map_err(UploadError::Text)
            }
            ContentKind::Empty => return self.finish_empty().await,
        };

        self.finish(result).await
    }

    /// "Shorten link" entry point: clipboard text always goes to the
    /// redirect service, whatever it looks like.
    pub async fn shorten_link(&self) -> UploadOutcome {
        let snapshot = self.begin().await;
        let credentials = Credentials::from_config(&self.store.get());

        // Copied links often carry a trailing newline; surrounding whitespace
        // is stripped and whitespace-only text counts as an empty clipboard.
        let long_url = snapshot
            .text_bytes()
            .map(|t| String::from_utf8_lossy(t).trim().to_string())
            .filter(|t| !t.is_empty());

        let Some(long_url) = long_url else {
            return self.finish_empty().await;
        };

        self.advance(TriggerSession::start_upload);
        let result = self
            .backend
            .shorten_link(&long_url, &credentials)
            .await
            .map_err(UploadError::Shorten);

        self.finish(result).await
    }

    async fn begin(&self) -> ClipboardSnapshot {
        self.advance(TriggerSession::begin_upload);

        match self.clipboard.read().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "clipboard read failed");
                ClipboardSnapshot::empty()
            }
        }
    }

    async fn finish_empty(&self) -> UploadOutcome {
        self.advance(TriggerSession::clipboard_empty);
        self.advance(TriggerSession::notify);
        self.show(MESSAGE_ERR_READING_CLIPBOARD, NotificationIcon::Error)
            .await;
        self.complete();
        UploadOutcome::ClipboardEmpty
    }

    async fn finish(&self, result: Result<UploadResult, UploadError>) -> UploadOutcome {
        let result = match result {
            Ok(uploaded) => self
                .clipboard
                .write_text(&uploaded.url)
                .await
                .map(|()| uploaded)
                .map_err(UploadError::from),
            Err(e) => Err(e),
        };

        self.advance(TriggerSession::notify);
        let outcome = match result {
            Ok(uploaded) => {
                info!(url = %uploaded.url, "upload complete");
                self.show(MESSAGE_UPLOAD_SUCCESS, NotificationIcon::Success)
                    .await;
                UploadOutcome::Uploaded(uploaded)
            }
            Err(e) => {
                warn!(error = %e, status = ?backend_status(&e), "upload failed");
                self.show(&e.to_string(), NotificationIcon::Error).await;
                UploadOutcome::Failed(e)
            }
        };
        self.complete();
        outcome
    }

    async fn show(&self, message: &str, icon: NotificationIcon) {
        if let Err(e) = self.notifier.notify(NOTIFY_TITLE, message, icon).await {
            debug!(error = %e, "notification not shown");
        }
    }

    fn advance(&self, step: fn(&mut TriggerSession) -> Result<(), InvalidPhaseTransition>) {
        let mut session = self.session.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = step(&mut session) {
            warn!(error = %e, "unexpected trigger phase");
        }
    }

    fn complete(&self) {
        // Every path ends idle, even after an unexpected transition.
        self.session
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .reset();
    }
}

fn backend_status(err: &UploadError) -> Option<u16> {
    match err {
        UploadError::Image(e) | UploadError::Text(e) | UploadError::Shorten(e) => e.status(),
        UploadError::Clipboard(_) => None,
    }
}
