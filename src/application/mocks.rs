//! In-memory port implementations shared by the use case tests

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::clipboard::ClipboardSnapshot;
use crate::domain::config::{Config, ConfigField};
use crate::domain::error::ConfigError;
use crate::domain::upload::{Credentials, UploadResult};

use super::ports::{
    Backend, BackendError, Clipboard, ClipboardError, ConfigStore, DialogError, Dialogs,
    NotificationError, NotificationIcon, Notifier,
};

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|e| e.into_inner())
}

#[derive(Default)]
pub struct MockStore {
    pub config: Mutex<Config>,
    pub writes: Mutex<Vec<(ConfigField, String)>>,
    pub read_only: bool,
}

impl MockStore {
    pub fn with_config(config: Config) -> Self {
        Self {
            config: Mutex::new(config),
            ..Default::default()
        }
    }

    /// Store whose every write fails as if the file were read-only
    pub fn unwritable() -> Self {
        Self {
            read_only: true,
            ..Default::default()
        }
    }

    pub fn writes(&self) -> Vec<(ConfigField, String)> {
        lock(&self.writes).clone()
    }
}

#[async_trait]
impl ConfigStore for MockStore {
    fn get(&self) -> Config {
        lock(&self.config).clone()
    }

    async fn set_field(&self, field: ConfigField, value: &str) -> Result<(), ConfigError> {
        if self.read_only {
            return Err(ConfigError::Unwritable("read-only file system".into()));
        }
        lock(&self.config).set(field, value);
        lock(&self.writes).push((field, value.to_string()));
        Ok(())
    }

    fn path(&self) -> PathBuf {
        PathBuf::from("/tmp/sharify-desktop-test/config.json")
    }
}

/// Backend returning canned responses and recording every call
#[derive(Default)]
pub struct MockBackend {
    pub image: Mutex<Option<Result<UploadResult, BackendError>>>,
    pub paste: Mutex<Option<Result<UploadResult, BackendError>>>,
    pub shorten: Mutex<Option<Result<UploadResult, BackendError>>>,
    pub hosts: Mutex<Option<Result<Vec<String>, BackendError>>>,
    pub calls: Mutex<Vec<(String, Vec<u8>, Credentials)>>,
}

impl MockBackend {
    pub fn calls(&self) -> Vec<(String, Vec<u8>, Credentials)> {
        lock(&self.calls).clone()
    }

    pub fn call_names(&self) -> Vec<String> {
        lock(&self.calls).iter().map(|(n, _, _)| n.clone()).collect()
    }

    fn record(&self, name: &str, body: &[u8], credentials: &Credentials) {
        lock(&self.calls).push((name.to_string(), body.to_vec(), credentials.clone()));
    }

    fn take<T>(slot: &Mutex<Option<Result<T, BackendError>>>) -> Result<T, BackendError> {
        lock(slot)
            .take()
            .unwrap_or_else(|| Err(BackendError::Transport("no canned response".into())))
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn upload_image(
        &self,
        image: &[u8],
        credentials: &Credentials,
    ) -> Result<UploadResult, BackendError> {
        self.record("image", image, credentials);
        Self::take(&self.image)
    }

    async fn upload_paste(
        &self,
        text: &[u8],
        credentials: &Credentials,
    ) -> Result<UploadResult, BackendError> {
        self.record("paste", text, credentials);
        Self::take(&self.paste)
    }

    async fn shorten_link(
        &self,
        long_url: &str,
        credentials: &Credentials,
    ) -> Result<UploadResult, BackendError> {
        self.record("shorten", long_url.as_bytes(), credentials);
        Self::take(&self.shorten)
    }

    async fn list_hosts(&self, credentials: &Credentials) -> Result<Vec<String>, BackendError> {
        self.record("hosts", &[], credentials);
        Self::take(&self.hosts)
    }
}

pub struct MockClipboard {
    pub snapshot: Result<ClipboardSnapshot, ClipboardError>,
    pub written: Mutex<Option<String>>,
}

impl MockClipboard {
    pub fn holding(snapshot: ClipboardSnapshot) -> Self {
        Self {
            snapshot: Ok(snapshot),
            written: Mutex::new(None),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            snapshot: Err(ClipboardError::ClipboardUnavailable("no display".into())),
            written: Mutex::new(None),
        }
    }

    pub fn written(&self) -> Option<String> {
        lock(&self.written).clone()
    }
}

#[async_trait]
impl Clipboard for MockClipboard {
    async fn read(&self) -> Result<ClipboardSnapshot, ClipboardError> {
        self.snapshot.clone()
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        *lock(&self.written) = Some(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct MockNotifier {
    pub sent: Mutex<Vec<(String, String, NotificationIcon)>>,
}

impl MockNotifier {
    pub fn messages(&self) -> Vec<String> {
        lock(&self.sent).iter().map(|(_, m, _)| m.clone()).collect()
    }

    pub fn sent(&self) -> Vec<(String, String, NotificationIcon)> {
        lock(&self.sent).clone()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        lock(&self.sent).push((title.to_string(), message.to_string(), icon));
        Ok(())
    }
}

/// Dialogs answering from a script; `None` answers mean "cancelled".
/// Once the script runs out, `failure` (if set) is returned instead.
#[derive(Default)]
pub struct ScriptedDialogs {
    pub answers: Mutex<VecDeque<Option<String>>>,
    pub failure: Option<DialogError>,
    pub prompts: Mutex<Vec<(String, Vec<String>)>>,
    pub errors: Mutex<Vec<String>>,
}

impl ScriptedDialogs {
    pub fn answering(answers: &[Option<&str>]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|a| a.map(str::to_string)).collect()),
            ..Default::default()
        }
    }

    /// Every dialog fails with `error`
    pub fn failing(error: DialogError) -> Self {
        Self::default().then_fail(error)
    }

    pub fn then_fail(mut self, error: DialogError) -> Self {
        self.failure = Some(error);
        self
    }

    pub fn prompts(&self) -> Vec<(String, Vec<String>)> {
        lock(&self.prompts).clone()
    }

    pub fn errors(&self) -> Vec<String> {
        lock(&self.errors).clone()
    }

    fn next(&self) -> Result<Option<String>, DialogError> {
        match lock(&self.answers).pop_front() {
            Some(answer) => Ok(answer),
            None => match &self.failure {
                Some(e) => Err(e.clone()),
                None => Ok(None),
            },
        }
    }
}

#[async_trait]
impl Dialogs for ScriptedDialogs {
    async fn choose(
        &self,
        _title: &str,
        prompt: &str,
        options: &[String],
    ) -> Result<Option<String>, DialogError> {
        lock(&self.prompts).push((prompt.to_string(), options.to_vec()));
        self.next()
    }

    async fn enter_text(&self, _title: &str, prompt: &str) -> Result<Option<String>, DialogError> {
        lock(&self.prompts).push((prompt.to_string(), Vec::new()));
        self.next()
    }

    async fn show_error(&self, _title: &str, message: &str) -> Result<(), DialogError> {
        lock(&self.errors).push(message.to_string());
        Ok(())
    }
}
