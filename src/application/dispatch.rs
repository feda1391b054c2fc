//! Sequential trigger dispatcher

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::domain::error::ConfigError;
use crate::domain::trigger::{Trigger, TriggerPhase};

use super::ports::{Backend, Clipboard, ConfigStore, Dialogs, Notifier};
use super::settings::{SettingsOutcome, SettingsUseCase};
use super::upload::{SessionHandle, UploadOutcome, UploadUseCase};

/// Adapters the application is built from
#[derive(Clone)]
pub struct AppPorts {
    pub store: Arc<dyn ConfigStore>,
    pub backend: Arc<dyn Backend>,
    pub clipboard: Arc<dyn Clipboard>,
    pub notifier: Arc<dyn Notifier>,
    pub dialogs: Arc<dyn Dialogs>,
}

type DynUpload =
    UploadUseCase<Arc<dyn ConfigStore>, Arc<dyn Backend>, Arc<dyn Clipboard>, Arc<dyn Notifier>>;
type DynSettings =
    SettingsUseCase<Arc<dyn ConfigStore>, Arc<dyn Backend>, Arc<dyn Dialogs>, Arc<dyn Notifier>>;

/// Fatal dispatcher errors
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Configuration integrity error: {0}")]
    Config(#[from] ConfigError),
}

/// What handling one trigger produced
#[derive(Debug)]
pub enum TriggerReport {
    Upload(UploadOutcome),
    Settings(SettingsOutcome),
    Quit,
}

/// Owns both use cases and hands triggers to them one at a time.
pub struct TriggerDispatcher {
    upload: DynUpload,
    settings: DynSettings,
    session: SessionHandle,
}

impl TriggerDispatcher {
    pub fn new(ports: AppPorts) -> Self {
        let session = SessionHandle::default();

        let upload = UploadUseCase::with_session(
            Arc::clone(&ports.store),
            Arc::clone(&ports.backend),
            ports.clipboard,
            Arc::clone(&ports.notifier),
            Arc::clone(&session),
        );
        let settings = SettingsUseCase::with_session(
            ports.store,
            ports.backend,
            ports.dialogs,
            ports.notifier,
            Arc::clone(&session),
        );

        Self {
            upload,
            settings,
            session,
        }
    }

    /// Current phase, for status queries
    pub fn phase(&self) -> TriggerPhase {
        self.session
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .phase()
    }

    /// Shared session handle, for status queries from other tasks
    pub fn session(&self) -> SessionHandle {
        Arc::clone(&self.session)
    }

    /// Handle a single trigger to completion.
    pub async fn dispatch(&self, trigger: Trigger) -> Result<TriggerReport, DispatchError> {
        info!(trigger = trigger.as_str(), "handling trigger");

        let report = match trigger {
            Trigger::UploadClipboard => TriggerReport::Upload(self.upload.upload_clipboard().await),
            Trigger::ShortenLink => TriggerReport::Upload(self.upload.shorten_link().await),
            Trigger::Settings => TriggerReport::Settings(self.settings.execute().await?),
            Trigger::Quit => TriggerReport::Quit,
        };

        Ok(report)
    }

    /// Consume triggers until `Quit` arrives or every sender is gone.
    ///
    /// Triggers are handled strictly in order; a trigger sent while another
    /// one is running waits in the channel.
    pub async fn run(&self, triggers: &mut mpsc::Receiver<Trigger>) -> Result<(), DispatchError> {
        while let Some(trigger) = triggers.recv().await {
            match self.dispatch(trigger).await {
                Ok(TriggerReport::Quit) => {
                    info!("quit requested");
                    return Ok(());
                }
                Ok(_) => {}
                Err(e) => {
                    error!(error = %e, "stopping trigger loop");
                    return Err(e);
                }
            }
        }

        info!("trigger channel closed");
        Ok(())
    }
}
