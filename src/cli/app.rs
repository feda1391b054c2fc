//! Application wiring and the one-shot runner

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use crate::application::{
    AppPorts, SettingsOutcome, TriggerDispatcher, TriggerReport, UploadOutcome,
};
use crate::domain::config::{BackendSettings, WireShape};
use crate::domain::error::InvalidWireShapeError;
use crate::domain::trigger::Trigger;
use crate::infrastructure::{
    create_clipboard, create_dialogs, create_notifier, HttpBackend, JsonConfigStore,
};

use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variables for backend settings
pub const ENV_API_URL: &str = "SHARIFY_API_URL";
pub const ENV_PASTE_URL: &str = "SHARIFY_PASTE_URL";
pub const ENV_WIRE_SHAPE: &str = "SHARIFY_WIRE_SHAPE";

fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.trim().is_empty())
}

/// Backend settings taken from the environment
pub fn env_backend_settings() -> Result<BackendSettings, InvalidWireShapeError> {
    let wire_shape = non_empty_env(ENV_WIRE_SHAPE)
        .map(|s| s.parse::<WireShape>())
        .transpose()?;

    Ok(BackendSettings {
        api_url: non_empty_env(ENV_API_URL),
        paste_url: non_empty_env(ENV_PASTE_URL),
        wire_shape,
    })
}

/// Merge backend settings: defaults < env < cli
pub fn resolve_backend_settings(
    cli_settings: BackendSettings,
) -> Result<BackendSettings, InvalidWireShapeError> {
    Ok(BackendSettings::defaults()
        .merge(env_backend_settings()?)
        .merge(cli_settings))
}

/// Build the adapters around an already loaded config store.
pub fn build_ports(store: Arc<JsonConfigStore>, settings: &BackendSettings) -> AppPorts {
    AppPorts {
        store,
        backend: Arc::new(HttpBackend::new(settings)),
        clipboard: create_clipboard(),
        notifier: create_notifier(),
        dialogs: create_dialogs(),
    }
}

/// Run a single trigger in process and report the result.
pub async fn run_oneshot(trigger: Trigger, ports: AppPorts) -> ExitCode {
    let mut presenter = Presenter::new();
    let dispatcher = TriggerDispatcher::new(ports);

    match trigger {
        Trigger::UploadClipboard => presenter.start_spinner("Uploading clipboard..."),
        Trigger::ShortenLink => presenter.start_spinner("Shortening link..."),
        Trigger::Settings | Trigger::Quit => {}
    }

    match dispatcher.dispatch(trigger).await {
        Ok(TriggerReport::Upload(outcome)) => {
            presenter.upload_outcome(&outcome);
            match outcome {
                UploadOutcome::Failed(_) => ExitCode::from(EXIT_ERROR),
                _ => ExitCode::from(EXIT_SUCCESS),
            }
        }
        Ok(TriggerReport::Settings(outcome)) => {
            presenter.settings_outcome(&outcome);
            match outcome {
                SettingsOutcome::HostsUnavailable(_) | SettingsOutcome::DialogFailed(_) => {
                    ExitCode::from(EXIT_ERROR)
                }
                SettingsOutcome::Updated(_) | SettingsOutcome::Cancelled => {
                    ExitCode::from(EXIT_SUCCESS)
                }
            }
        }
        Ok(TriggerReport::Quit) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            presenter.stop_spinner();
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}
