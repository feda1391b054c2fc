//! Interactive settings use case

use tracing::{debug, info, warn};

use crate::domain::config::{ConfigField, ALL_FIELDS};
use crate::domain::error::ConfigError;
use crate::domain::upload::Credentials;

use super::ports::{Backend, ConfigStore, DialogError, Dialogs, NotificationIcon, Notifier};
use super::upload::SessionHandle;

/// Result of one settings run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsOutcome {
    /// The field was written to the config file
    Updated(ConfigField),
    /// The user dismissed a dialog
    Cancelled,
    /// Host listing failed; nothing was changed
    HostsUnavailable(String),
    /// The dialog tool could not be run; nothing was changed
    DialogFailed(String),
}

/// Notification shown when the dialogs cannot be displayed
pub const MESSAGE_DIALOG_FAILED_PREFIX: &str = "failed to open settings";

/// Why a settings run stopped before writing anything
enum Abort {
    Hosts(String),
    Dialog(DialogError),
    Config(ConfigError),
}

impl From<DialogError> for Abort {
    fn from(e: DialogError) -> Self {
        Self::Dialog(e)
    }
}

impl From<ConfigError> for Abort {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Settings flow: pick a field, capture a value, persist it.
pub struct SettingsUseCase<S, B, D, N>
where
    S: ConfigStore,
    B: Backend,
    D: Dialogs,
    N: Notifier,
{
    store: S,
    backend: B,
    dialogs: D,
    notifier: N,
    session: SessionHandle,
}

impl<S, B, D, N> SettingsUseCase<S, B, D, N>
where
    S: ConfigStore,
    B: Backend,
    D: Dialogs,
    N: Notifier,
{
    pub fn new(store: S, backend: B, dialogs: D, notifier: N) -> Self {
        Self::with_session(store, backend, dialogs, notifier, SessionHandle::default())
    }

    pub fn with_session(
        store: S,
        backend: B,
        dialogs: D,
        notifier: N,
        session: SessionHandle,
    ) -> Self {
        Self {
            store,
            backend,
            dialogs,
            notifier,
            session,
        }
    }

    /// Run the flow once.
    ///
    /// Only config failures are errors: an unknown field from the picker or
    /// a value that cannot be persisted means the config file can no longer
    /// be trusted and callers should stop.
    pub async fn execute(&self) -> Result<SettingsOutcome, ConfigError> {
        {
            let mut session = self.session.lock().unwrap_or_else(|e| e.into_inner());
            if let Err(e) = session.begin_settings() {
                warn!(error = %e, "unexpected trigger phase");
            }
        }

        let outcome = self.run().await;

        self.session
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .reset();
        outcome
    }

    async fn run(&self) -> Result<SettingsOutcome, ConfigError> {
        let (field, value) = match self.collect().await {
            Ok(Some(choice)) => choice,
            Ok(None) => return Ok(SettingsOutcome::Cancelled),
            Err(Abort::Hosts(message)) => return Ok(SettingsOutcome::HostsUnavailable(message)),
            Err(Abort::Dialog(e)) => return Ok(self.dialog_failed(e).await),
            Err(Abort::Config(e)) => return Err(e),
        };

        self.store.set_field(field, &value).await?;
        info!(field = field.key(), "setting updated");

        let message = format!("Successfully updated {}!", field);
        self.show("Success", &message, NotificationIcon::Success).await;

        Ok(SettingsOutcome::Updated(field))
    }

    /// Ask for the field and its new value; `None` if the user cancelled.
    async fn collect(&self) -> Result<Option<(ConfigField, String)>, Abort> {
        let Some(field) = self.pick_field().await? else {
            return Ok(None);
        };

        let value = match field {
            ConfigField::Host => self.pick_host().await?,
            ConfigField::Token | ConfigField::UserId => {
                let prompt = format!("Enter your {}", field);
                let title = format!("Update {}", field);
                self.dialogs.enter_text(&title, &prompt).await?
            }
        };

        Ok(value.map(|value| (field, value)))
    }

    async fn pick_field(&self) -> Result<Option<ConfigField>, Abort> {
        let options: Vec<String> = ALL_FIELDS.iter().map(|f| f.label().to_string()).collect();

        let choice = self
            .dialogs
            .choose("Settings", "Select a setting to change:", &options)
            .await?;

        // The picker only offers known labels, so a miss is an integrity error.
        let field = choice
            .map(|label| label.parse::<ConfigField>().map_err(ConfigError::from))
            .transpose()?;
        Ok(field)
    }

    async fn pick_host(&self) -> Result<Option<String>, Abort> {
        let credentials = Credentials::from_config(&self.store.get());

        let hosts = match self.backend.list_hosts(&credentials).await {
            Ok(hosts) => hosts,
            Err(e) => {
                let message = format!("failed to fetch available hosts: {}", e);
                warn!(error = %e, "host listing failed");
                if let Err(e) = self.dialogs.show_error("Error", &message).await {
                    debug!(error = %e, "error dialog not shown");
                }
                return Err(Abort::Hosts(message));
            }
        };

        Ok(self.dialogs.choose("Hosts", "Select a host:", &hosts).await?)
    }

    async fn dialog_failed(&self, e: DialogError) -> SettingsOutcome {
        warn!(error = %e, "settings dialog failed");
        let message = format!("{}: {}", MESSAGE_DIALOG_FAILED_PREFIX, e);
        self.show("Error", &message, NotificationIcon::Error).await;
        SettingsOutcome::DialogFailed(message)
    }

    async fn show(&self, title: &str, message: &str, icon: NotificationIcon) {
        if let Err(e) = self.notifier.notify(title, message, icon).await {
            debug!(error = %e, "notification not shown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::mocks::{MockBackend, MockNotifier, MockStore, ScriptedDialogs};
    use crate::application::ports::BackendError;
    use crate::domain::config::Config;
    use std::sync::Arc;

    struct Harness {
        store: Arc<MockStore>,
        backend: Arc<MockBackend>,
        notifier: Arc<MockNotifier>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                store: Arc::new(MockStore::default()),
                backend: Arc::new(MockBackend::default()),
                notifier: Arc::new(MockNotifier::default()),
            }
        }

        fn use_case(
            &self,
            dialogs: ScriptedDialogs,
        ) -> SettingsUseCase<Arc<MockStore>, Arc<MockBackend>, ScriptedDialogs, Arc<MockNotifier>>
        {
            SettingsUseCase::new(
                Arc::clone(&self.store),
                Arc::clone(&self.backend),
                dialogs,
                Arc::clone(&self.notifier),
            )
        }
    }

    #[tokio::test]
    async fn cancelling_field_picker_is_noop() {
        let h = Harness::new();
        let outcome = h.use_case(ScriptedDialogs::answering(&[None])).execute().await;

        assert_eq!(outcome.unwrap(), SettingsOutcome::Cancelled);
        assert!(h.store.writes().is_empty());
        assert!(h.notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn field_picker_offers_all_fields() {
        let h = Harness::new();
        let dialogs = ScriptedDialogs::answering(&[None]);
        let use_case = SettingsUseCase::new(
            Arc::clone(&h.store),
            Arc::clone(&h.backend),
            Arc::new(dialogs),
            Arc::clone(&h.notifier),
        );
        use_case.execute().await.unwrap();

        let prompts = use_case.dialogs.prompts();
        assert_eq!(prompts[0].1, vec!["Token", "UserID", "Host"]);
    }

    #[tokio::test]
    async fn token_entry_is_persisted_and_announced() {
        let h = Harness::new();
        let outcome = h
            .use_case(ScriptedDialogs::answering(&[Some("Token"), Some("s3cret")]))
            .execute()
            .await
            .unwrap();

        assert_eq!(outcome, SettingsOutcome::Updated(ConfigField::Token));
        assert_eq!(h.store.writes(), vec![(ConfigField::Token, "s3cret".to_string())]);
        assert_eq!(h.notifier.messages(), vec!["Successfully updated Token!"]);
        assert!(h.backend.calls().is_empty());
    }

    #[tokio::test]
    async fn cancelling_entry_aborts() {
        let h = Harness::new();
        let outcome = h
            .use_case(ScriptedDialogs::answering(&[Some("UserID"), None]))
            .execute()
            .await
            .unwrap();

        assert_eq!(outcome, SettingsOutcome::Cancelled);
        assert!(h.store.writes().is_empty());
    }

    #[tokio::test]
    async fn host_is_picked_from_remote_list() {
        let h = Harness::new();
        *h.store.config.lock().unwrap() = Config {
            token: "tok".into(),
            ..Default::default()
        };
        *h.backend.hosts.lock().unwrap() =
            Some(Ok(vec!["a.example".to_string(), "example.org".to_string()]));

        let outcome = h
            .use_case(ScriptedDialogs::answering(&[Some("Host"), Some("example.org")]))
            .execute()
            .await
            .unwrap();

        assert_eq!(outcome, SettingsOutcome::Updated(ConfigField::Host));
        assert_eq!(h.store.get().host, "example.org");
        assert_eq!(h.store.get().token, "tok");
        assert_eq!(h.backend.calls()[0].2.token, "tok");
    }

    #[tokio::test]
    async fn host_listing_failure_shows_error_and_changes_nothing() {
        let h = Harness::new();
        *h.backend.hosts.lock().unwrap() = Some(Err(BackendError::HostListUnavailable(
            "server responded with status 500".into(),
        )));
        let dialogs = Arc::new(ScriptedDialogs::answering(&[Some("Host")]));
        let use_case = SettingsUseCase::new(
            Arc::clone(&h.store),
            Arc::clone(&h.backend),
            Arc::clone(&dialogs),
            Arc::clone(&h.notifier),
        );

        let outcome = use_case.execute().await.unwrap();

        assert!(matches!(outcome, SettingsOutcome::HostsUnavailable(ref m) if m.contains("500")));
        assert!(h.store.writes().is_empty());
        assert_eq!(dialogs.errors().len(), 1);
        assert!(dialogs.errors()[0].starts_with("failed to fetch available hosts"));
        assert!(h.notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn cancelling_host_list_aborts() {
        let h = Harness::new();
        *h.backend.hosts.lock().unwrap() = Some(Ok(vec!["a.example".to_string()]));

        let outcome = h
            .use_case(ScriptedDialogs::answering(&[Some("Host"), None]))
            .execute()
            .await
            .unwrap();

        assert_eq!(outcome, SettingsOutcome::Cancelled);
        assert!(h.store.writes().is_empty());
    }

    #[tokio::test]
    async fn unknown_field_from_picker_is_integrity_error() {
        let h = Harness::new();
        let result = h
            .use_case(ScriptedDialogs::answering(&[Some("Colour")]))
            .execute()
            .await;

        assert!(matches!(result, Err(ConfigError::UnknownField(_))));
        assert!(h.store.writes().is_empty());
    }

    #[tokio::test]
    async fn missing_dialog_tool_is_reported_not_cancelled() {
        let h = Harness::new();
        let outcome = h
            .use_case(ScriptedDialogs::failing(DialogError::ZenityNotFound))
            .execute()
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            SettingsOutcome::DialogFailed(ref m) if m.contains("zenity not found")
        ));
        assert!(h.store.writes().is_empty());
        let sent = h.notifier.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].1.starts_with(MESSAGE_DIALOG_FAILED_PREFIX));
        assert_eq!(sent[0].2, NotificationIcon::Error);
    }

    #[tokio::test]
    async fn entry_dialog_crash_is_reported() {
        let h = Harness::new();
        let dialogs = ScriptedDialogs::answering(&[Some("Token")])
            .then_fail(DialogError::ShowFailed("killed".into()));

        let outcome = h.use_case(dialogs).execute().await.unwrap();

        assert!(matches!(outcome, SettingsOutcome::DialogFailed(ref m) if m.contains("killed")));
        assert!(h.store.writes().is_empty());
    }

    #[tokio::test]
    async fn unwritable_config_is_fatal() {
        let store = Arc::new(MockStore::unwritable());
        let notifier = Arc::new(MockNotifier::default());
        let use_case = SettingsUseCase::new(
            Arc::clone(&store),
            Arc::new(MockBackend::default()),
            ScriptedDialogs::answering(&[Some("UserID"), Some("42")]),
            Arc::clone(&notifier),
        );

        let result = use_case.execute().await;

        assert!(matches!(result, Err(ConfigError::Unwritable(_))));
        assert_eq!(store.get().user_id, "");
        assert!(notifier.messages().is_empty());
    }
}
