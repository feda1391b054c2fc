//! JSON config store adapter

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::fs;
use tracing::warn;

use crate::application::ports::ConfigStore;
use crate::domain::config::{Config, ConfigField};
use crate::domain::error::ConfigError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "SHARIFY_CONFIG_DIR";

/// File name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

#[cfg(windows)]
const CONFIG_DIR_NAME: &str = ".sharifydesktop";
#[cfg(not(windows))]
const CONFIG_DIR_NAME: &str = "sharify-desktop";

/// Config store backed by `config.json`.
///
/// The file is the source of truth: reads and updates start from what is on
/// disk, so other processes writing the same file (`config set`, a one-shot
/// `settings`) are never shadowed or overwritten. The in-memory copy is only
/// the last value seen, used when the file cannot be read.
pub struct JsonConfigStore {
    path: PathBuf,
    config: Mutex<Config>,
    write_lock: tokio::sync::Mutex<()>,
}

impl JsonConfigStore {
    /// Resolve the per-user config directory.
    ///
    /// Linux: `$XDG_CONFIG_HOME/sharify-desktop`, macOS:
    /// `~/Library/Application Support/sharify-desktop`, Windows:
    /// `%AppData%\.sharifydesktop`.
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        dirs::config_dir()
            .map(|parent| parent.join(CONFIG_DIR_NAME))
            .ok_or(ConfigError::ConfigDirUnavailable)
    }

    /// Path of the config file in the default directory
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load the config from the default directory, creating it if absent.
    pub async fn load_or_create() -> Result<Self, ConfigError> {
        Self::load_or_create_in(Self::config_dir()?).await
    }

    /// Load the config from `dir`, creating the directory and an empty
    /// record if no config file exists yet.
    pub async fn load_or_create_in(dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let dir = dir.into();
        let path = dir.join(CONFIG_FILE_NAME);

        let config = if path.exists() {
            let content = fs::read_to_string(&path)
                .await
                .map_err(|e| ConfigError::ReadError(e.to_string()))?;
            Self::parse_json(&content)?
        } else {
            fs::create_dir_all(&dir)
                .await
                .map_err(|e| ConfigError::CreateDirError(e.to_string()))?;
            let config = Config::default();
            write_atomically(&path, &Self::to_json(&config)?).await?;
            config
        };

        Ok(Self {
            path,
            config: Mutex::new(config),
            write_lock: tokio::sync::Mutex::new(()),
        })
    }

    /// Parse JSON content into Config
    fn parse_json(content: &str) -> Result<Config, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Serialize Config to JSON
    fn to_json(config: &Config) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(config).map_err(|e| ConfigError::Unwritable(e.to_string()))
    }

    fn snapshot(&self) -> Config {
        self.config.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn remember(&self, config: &Config) {
        *self.config.lock().unwrap_or_else(|e| e.into_inner()) = config.clone();
    }

    /// Current file contents; `None` if the file has been removed.
    fn read_disk_blocking(&self) -> Result<Option<Config>, ConfigError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Self::parse_json(&content).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ConfigError::ReadError(e.to_string())),
        }
    }

    async fn read_disk(&self) -> Result<Option<Config>, ConfigError> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => Self::parse_json(&content).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ConfigError::ReadError(e.to_string())),
        }
    }
}

/// Write to a sibling temp file and rename it over `path`, so a crash
/// never leaves a half-written config behind.
async fn write_atomically(path: &Path, content: &str) -> Result<(), ConfigError> {
    let tmp = path.with_extension("json.tmp");

    fs::write(&tmp, content)
        .await
        .map_err(|e| ConfigError::Unwritable(e.to_string()))?;

    fs::rename(&tmp, path)
        .await
        .map_err(|e| ConfigError::Unwritable(e.to_string()))
}

#[async_trait]
impl ConfigStore for JsonConfigStore {
    fn get(&self) -> Config {
        match self.read_disk_blocking() {
            Ok(Some(config)) => {
                self.remember(&config);
                config
            }
            Ok(None) => self.snapshot(),
            Err(e) => {
                warn!(
                    error = %e,
                    path = %self.path.display(),
                    "config reread failed, using last known values"
                );
                self.snapshot()
            }
        }
    }

    async fn set_field(&self, field: ConfigField, value: &str) -> Result<(), ConfigError> {
        let _guard = self.write_lock.lock().await;

        // Start from the file so fields written by another process survive.
        let mut updated = match self.read_disk().await? {
            Some(current) => current,
            None => self.snapshot(),
        };
        updated.set(field, value);

        // Memory is only updated once the file write succeeded.
        write_atomically(&self.path, &Self::to_json(&updated)?).await?;
        self.remember(&updated);

        Ok(())
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn creates_empty_config_when_missing() {
        let dir = tempdir().unwrap();
        let config_dir = dir.path().join("nested").join("sharify-desktop");

        let store = JsonConfigStore::load_or_create_in(&config_dir).await.unwrap();

        assert_eq!(store.get(), Config::default());
        let written = std::fs::read_to_string(config_dir.join(CONFIG_FILE_NAME)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value, serde_json::json!({"token": "", "user_id": "", "host": ""}));
    }

    #[tokio::test]
    async fn loads_existing_config() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{"token":"abc","user_id":"7","host":"example.org"}"#,
        )
        .unwrap();

        let store = JsonConfigStore::load_or_create_in(dir.path()).await.unwrap();
        let config = store.get();

        assert_eq!(config.token, "abc");
        assert_eq!(config.user_id, "7");
        assert_eq!(config.host, "example.org");
    }

    #[tokio::test]
    async fn corrupt_config_is_parse_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "{not json").unwrap();

        let err = JsonConfigStore::load_or_create_in(dir.path())
            .await
            .err()
            .unwrap();

        assert!(matches!(err, ConfigError::ParseError(_)));
        assert!(err.is_environment_fatal());
    }

    #[tokio::test]
    async fn set_field_writes_through() {
        let dir = tempdir().unwrap();
        let store = JsonConfigStore::load_or_create_in(dir.path()).await.unwrap();

        store.set_field(ConfigField::Host, "example.org").await.unwrap();

        let on_disk: Config = serde_json::from_str(
            &std::fs::read_to_string(store.path()).unwrap(),
        )
        .unwrap();
        assert_eq!(
            on_disk,
            Config {
                token: String::new(),
                user_id: String::new(),
                host: "example.org".into(),
            }
        );
        assert_eq!(store.get(), on_disk);
    }

    #[tokio::test]
    async fn set_field_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = JsonConfigStore::load_or_create_in(dir.path()).await.unwrap();

        store.set_field(ConfigField::Token, "tok").await.unwrap();
        let once = std::fs::read(store.path()).unwrap();
        store.set_field(ConfigField::Token, "tok").await.unwrap();
        let twice = std::fs::read(store.path()).unwrap();

        assert_eq!(once, twice);
    }

    #[tokio::test]
    async fn reload_sees_previous_writes() {
        let dir = tempdir().unwrap();
        {
            let store = JsonConfigStore::load_or_create_in(dir.path()).await.unwrap();
            store.set_field(ConfigField::UserId, "42").await.unwrap();
        }

        let store = JsonConfigStore::load_or_create_in(dir.path()).await.unwrap();
        assert_eq!(store.get().user_id, "42");
        assert!(!dir.path().join("config.json.tmp").exists());
    }

    #[tokio::test]
    async fn failed_write_keeps_memory_unchanged() {
        let dir = tempdir().unwrap();
        let store = JsonConfigStore::load_or_create_in(dir.path()).await.unwrap();
        // A directory where the temp file should go makes the write fail.
        std::fs::create_dir(dir.path().join("config.json.tmp")).unwrap();

        let err = store.set_field(ConfigField::Token, "tok").await.unwrap_err();

        assert!(matches!(err, ConfigError::Unwritable(_)));
        assert_eq!(store.get().token, "");
    }

    #[tokio::test]
    async fn writes_from_another_store_are_kept() {
        let dir = tempdir().unwrap();
        let daemon = JsonConfigStore::load_or_create_in(dir.path()).await.unwrap();
        let cli = JsonConfigStore::load_or_create_in(dir.path()).await.unwrap();

        cli.set_field(ConfigField::Token, "tok").await.unwrap();
        assert_eq!(daemon.get().token, "tok");

        daemon.set_field(ConfigField::Host, "example.org").await.unwrap();

        let on_disk: Config =
            serde_json::from_str(&std::fs::read_to_string(daemon.path()).unwrap()).unwrap();
        assert_eq!(on_disk.token, "tok");
        assert_eq!(on_disk.host, "example.org");
        assert_eq!(cli.get(), on_disk);
    }

    #[tokio::test]
    async fn external_edit_is_seen_by_get() {
        let dir = tempdir().unwrap();
        let store = JsonConfigStore::load_or_create_in(dir.path()).await.unwrap();

        std::fs::write(store.path(), r#"{"token":"edited","user_id":"9","host":""}"#).unwrap();

        assert_eq!(store.get().token, "edited");
        assert_eq!(store.get().user_id, "9");
    }

    #[tokio::test]
    async fn corrupted_file_fails_update_and_get_keeps_last_values() {
        let dir = tempdir().unwrap();
        let store = JsonConfigStore::load_or_create_in(dir.path()).await.unwrap();
        store.set_field(ConfigField::Token, "tok").await.unwrap();

        std::fs::write(store.path(), "{broken").unwrap();

        assert_eq!(store.get().token, "tok");
        let err = store.set_field(ConfigField::Host, "x.org").await.unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "{broken");
    }

    #[test]
    fn default_dir_name_is_platform_specific() {
        if std::env::var_os(CONFIG_DIR_ENV).is_some() {
            return;
        }
        if let Ok(dir) = JsonConfigStore::config_dir() {
            assert!(dir.ends_with(CONFIG_DIR_NAME));
        }
    }
}
