//! Configuration port interface

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::config::{Config, ConfigField};
use crate::domain::error::ConfigError;

/// Port for the persisted user configuration.
///
/// The persisted file is the single source of truth: [`ConfigStore::get`]
/// reflects its current contents and [`ConfigStore::set_field`] updates it
/// without discarding fields written elsewhere.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Snapshot of the current configuration.
    fn get(&self) -> Config;

    /// Update one field and persist the whole record before returning.
    async fn set_field(&self, field: ConfigField, value: &str) -> Result<(), ConfigError>;

    /// Get the configuration file path.
    fn path(&self) -> PathBuf;
}

#[async_trait]
impl<T: ConfigStore + ?Sized> ConfigStore for Arc<T> {
    fn get(&self) -> Config {
        self.as_ref().get()
    }

    async fn set_field(&self, field: ConfigField, value: &str) -> Result<(), ConfigError> {
        self.as_ref().set_field(field, value).await
    }

    fn path(&self) -> PathBuf {
        self.as_ref().path()
    }
}
