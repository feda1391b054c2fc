//! Configuration domain module

mod backend_settings;
mod user_config;

pub use backend_settings::{BackendSettings, WireShape, DEFAULT_API_URL, DEFAULT_PASTE_URL};
pub use user_config::{Config, ConfigField, ALL_FIELDS};
