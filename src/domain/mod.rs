//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod trigger;
pub mod upload;

// Re-export common types
pub use clipboard::{ClipboardSnapshot, ContentKind};
pub use config::{BackendSettings, Config, ConfigField, WireShape};
pub use error::*;
pub use trigger::{Trigger, TriggerPhase, TriggerSession};
pub use upload::{Credentials, UploadResult};
