//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod dispatch;
pub mod ports;
pub mod settings;
pub mod upload;

#[cfg(test)]
pub(crate) mod mocks;

// Re-export use cases
pub use dispatch::{AppPorts, DispatchError, TriggerDispatcher, TriggerReport};
pub use settings::{SettingsOutcome, SettingsUseCase, MESSAGE_DIALOG_FAILED_PREFIX};
pub use upload::{
    SessionHandle, UploadError, UploadOutcome, UploadUseCase, MESSAGE_ERR_READING_CLIPBOARD,
    MESSAGE_UPLOAD_SUCCESS, NOTIFY_TITLE,
};
