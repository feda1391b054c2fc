//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod backend;
pub mod clipboard;
pub mod config;
pub mod dialog;
pub mod notifier;

// Re-export common types
pub use backend::{Backend, BackendError};
pub use clipboard::{Clipboard, ClipboardError};
pub use config::ConfigStore;
pub use dialog::{DialogError, Dialogs};
pub use notifier::{NotificationError, NotificationIcon, Notifier};
