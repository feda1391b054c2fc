//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the Sharify HTTP services, the system clipboard,
//! desktop notifications, zenity and the JSON config file.

pub mod backend;
pub mod clipboard;
pub mod config;
pub mod dialog;
pub mod notification;

// Re-export adapters
pub use backend::HttpBackend;
pub use clipboard::{create_clipboard, ArboardClipboard};
pub use config::JsonConfigStore;
pub use dialog::{create_dialogs, ZenityDialogs};
pub use notification::{create_notifier, NotifyRustNotifier};
