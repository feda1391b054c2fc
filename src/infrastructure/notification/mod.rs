//! Notification infrastructure module

mod notify_rust;

pub use notify_rust::NotifyRustNotifier;

use std::sync::Arc;

use crate::application::ports::Notifier;

/// Create the desktop notifier for the current platform
pub fn create_notifier() -> Arc<dyn Notifier> {
    Arc::new(NotifyRustNotifier::new())
}
