//! Clipboard infrastructure module

mod arboard;

pub use arboard::ArboardClipboard;

use std::sync::Arc;

use crate::application::ports::Clipboard;

/// Create the clipboard adapter for the current platform
pub fn create_clipboard() -> Arc<dyn Clipboard> {
    Arc::new(ArboardClipboard::new())
}
