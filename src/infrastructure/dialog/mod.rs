//! Dialog infrastructure module

mod zenity;

pub use zenity::ZenityDialogs;

use std::sync::Arc;

use crate::application::ports::Dialogs;

pub fn create_dialogs() -> Arc<dyn Dialogs> {
    Arc::new(ZenityDialogs::new())
}
