//! Clipboard content domain module

mod content;

pub use content::{ClipboardSnapshot, ContentKind};
