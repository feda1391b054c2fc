//! Cross-platform clipboard adapter using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland).

use std::io::Cursor;

use async_trait::async_trait;
use image::{ImageFormat, RgbaImage};
use tracing::debug;

use crate::application::ports::{Clipboard, ClipboardError};
use crate::domain::clipboard::ClipboardSnapshot;

/// Cross-platform clipboard adapter using arboard
pub struct ArboardClipboard;

impl ArboardClipboard {
    /// Create a new arboard clipboard adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode raw RGBA pixels from the clipboard as PNG bytes.
fn encode_png(width: usize, height: usize, rgba: Vec<u8>) -> Result<Vec<u8>, ClipboardError> {
    let img = RgbaImage::from_raw(width as u32, height as u32, rgba).ok_or_else(|| {
        ClipboardError::ReadFailed(format!(
            "image buffer does not match {}x{} dimensions",
            width, height
        ))
    })?;

    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| ClipboardError::ReadFailed(e.to_string()))?;
    Ok(png)
}

fn read_snapshot() -> Result<ClipboardSnapshot, ClipboardError> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| ClipboardError::ClipboardUnavailable(e.to_string()))?;

    // A missing format is reported as an error by arboard; treat it as absent.
    let image = match clipboard.get_image() {
        Ok(data) => Some(encode_png(data.width, data.height, data.bytes.into_owned())?),
        Err(e) => {
            debug!(error = %e, "no image on clipboard");
            None
        }
    };

    let text = match clipboard.get_text() {
        Ok(text) => Some(text.into_bytes()),
        Err(e) => {
            debug!(error = %e, "no text on clipboard");
            None
        }
    };

    Ok(ClipboardSnapshot { image, text })
}

#[async_trait]
impl Clipboard for ArboardClipboard {
    async fn read(&self) -> Result<ClipboardSnapshot, ClipboardError> {
        // arboard operations are blocking, so run in spawn_blocking
        tokio::task::spawn_blocking(read_snapshot)
            .await
            .map_err(|e| ClipboardError::ReadFailed(format!("Task join error: {}", e)))?
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();

        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::ClipboardUnavailable(e.to_string()))?;

            clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::CopyFailed(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn encodes_rgba_as_png() {
        let pixels = vec![255u8; 2 * 3 * 4];
        let png = encode_png(2, 3, pixels).unwrap();
        assert_eq!(&png[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn mismatched_buffer_is_read_error() {
        let err = encode_png(4, 4, vec![0u8; 10]).unwrap_err();
        assert!(matches!(err, ClipboardError::ReadFailed(_)));
    }
}
