//! Clipboard snapshot and content classification

/// One read of the system clipboard.
/// Each representation is `None` when the clipboard did not offer it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardSnapshot {
    pub image: Option<Vec<u8>>,
    pub text: Option<Vec<u8>>,
}

impl ClipboardSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_image(image: impl Into<Vec<u8>>) -> Self {
        Self {
            image: Some(image.into()),
            text: None,
        }
    }

    pub fn with_text(text: impl Into<Vec<u8>>) -> Self {
        Self {
            image: None,
            text: Some(text.into()),
        }
    }

    /// Non-empty text bytes, if any
    pub fn text_bytes(&self) -> Option<&[u8]> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    /// Non-empty image bytes, if any
    pub fn image_bytes(&self) -> Option<&[u8]> {
        self.image.as_deref().filter(|i| !i.is_empty())
    }
}

/// Classified clipboard payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentKind {
    Image(Vec<u8>),
    Text(Vec<u8>),
    Empty,
}

impl ContentKind {
    /// Classify a snapshot. Image wins over text when both are present.
    pub fn classify(snapshot: ClipboardSnapshot) -> Self {
        let ClipboardSnapshot { image, text } = snapshot;
        match (image, text) {
            (Some(image), _) if !image.is_empty() => Self::Image(image),
            (_, Some(text)) if !text.is_empty() => Self::Text(text),
            _ => Self::Empty,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Image(_) => "image",
            Self::Text(_) => "text",
            Self::Empty => "empty",
        }
    }
}
