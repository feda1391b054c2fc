//! Runtime backend settings (not persisted)

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidWireShapeError;

/// Default Sharify API base URL
pub const DEFAULT_API_URL: &str = "https://api.sharify.me";

/// Default paste host base URL
pub const DEFAULT_PASTE_URL: &str = "https://paste.crystaldev.co";

/// Wire contract spoken by the HTTP backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WireShape {
    /// Hand-rolled contract: plain credential headers, anonymous pastes
    Legacy,
    /// Unified API contract: bearer auth on every request
    #[default]
    Unified,
}

impl WireShape {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Unified => "unified",
        }
    }
}

impl FromStr for WireShape {
    type Err = InvalidWireShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "unified" => Ok(Self::Unified),
            _ => Err(InvalidWireShapeError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for WireShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Backend endpoints and wire shape.
/// All fields are optional to support layering defaults, env and CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendSettings {
    pub api_url: Option<String>,
    pub paste_url: Option<String>,
    pub wire_shape: Option<WireShape>,
}

impl BackendSettings {
    /// Settings with every field set to its default
    pub fn defaults() -> Self {
        Self {
            api_url: Some(DEFAULT_API_URL.to_string()),
            paste_url: Some(DEFAULT_PASTE_URL.to_string()),
            wire_shape: Some(WireShape::default()),
        }
    }

    /// Merge with another layer, where other takes precedence.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_url: other.api_url.or(self.api_url),
            paste_url: other.paste_url.or(self.paste_url),
            wire_shape: other.wire_shape.or(self.wire_shape),
        }
    }

    /// API base URL without trailing slash
    pub fn api_url_or_default(&self) -> String {
        trim_base(self.api_url.as_deref().unwrap_or(DEFAULT_API_URL))
    }

    /// Paste base URL without trailing slash
    pub fn paste_url_or_default(&self) -> String {
        trim_base(self.paste_url.as_deref().unwrap_or(DEFAULT_PASTE_URL))
    }

    pub fn wire_shape_or_default(&self) -> WireShape {
        self.wire_shape.unwrap_or_default()
    }
}

fn trim_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let settings = BackendSettings::defaults();
        assert_eq!(settings.api_url.as_deref(), Some(DEFAULT_API_URL));
        assert_eq!(settings.paste_url.as_deref(), Some(DEFAULT_PASTE_URL));
        assert_eq!(settings.wire_shape, Some(WireShape::Unified));
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = BackendSettings::defaults();
        let other = BackendSettings {
            api_url: Some("http://localhost:8080".into()),
            wire_shape: Some(WireShape::Legacy),
            ..Default::default()
        };

        let merged = base.merge(other);
        assert_eq!(merged.api_url_or_default(), "http://localhost:8080");
        assert_eq!(merged.paste_url_or_default(), DEFAULT_PASTE_URL);
        assert_eq!(merged.wire_shape_or_default(), WireShape::Legacy);
    }

    #[test]
    fn base_urls_drop_trailing_slash() {
        let settings = BackendSettings {
            paste_url: Some("https://paste.example.com/".into()),
            ..Default::default()
        };
        assert_eq!(settings.paste_url_or_default(), "https://paste.example.com");
    }

    #[test]
    fn empty_settings_fall_back_to_defaults() {
        let settings = BackendSettings::default();
        assert_eq!(settings.api_url_or_default(), DEFAULT_API_URL);
        assert_eq!(settings.wire_shape_or_default(), WireShape::Unified);
    }

    #[test]
    fn wire_shape_parses_case_insensitively() {
        assert_eq!("Legacy".parse::<WireShape>(), Ok(WireShape::Legacy));
        assert_eq!(" unified ".parse::<WireShape>(), Ok(WireShape::Unified));
        assert!("v2".parse::<WireShape>().is_err());
    }
}
