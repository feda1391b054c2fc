//! Upload value objects

use crate::domain::config::Config;

/// URL returned by a backend for an uploaded item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    pub url: String,
}

impl UploadResult {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Credentials attached to a backend request, derived from [`Config`]
/// at the start of each trigger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub user_id: String,
    /// Preferred upload domain, only set for authenticated users
    pub domain: Option<String>,
}

impl Credentials {
    pub fn from_config(config: &Config) -> Self {
        let domain = if config.is_authenticated() && !config.host.is_empty() {
            Some(config.host.clone())
        } else {
            None
        };

        Self {
            token: config.token.clone(),
            user_id: config.user_id.clone(),
            domain,
        }
    }
}
