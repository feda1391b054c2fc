//! Persisted user configuration value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::UnknownFieldError;

/// All fields a user can change, in presentation order
pub const ALL_FIELDS: &[ConfigField] = &[ConfigField::Token, ConfigField::UserId, ConfigField::Host];

/// User configuration.
/// Every key is always written; unset values are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub host: String,
}

impl Config {
    /// Set a single field by selector
    pub fn set(&mut self, field: ConfigField, value: impl Into<String>) {
        let slot = match field {
            ConfigField::Token => &mut self.token,
            ConfigField::UserId => &mut self.user_id,
            ConfigField::Host => &mut self.host,
        };
        *slot = value.into();
    }

    /// Read a single field by selector
    pub fn get(&self, field: ConfigField) -> &str {
        match field {
            ConfigField::Token => &self.token,
            ConfigField::UserId => &self.user_id,
            ConfigField::Host => &self.host,
        }
    }

    /// Whether an API token is configured
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}

/// Name-addressable selector for one of [`Config`]'s fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigField {
    Token,
    UserId,
    Host,
}

impl ConfigField {
    /// Display name shown in the settings picker
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Token => "Token",
            Self::UserId => "UserID",
            Self::Host => "Host",
        }
    }

    /// Key used in the config file
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::UserId => "user_id",
            Self::Host => "host",
        }
    }
}

impl FromStr for ConfigField {
    type Err = UnknownFieldError;

    /// Accepts both the display name (`UserID`) and the file key (`user_id`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_FIELDS
            .iter()
            .copied()
            .find(|f| f.label() == s || f.key() == s)
            .ok_or_else(|| UnknownFieldError {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
