//! Domain error types

use thiserror::Error;

/// Error when an unknown config field name is provided
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown config field: \"{input}\". Valid fields are: Token, UserID, Host")]
pub struct UnknownFieldError {
    pub input: String,
}

/// Error when an unknown wire shape is provided
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid wire shape: \"{input}\". Valid shapes are: legacy, unified")]
pub struct InvalidWireShapeError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Unable to get config path: no user config directory")]
    ConfigDirUnavailable,

    #[error("Unable to create config folder: {0}")]
    CreateDirError(String),

    #[error("Unable to read existing config file: {0}")]
    ReadError(String),

    #[error("Unable to parse existing config file: {0}")]
    ParseError(String),

    #[error("Unable to save config: {0}")]
    Unwritable(String),

    #[error(transparent)]
    UnknownField(#[from] UnknownFieldError),
}

impl ConfigError {
    /// Whether the error comes from the local environment at load time
    /// rather than from a field update.
    pub fn is_environment_fatal(&self) -> bool {
        matches!(
            self,
            Self::ConfigDirUnavailable
                | Self::CreateDirError(_)
                | Self::ReadError(_)
                | Self::ParseError(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_errors_are_environment_fatal() {
        assert!(ConfigError::ReadError("denied".into()).is_environment_fatal());
        assert!(ConfigError::ParseError("eof".into()).is_environment_fatal());
        assert!(ConfigError::ConfigDirUnavailable.is_environment_fatal());
    }

    #[test]
    fn set_field_errors_are_not_environment_fatal() {
        assert!(!ConfigError::Unwritable("read-only".into()).is_environment_fatal());
        let unknown = ConfigError::from(UnknownFieldError {
            input: "Color".into(),
        });
        assert!(!unknown.is_environment_fatal());
        assert!(unknown.to_string().contains("Color"));
    }
}
