//! Trigger domain module

mod session;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub use session::{InvalidPhaseTransition, TriggerPhase, TriggerSession};

/// A user-initiated action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Upload whatever the clipboard holds (image first, then text)
    UploadClipboard,
    /// Shorten the URL held as clipboard text
    ShortenLink,
    /// Change a setting interactively
    Settings,
    /// Stop the trigger loop
    Quit,
}

impl Trigger {
    /// Wire name used over IPC
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UploadClipboard => "upload",
            Self::ShortenLink => "shorten",
            Self::Settings => "settings",
            Self::Quit => "quit",
        }
    }
}

/// Error when an unknown trigger name is received
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown trigger: {0}")]
pub struct UnknownTrigger(pub String);

impl FromStr for Trigger {
    type Err = UnknownTrigger;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "upload" => Ok(Self::UploadClipboard),
            "shorten" => Ok(Self::ShortenLink),
            "settings" => Ok(Self::Settings),
            "quit" => Ok(Self::Quit),
            other => Err(UnknownTrigger(other.to_string())),
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
