//! Trigger handling state machine

use std::fmt;
use thiserror::Error;

/// Phases of handling a single trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TriggerPhase {
    #[default]
    Idle,
    Classifying,
    Uploading,
    NotifyEmpty,
    Notifying,
    Settings,
}

impl TriggerPhase {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Classifying => "classifying",
            Self::Uploading => "uploading",
            Self::NotifyEmpty => "notify-empty",
            Self::Notifying => "notifying",
            Self::Settings => "settings",
        }
    }
}

impl fmt::Display for TriggerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid phase transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid phase transition: cannot {action} while {current_phase}")]
pub struct InvalidPhaseTransition {
    pub current_phase: TriggerPhase,
    pub action: String,
}

/// Trigger session entity.
///
/// State machine:
///   IDLE -> CLASSIFYING (begin_upload)
///   CLASSIFYING -> UPLOADING (start_upload)
///   CLASSIFYING -> NOTIFY_EMPTY (clipboard_empty)
///   UPLOADING | NOTIFY_EMPTY -> NOTIFYING (notify)
///   NOTIFYING -> IDLE (complete)
///   IDLE -> SETTINGS -> IDLE (begin_settings / complete)
///   any -> IDLE (reset)
#[derive(Debug, Default)]
pub struct TriggerSession {
    phase: TriggerPhase,
}

impl TriggerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> TriggerPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == TriggerPhase::Idle
    }

    fn transition(
        &mut self,
        from: &[TriggerPhase],
        to: TriggerPhase,
        action: &str,
    ) -> Result<(), InvalidPhaseTransition> {
        if !from.contains(&self.phase) {
            return Err(InvalidPhaseTransition {
                current_phase: self.phase,
                action: action.to_string(),
            });
        }
        self.phase = to;
        Ok(())
    }

    pub fn begin_upload(&mut self) -> Result<(), InvalidPhaseTransition> {
        self.transition(&[TriggerPhase::Idle], TriggerPhase::Classifying, "begin upload")
    }

    pub fn start_upload(&mut self) -> Result<(), InvalidPhaseTransition> {
        self.transition(
            &[TriggerPhase::Classifying],
            TriggerPhase::Uploading,
            "start upload",
        )
    }

    pub fn clipboard_empty(&mut self) -> Result<(), InvalidPhaseTransition> {
        self.transition(
            &[TriggerPhase::Classifying],
            TriggerPhase::NotifyEmpty,
            "report empty clipboard",
        )
    }

    pub fn notify(&mut self) -> Result<(), InvalidPhaseTransition> {
        self.transition(
            &[TriggerPhase::Uploading, TriggerPhase::NotifyEmpty],
            TriggerPhase::Notifying,
            "notify",
        )
    }

    pub fn begin_settings(&mut self) -> Result<(), InvalidPhaseTransition> {
        self.transition(&[TriggerPhase::Idle], TriggerPhase::Settings, "open settings")
    }

    pub fn complete(&mut self) -> Result<(), InvalidPhaseTransition> {
        self.transition(
            &[TriggerPhase::Notifying, TriggerPhase::Settings],
            TriggerPhase::Idle,
            "complete",
        )
    }

    /// Return to idle from any phase
    pub fn reset(&mut self) {
        self.phase = TriggerPhase::Idle;
    }
}
