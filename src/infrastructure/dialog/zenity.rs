//! zenity dialog adapter

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{DialogError, Dialogs};

/// zenity exits with this code when the user cancels or closes a dialog
const CANCELLED_EXIT_CODE: i32 = 1;

/// Modal dialogs rendered by the `zenity` tool
pub struct ZenityDialogs {
    program: String,
}

impl ZenityDialogs {
    pub fn new() -> Self {
        Self {
            program: "zenity".to_string(),
        }
    }

    /// Use a different zenity-compatible executable
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run zenity and return its trimmed stdout, or `None` on cancel.
    async fn run(&self, args: &[String]) -> Result<Option<String>, DialogError> {
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    DialogError::ZenityNotFound
                } else {
                    DialogError::ShowFailed(e.to_string())
                }
            })?;

        match output.status.code() {
            Some(0) => {
                let answer = String::from_utf8_lossy(&output.stdout)
                    .trim_end_matches(['\r', '\n'])
                    .to_string();
                Ok(Some(answer))
            }
            Some(CANCELLED_EXIT_CODE) => Ok(None),
            _ => Err(DialogError::ShowFailed(format!(
                "{} exited with status: {}",
                self.program, output.status
            ))),
        }
    }
}

impl Default for ZenityDialogs {
    fn default() -> Self {
        Self::new()
    }
}

fn list_args(title: &str, prompt: &str, options: &[String]) -> Vec<String> {
    let mut args = vec![
        "--list".to_string(),
        format!("--title={}", title),
        format!("--text={}", prompt),
        "--column=".to_string(),
        "--hide-header".to_string(),
    ];
    args.extend(options.iter().cloned());
    args
}

fn entry_args(title: &str, prompt: &str) -> Vec<String> {
    vec![
        "--entry".to_string(),
        format!("--title={}", title),
        format!("--text={}", prompt),
    ]
}

fn error_args(title: &str, message: &str) -> Vec<String> {
    vec![
        "--error".to_string(),
        format!("--title={}", title),
        format!("--text={}", message),
        "--no-markup".to_string(),
    ]
}

#[async_trait]
impl Dialogs for ZenityDialogs {
    async fn choose(
        &self,
        title: &str,
        prompt: &str,
        options: &[String],
    ) -> Result<Option<String>, DialogError> {
        let picked = self.run(&list_args(title, prompt, options)).await?;
        // An OK press with nothing selected counts as a dismissal.
        Ok(picked.filter(|choice| !choice.is_empty()))
    }

    async fn enter_text(&self, title: &str, prompt: &str) -> Result<Option<String>, DialogError> {
        self.run(&entry_args(title, prompt)).await
    }

    async fn show_error(&self, title: &str, message: &str) -> Result<(), DialogError> {
        // Closing an error dialog is not a failure
        self.run(&error_args(title, message)).await.map(|_| ())
    }
}
