//! CLI presenter for output formatting

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::application::{SettingsOutcome, UploadOutcome};

/// Presenter for CLI output formatting
pub struct Presenter {
    spinner: Option<ProgressBar>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self { spinner: None }
    }

    /// Start a spinner with message
    pub fn start_spinner(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
        {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Mark spinner as success and finish
    pub fn spinner_success(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✓".green(), message));
        }
    }

    /// Mark spinner as failed and finish
    pub fn spinner_fail(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✗".red(), message));
        }
    }

    /// Stop spinner without status
    pub fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout (URLs and config values)
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print daemon status
    pub fn daemon_status(&self, state: &str) {
        eprintln!("{} Daemon: {}", "●".cyan(), state);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Finish the spinner for an upload outcome. The URL goes to stdout.
    pub fn upload_outcome(&mut self, outcome: &UploadOutcome) {
        match outcome {
            UploadOutcome::Uploaded(result) => {
                self.spinner_success("URL copied to clipboard");
                self.output(&result.url);
            }
            UploadOutcome::ClipboardEmpty => {
                self.stop_spinner();
                self.warn("Clipboard is empty, nothing to upload");
            }
            UploadOutcome::Failed(e) => {
                self.spinner_fail(&e.to_string());
            }
        }
    }

    pub fn settings_outcome(&self, outcome: &SettingsOutcome) {
        let text = settings_text(outcome);
        match outcome {
            SettingsOutcome::Updated(_) => self.success(&text),
            SettingsOutcome::Cancelled => self.info(&text),
            SettingsOutcome::HostsUnavailable(_) | SettingsOutcome::DialogFailed(_) => {
                self.error(&text)
            }
        }
    }
}

/// Failure outcomes already carry the user-facing message.
fn settings_text(outcome: &SettingsOutcome) -> String {
    match outcome {
        SettingsOutcome::Updated(field) => format!("Updated {}", field),
        SettingsOutcome::Cancelled => "Settings unchanged".to_string(),
        SettingsOutcome::HostsUnavailable(message) | SettingsOutcome::DialogFailed(message) => {
            message.clone()
        }
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_lifecycle() {
        let mut presenter = Presenter::new();
        presenter.start_spinner("Uploading...");
        assert!(presenter.spinner.is_some());
        presenter.spinner_success("done");
        assert!(presenter.spinner.is_none());
    }

    #[test]
    fn host_failure_message_is_printed_once() {
        let outcome = SettingsOutcome::HostsUnavailable(
            "failed to fetch available hosts: server responded with status 500".into(),
        );

        assert_eq!(
            settings_text(&outcome),
            "failed to fetch available hosts: server responded with status 500"
        );
    }

    #[test]
    fn settings_update_names_the_field() {
        let outcome = SettingsOutcome::Updated(crate::domain::config::ConfigField::Host);
        assert_eq!(settings_text(&outcome), "Updated Host");
    }

    #[test]
    fn empty_clipboard_clears_spinner() {
        let mut presenter = Presenter::new();
        presenter.start_spinner("Uploading...");
        presenter.upload_outcome(&UploadOutcome::ClipboardEmpty);
        assert!(presenter.spinner.is_none());
    }
}
