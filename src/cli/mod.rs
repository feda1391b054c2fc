//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, logging setup,
//! and the one-shot and daemon runners. Daemon mode (PID file,
//! signals, IPC) is Unix only.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod logging;
pub mod presenter;

#[cfg(unix)]
pub mod daemon_app;
#[cfg(unix)]
pub mod daemon_cmd;
#[cfg(unix)]
pub mod ipc;
#[cfg(unix)]
pub mod pid_file;
#[cfg(unix)]
pub mod signals;

// Re-export commonly used types
pub use app::{run_oneshot, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, TriggerAction};
#[cfg(unix)]
pub use daemon_app::run_daemon;
#[cfg(unix)]
pub use daemon_cmd::handle_trigger_command;
pub use presenter::Presenter;
