//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::config::{BackendSettings, WireShape};

/// Sharify desktop - upload your clipboard and get a URL back
#[derive(Parser, Debug)]
#[command(name = "sharify-desktop")]
#[command(version)]
#[command(about = "Upload clipboard images, text and links to Sharify")]
#[command(long_about = None)]
pub struct Cli {
    /// Base URL of the Sharify API
    #[arg(long, value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Base URL of the paste host
    #[arg(long, value_name = "URL", global = true)]
    pub paste_url: Option<String>,

    /// Backend credential header layout
    #[arg(long, value_name = "SHAPE", global = true)]
    pub wire_shape: Option<WireShapeArg>,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run (default: run)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Backend settings given on the command line
    pub fn backend_settings(&self) -> BackendSettings {
        BackendSettings {
            api_url: self.api_url.clone(),
            paste_url: self.paste_url.clone(),
            wire_shape: self.wire_shape.map(WireShape::from),
        }
    }
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run in the background and wait for triggers
    Run,
    /// Upload the clipboard once and exit
    Upload,
    /// Shorten the URL on the clipboard once and exit
    Shorten,
    /// Change a setting interactively
    Settings,
    /// Send a trigger to the running instance
    Trigger {
        #[command(subcommand)]
        action: TriggerAction,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Triggers accepted by a running instance
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerAction {
    /// Upload the clipboard
    Upload,
    /// Shorten the URL on the clipboard
    Shorten,
    /// Open the settings dialogs
    Settings,
    /// Show what the instance is doing
    Status,
    /// Stop the instance
    Quit,
}

impl TriggerAction {
    /// Command line sent over IPC
    pub const fn command(&self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Shorten => "shorten",
            Self::Settings => "settings",
            Self::Status => "status",
            Self::Quit => "quit",
        }
    }
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Set a config value
    Set {
        /// Config key (token, user_id, host)
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key (token, user_id, host)
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Wire shape argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum WireShapeArg {
    Legacy,
    Unified,
}

impl From<WireShapeArg> for WireShape {
    fn from(arg: WireShapeArg) -> Self {
        match arg {
            WireShapeArg::Legacy => WireShape::Legacy,
            WireShapeArg::Unified => WireShape::Unified,
        }
    }
}
