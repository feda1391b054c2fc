//! IPC (Inter-Process Communication) module for daemon control
//!
//! One line per request, one line per response, over a Unix Domain Socket.

mod unix_socket;

pub use unix_socket::{SocketPath, UnixSocketClient, UnixSocketServer};

use std::io;

use tokio::sync::mpsc;

use crate::domain::trigger::{Trigger, TriggerPhase};

/// Status function type for IPC servers
pub type StatusFn = Box<dyn Fn() -> TriggerPhase + Send + Sync>;

/// Response for accepted triggers
pub const RESPONSE_OK: &str = "ok";

/// Request asking for the current phase
pub const STATUS_COMMAND: &str = "status";

/// Trait for IPC servers that listen for daemon commands
#[async_trait::async_trait]
pub trait IpcServer: Send + Sync {
    /// Bind to the IPC endpoint
    fn bind(&mut self) -> io::Result<()>;

    /// Get the path/name of the IPC endpoint
    fn path(&self) -> String;

    /// Accept connections and forward their triggers to `tx`.
    ///
    /// `status_fn` is called to answer status queries.
    async fn run(&self, tx: mpsc::Sender<Trigger>, status_fn: StatusFn) -> io::Result<()>;

    /// Cleanup IPC resources
    fn cleanup(&self);
}

/// Trait for IPC clients that send commands to the daemon
#[async_trait::async_trait]
pub trait IpcClient: Send + Sync {
    /// Check if daemon appears to be running (endpoint exists)
    fn is_daemon_running(&self) -> bool;

    /// Send a command and receive response
    async fn send_command(&self, cmd: &str) -> io::Result<String>;
}

/// Answer one request line. Triggers are queued; they are not awaited.
pub async fn respond(cmd: &str, tx: &mpsc::Sender<Trigger>, phase: TriggerPhase) -> String {
    let cmd = cmd.trim();

    if cmd == STATUS_COMMAND {
        return phase.as_str().to_string();
    }

    match cmd.parse::<Trigger>() {
        Ok(trigger) => match tx.send(trigger).await {
            Ok(()) => RESPONSE_OK.to_string(),
            Err(_) => "error: daemon is shutting down".to_string(),
        },
        Err(e) => format!("error: {}", e),
    }
}

/// Create the IPC server for the current platform
pub fn create_ipc_server() -> Box<dyn IpcServer> {
    Box::new(UnixSocketServer::new(SocketPath::new()))
}

/// Create the IPC client for the current platform
pub fn create_ipc_client() -> Box<dyn IpcClient> {
    Box::new(UnixSocketClient::new(SocketPath::new()))
}
