//! Daemon app runner

use std::process::ExitCode;
use std::sync::Arc;

use tracing::error;

use crate::application::{AppPorts, TriggerDispatcher};

use super::app::{EXIT_ERROR, EXIT_SUCCESS};
use super::ipc::{create_ipc_server, IpcServer};
use super::pid_file::{PidFile, PidFileError};
use super::presenter::Presenter;
use super::signals::{forward_shutdown_signals, trigger_channel};

/// Run daemon mode until a quit trigger or a fatal error
pub async fn run_daemon(ports: AppPorts) -> ExitCode {
    let presenter = Presenter::new();

    let pid_file = PidFile::new();
    if let Err(e) = pid_file.acquire() {
        match e {
            PidFileError::AlreadyRunning(pid) => {
                presenter.error(&format!(
                    "Another instance is already running (PID: {})",
                    pid
                ));
            }
            _ => presenter.error(&e.to_string()),
        }
        return ExitCode::from(EXIT_ERROR);
    }

    let dispatcher = TriggerDispatcher::new(ports);
    let (tx, mut rx) = trigger_channel();

    if let Err(e) = forward_shutdown_signals(&tx) {
        presenter.error(&format!("Failed to setup signal handler: {}", e));
        return ExitCode::from(EXIT_ERROR);
    }

    let mut server = create_ipc_server();
    if let Err(e) = server.bind() {
        presenter.error(&format!("Failed to bind socket: {}", e));
        return ExitCode::from(EXIT_ERROR);
    }
    let server: Arc<dyn IpcServer> = Arc::from(server);

    let session = dispatcher.session();
    let serving = Arc::clone(&server);
    let ipc_task = tokio::spawn(async move {
        let status = Box::new(move || {
            session
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .phase()
        });
        if let Err(e) = serving.run(tx, status).await {
            error!(error = %e, "ipc server stopped");
        }
    });

    presenter.daemon_status("Started, waiting for triggers...");
    presenter.info(&format!(
        "PID: {} | Socket: {} | SIGINT: exit",
        std::process::id(),
        server.path()
    ));

    let result = dispatcher.run(&mut rx).await;

    ipc_task.abort();
    server.cleanup();
    let _ = pid_file.release();

    match result {
        Ok(()) => {
            presenter.daemon_status("Stopped");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}
