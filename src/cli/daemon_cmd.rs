//! Trigger command handler - sends triggers to the running daemon via IPC

use super::args::TriggerAction;
use super::ipc::create_ipc_client;
use super::presenter::Presenter;

/// Handle trigger subcommand
pub async fn handle_trigger_command(
    action: TriggerAction,
    presenter: &Presenter,
) -> Result<(), String> {
    let client = create_ipc_client();

    if !client.is_daemon_running() {
        return Err("No instance running. Start with: sharify-desktop run".to_string());
    }

    let cmd = action.command();
    let response = client
        .send_command(cmd)
        .await
        .map_err(|e| format!("Failed to communicate with daemon: {}", e))?;

    let response = response.trim();

    if let Some(stripped) = response.strip_prefix("error:") {
        return Err(stripped.trim().to_string());
    }

    match action {
        TriggerAction::Status => presenter.info(&format!("Daemon status: {}", response)),
        _ => presenter.info(&format!("Trigger sent: {}", cmd)),
    }

    Ok(())
}
