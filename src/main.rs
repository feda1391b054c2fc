//! Sharify desktop CLI entry point

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use sharify_desktop::application::AppPorts;
use sharify_desktop::cli::{
    app::{build_ports, resolve_backend_settings, run_oneshot, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands, TriggerAction},
    config_cmd::handle_config_command,
    logging,
    presenter::Presenter,
};
use sharify_desktop::domain::config::BackendSettings;
use sharify_desktop::domain::trigger::Trigger;
use sharify_desktop::infrastructure::JsonConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let presenter = Presenter::new();

    let cli_settings = cli.backend_settings();

    match cli.command.unwrap_or(Commands::Run) {
        // Talking to a running instance needs no local state
        Commands::Trigger { action } => send_trigger(action, &presenter).await,
        Commands::Config { action } => {
            let store = match load_store(&presenter).await {
                Ok(store) => store,
                Err(code) => return code,
            };
            match handle_config_command(action, store.as_ref(), &presenter).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    presenter.error(&e.to_string());
                    ExitCode::from(EXIT_ERROR)
                }
            }
        }
        command => {
            let ports = match prepare_ports(cli_settings, &presenter).await {
                Ok(ports) => ports,
                Err(code) => return code,
            };
            match command {
                Commands::Upload => run_oneshot(Trigger::UploadClipboard, ports).await,
                Commands::Shorten => run_oneshot(Trigger::ShortenLink, ports).await,
                Commands::Settings => run_oneshot(Trigger::Settings, ports).await,
                _ => start_daemon(ports, &presenter).await,
            }
        }
    }
}

/// Load the config file; failing to do so is fatal.
async fn load_store(presenter: &Presenter) -> Result<Arc<JsonConfigStore>, ExitCode> {
    match JsonConfigStore::load_or_create().await {
        Ok(store) => Ok(Arc::new(store)),
        Err(e) => {
            tracing::error!(error = %e, "cannot load config");
            presenter.error(&e.to_string());
            Err(ExitCode::from(EXIT_ERROR))
        }
    }
}

async fn prepare_ports(
    cli_settings: BackendSettings,
    presenter: &Presenter,
) -> Result<AppPorts, ExitCode> {
    let settings = resolve_backend_settings(cli_settings).map_err(|e| {
        presenter.error(&e.to_string());
        ExitCode::from(EXIT_USAGE_ERROR)
    })?;
    let store = load_store(presenter).await?;

    Ok(build_ports(store, &settings))
}

#[cfg(unix)]
async fn start_daemon(ports: AppPorts, _presenter: &Presenter) -> ExitCode {
    sharify_desktop::cli::run_daemon(ports).await
}

#[cfg(not(unix))]
async fn start_daemon(_ports: AppPorts, presenter: &Presenter) -> ExitCode {
    presenter.error("Daemon mode is only available on Unix. Use upload, shorten or settings.");
    ExitCode::from(EXIT_ERROR)
}

#[cfg(unix)]
async fn send_trigger(action: TriggerAction, presenter: &Presenter) -> ExitCode {
    match sharify_desktop::cli::handle_trigger_command(action, presenter).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            presenter.error(&e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

#[cfg(not(unix))]
async fn send_trigger(_action: TriggerAction, presenter: &Presenter) -> ExitCode {
    presenter.error("Triggers need a running instance, which is only available on Unix.");
    ExitCode::from(EXIT_ERROR)
}
