//! OS signal handling for daemon mode

use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::mpsc;
use tracing::info;

use crate::domain::trigger::Trigger;

/// Triggers that may wait behind the one being handled
pub const TRIGGER_QUEUE_DEPTH: usize = 10;

/// Create the channel every trigger source sends into.
pub fn trigger_channel() -> (mpsc::Sender<Trigger>, mpsc::Receiver<Trigger>) {
    mpsc::channel(TRIGGER_QUEUE_DEPTH)
}

/// Turn SIGINT and SIGTERM into [`Trigger::Quit`].
///
/// The quit waits in the queue like any other trigger, so an upload in
/// progress finishes first.
pub fn forward_shutdown_signals(tx: &mpsc::Sender<Trigger>) -> Result<(), std::io::Error> {
    for (kind, name) in [
        (SignalKind::interrupt(), "SIGINT"),
        (SignalKind::terminate(), "SIGTERM"),
    ] {
        let mut stream = signal(kind)?;
        let tx = tx.clone();
        tokio::spawn(async move {
            stream.recv().await;
            info!(signal = name, "received shutdown signal");
            let _ = tx.send(Trigger::Quit).await;
        });
    }

    Ok(())
}
