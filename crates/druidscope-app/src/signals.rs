//! OS signal handling for graceful shutdown

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;
use druidscope_core::prelude::*;

/// Spawn a task that turns the first termination signal into `Message::Quit`.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match wait_for_signal().await {
            Ok(signal) => {
                info!("Received {}, shutting down", signal);
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Event loop already gone, dropping quit");
                }
            }
            Err(e) => error!("Signal handler error: {}", e),
        }
    })
}

/// Wait for a termination signal and return its name.
async fn wait_for_signal() -> Result<&'static str> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let listen = |kind: SignalKind, name: &str| {
            signal(kind).map_err(|e| {
                Error::terminal(format!("Failed to install {} handler: {}", name, e))
            })
        };
        let mut sigint = listen(SignalKind::interrupt(), "SIGINT")?;
        let mut sigterm = listen(SignalKind::terminate(), "SIGTERM")?;

        let name = tokio::select! {
            _ = sigint.recv() => "SIGINT",
            _ = sigterm.recv() => "SIGTERM",
        };
        Ok(name)
    }

    #[cfg(windows)]
    {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {}", e)))?;
        Ok("Ctrl+C")
    }
}
