//! OS signals: SIGINT/SIGTERM (Ctrl+C on Windows) quit the session list
//! the same way `q` does, so in-flight results are simply dropped.

use tokio::sync::mpsc;

use crate::message::Message;
use tutordesk_core::prelude::*;

/// Spawn a task that turns the first termination signal into [`Message::Quit`]
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let signal = match wait_for_signal().await {
            Ok(signal) => signal,
            Err(e) => {
                error!("Signal handler error: {}", e);
                return;
            }
        };

        info!("{} received, quitting", signal);
        if let Err(e) = request_quit(&tx).await {
            debug!("{}", e);
        }
    });
}

async fn request_quit(tx: &mpsc::Sender<Message>) -> Result<()> {
    tx.send(Message::Quit)
        .await
        .map_err(|_| Error::channel_send("quit request after shutdown"))
}

/// Wait for a termination signal and name it
async fn wait_for_signal() -> Result<&'static str> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt())
            .map_err(|e| Error::terminal(format!("Failed to create SIGINT handler: {}", e)))?;
        let mut sigterm = signal(SignalKind::terminate())
            .map_err(|e| Error::terminal(format!("Failed to create SIGTERM handler: {}", e)))?;

        tokio::select! {
            _ = sigint.recv() => Ok("SIGINT"),
            _ = sigterm.recv() => Ok("SIGTERM"),
        }
    }

    #[cfg(windows)]
    {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {}", e)))?;
        Ok("Ctrl+C")
    }
}
