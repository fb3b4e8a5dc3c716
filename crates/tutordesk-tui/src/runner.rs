//! Main TUI runner - entry point and event loop
//!
//! - `run`: sets up the terminal, issues the first fetch and drives `run_loop`
//! - `run_loop`: drains background messages, renders, then polls the terminal

use std::sync::Arc;

use tokio::sync::mpsc;
use tutordesk_api::SessionRepository;
use tutordesk_app::config::Settings;
use tutordesk_app::message::Message;
use tutordesk_app::notifications::{NotificationLevel, Subscription};
use tutordesk_app::state::AppState;
use tutordesk_app::{process, signals};
use tutordesk_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI against `repo` until the user quits
pub async fn run<R>(settings: Settings, repo: Arc<R>) -> Result<()>
where
    R: SessionRepository + Send + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    let mut state = AppState::with_settings(settings);

    // Unified message channel for background tasks and the signal handler
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    signals::spawn_signal_handler(msg_tx.clone());
    spawn_notification_logger(state.notifications.subscribe());

    // First load
    process::process_message(&mut state, Message::RefreshRequested, &msg_tx, &repo);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, repo);

    ratatui::restore();
    info!("Terminal restored");
    result
}

/// Main event loop
fn run_loop<R>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    repo: Arc<R>,
) -> Result<()>
where
    R: SessionRepository + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Results from background tasks, signals and notification timers
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, &msg_tx, &repo);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process::process_message(state, message, &msg_tx, &repo);
        }
    }

    Ok(())
}

/// Mirror every notification into the log file
fn spawn_notification_logger(mut subscription: Subscription) {
    tokio::spawn(async move {
        while let Some(note) = subscription.recv().await {
            match note.level {
                NotificationLevel::Error => warn!("[notify #{}] {}", note.id, note.text),
                _ => debug!("[notify #{}] {}", note.id, note.text),
            }
        }
    });
}
