//! Background action execution
//!
//! Every backend call runs in its own tokio task and reports back with a
//! [`Message`] on the unified channel. Nothing here touches `AppState`.

use std::sync::Arc;

use tokio::sync::mpsc;
use tutordesk_api::SessionRepository;
use tutordesk_core::prelude::*;

use crate::handler::{StatusRequest, UpdateAction};
use crate::message::Message;

/// Execute an action returned by `update`
pub fn handle_action<R>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, repo: Arc<R>)
where
    R: SessionRepository + Send + Sync + 'static,
{
    match action {
        UpdateAction::FetchSessions => {
            tokio::spawn(async move {
                let msg = match repo.fetch_sessions().await {
                    Ok(sessions) => Message::SessionsLoaded(sessions),
                    Err(e) => Message::SessionsLoadFailed {
                        error: e.to_string(),
                    },
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::FetchTests => {
            tokio::spawn(async move {
                let msg = match repo.fetch_upcoming_tests().await {
                    Ok(tests) => Message::TestsLoaded(tests),
                    Err(e) => Message::TestsLoadFailed {
                        error: e.to_string(),
                    },
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::UpdateStatuses { requests } => {
            for request in requests {
                spawn_status_update(request, msg_tx.clone(), repo.clone());
            }
        }

        UpdateAction::ExpireNotification { id, after } => {
            tokio::spawn(async move {
                tokio::time::sleep(after).await;
                send(&msg_tx, Message::NotificationExpired { id }).await;
            });
        }
    }
}

fn spawn_status_update<R>(request: StatusRequest, msg_tx: mpsc::Sender<Message>, repo: Arc<R>)
where
    R: SessionRepository + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let StatusRequest {
            id,
            status,
            generation,
        } = request;

        let msg = match repo.update_session_status(id, &status).await {
            Ok(session) => Message::StatusUpdated {
                session,
                generation,
            },
            Err(e) => Message::StatusUpdateFailed {
                id,
                error: e.to_string(),
                generation,
            },
        };
        send(&msg_tx, msg).await;
    });
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    let result = msg_tx
        .send(msg)
        .await
        .map_err(|_| Error::channel_send("background result dropped"));
    if let Err(e) = result {
        // Receiver gone: the app is shutting down
        debug!("{}", e);
    }
}
