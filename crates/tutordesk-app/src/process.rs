//! Message processing
//!
//! Runs a message through `update` until no follow-up message remains,
//! handing every returned action to [`handle_action`].

use std::sync::Arc;

use tokio::sync::mpsc;
use tutordesk_api::SessionRepository;

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

use super::actions::handle_action;

/// Process a message through the TEA update function
pub fn process_message<R>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    repo: &Arc<R>,
) where
    R: SessionRepository + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), repo.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
