//! Message processing
//!
//! Runs TEA messages through `update()`, following up on chained messages
//! and handing actions to the action dispatcher.

use tokio::sync::mpsc;

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

use super::actions::handle_action;

/// Process a message through the TEA update function
pub fn process_message(state: &mut AppState, message: Message, msg_tx: &mpsc::Sender<Message>) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
