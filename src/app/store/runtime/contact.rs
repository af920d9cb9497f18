use std::time::Instant;

use super::super::super::App;
use super::super::action::{Action, AsyncAction};

/// Mirror the in-memory message list to storage. The write happens before
/// this returns; the outcome is fed back through the reducer.
pub fn persist_messages(app: &mut App, now: Instant) {
    let result = app
        .message_repo
        .save_all(&app.state.domain.messages)
        .map_err(|e| format!("Failed to save messages: {e}"));

    if let Err(err) = &result {
        log::error!("{err}");
    }

    app.dispatch(Action::Async(AsyncAction::MessagesPersisted(result)), now);
}
