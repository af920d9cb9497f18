use std::time::Instant;

use super::super::super::App;
use super::super::action::{Action, AsyncAction};

/// Mirror the in-memory todo list to storage. The write happens before
/// this returns; the outcome is fed back through the reducer.
pub fn persist_todos(app: &mut App, now: Instant) {
    let result = app
        .todo_repo
        .save_all(&app.state.domain.todos)
        .map_err(|e| format!("Failed to save todos: {e}"));

    if let Err(err) = &result {
        log::error!("{err}");
    }

    app.dispatch(Action::Async(AsyncAction::TodosPersisted(result)), now);
}
