use super::super::super::state::AppState;
use super::super::action::AsyncAction;
use super::super::command::Command;

/// Persistence outcomes. A failed write raises the user-visible alert but
/// never rolls back the in-memory mutation: the session keeps the attempted
/// change and only the durable copy lags.
pub fn reduce(state: &mut AppState, action: AsyncAction) -> Vec<Command> {
    match action {
        AsyncAction::MessagesPersisted(result) | AsyncAction::TodosPersisted(result) => {
            match result {
                Ok(()) => state.ui.storage_alert = None,
                Err(err) => state.ui.storage_alert = Some(err),
            }
            Vec::new()
        }
    }
}
