use std::time::Duration;

use super::action::TimerAction;
use crate::domain::ContactField;

/// Quiet period for contact-form field validation.
pub const CONTACT_FIELD_QUIET: Duration = Duration::from_millis(300);
/// Quiet period for the todo search box.
pub const TODO_SEARCH_QUIET: Duration = Duration::from_millis(400);
/// How long a toggled todo keeps its "completing" animation state.
pub const COMPLETING_FLASH: Duration = Duration::from_millis(500);
/// How long the contact submission notice stays up.
pub const SUCCESS_NOTICE_TTL: Duration = Duration::from_secs(3);

/// One debounced evaluation channel. Each channel holds at most one pending
/// timer; a newer event replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebounceChannel {
    ContactField(ContactField),
    TodoSearch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Message(i64),
    Todo(i64),
}

/// Side effects emitted by the reducer and executed by the runtime.
#[derive(Debug, Clone)]
pub enum Command {
    /// Mirror the in-memory message list to storage.
    PersistMessages,
    /// Mirror the in-memory todo list to storage.
    PersistTodos,
    /// Ask the user before deleting; dispatches the confirmed action only
    /// on a yes.
    ConfirmDelete(DeleteTarget),
    /// (Re)start the quiet-period timer on a channel.
    Debounce {
        channel: DebounceChannel,
        delay: Duration,
        task: TimerAction,
    },
    /// Fire-and-forget timer; nothing ever cancels it.
    ScheduleTimer { delay: Duration, task: TimerAction },
}
