pub mod contact;
pub mod todo;

use std::time::Instant;

use super::super::App;
use super::action::{Action, ContactAction, TodoAction};
use super::command::{Command, DeleteTarget};

pub fn run(app: &mut App, command: Command, now: Instant) {
    match command {
        Command::PersistMessages => contact::persist_messages(app, now),
        Command::PersistTodos => todo::persist_todos(app, now),
        Command::ConfirmDelete(target) => confirm_delete(app, target, now),
        Command::Debounce {
            channel,
            delay,
            task,
        } => {
            app.debouncer
                .debounce(&mut app.scheduler, channel, now, delay, task);
        }
        Command::ScheduleTimer { delay, task } => {
            app.scheduler.schedule(now, delay, task);
        }
    }
}

fn confirm_delete(app: &mut App, target: DeleteTarget, now: Instant) {
    let prompt = match target {
        DeleteTarget::Message(_) => "Are you sure you want to delete this message?",
        DeleteTarget::Todo(_) => "Are you sure you want to delete this todo?",
    };

    // Declining is a normal cancelled operation, not an error.
    if !app.dialog.confirm(prompt) {
        return;
    }

    match target {
        DeleteTarget::Message(id) => {
            app.dispatch(Action::Contact(ContactAction::DeleteConfirmed(id)), now)
        }
        DeleteTarget::Todo(id) => app.dispatch(Action::Todo(TodoAction::DeleteConfirmed(id)), now),
    }
}
