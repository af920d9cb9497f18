use chrono::Utc;

use super::super::super::state::AppState;
use super::super::action::{TimerAction, TodoAction};
use super::super::command::{
    COMPLETING_FLASH, Command, DebounceChannel, DeleteTarget, TODO_SEARCH_QUIET,
};
use crate::domain::Todo;

pub fn reduce(state: &mut AppState, action: TodoAction) -> Vec<Command> {
    match action {
        TodoAction::InputChanged(value) => {
            state.ui.todo.input = value;
            Vec::new()
        }
        TodoAction::Add => {
            let text = state.ui.todo.input.trim().to_string();
            if text.is_empty() {
                return Vec::new();
            }

            let todo = Todo {
                id: state.domain.ids.next(),
                text,
                completed: false,
                created_at: Utc::now(),
            };
            // Newest first.
            state.domain.todos.insert(0, todo);
            state.ui.todo.input.clear();
            vec![Command::PersistTodos]
        }
        TodoAction::Toggle(id) => {
            let Some(todo) = state.domain.todos.iter_mut().find(|todo| todo.id == id) else {
                return Vec::new();
            };
            todo.completed = !todo.completed;
            state.ui.todo.completing.insert(id);
            vec![
                Command::PersistTodos,
                Command::ScheduleTimer {
                    delay: COMPLETING_FLASH,
                    task: TimerAction::ClearCompleting(id),
                },
            ]
        }
        TodoAction::SearchChanged(value) => {
            state.ui.todo.search_draft = value.clone();
            vec![Command::Debounce {
                channel: DebounceChannel::TodoSearch,
                delay: TODO_SEARCH_QUIET,
                task: TimerAction::ApplySearch { term: value },
            }]
        }
        TodoAction::SetFilter(filter) => {
            state.ui.todo.filter = filter;
            Vec::new()
        }
        TodoAction::DeleteRequested(id) => vec![Command::ConfirmDelete(DeleteTarget::Todo(id))],
        TodoAction::DeleteConfirmed(id) => {
            state.domain.todos.retain(|todo| todo.id != id);
            vec![Command::PersistTodos]
        }
    }
}

/// The search debounce settled; commit the term the last keystroke carried.
/// A pure view change: the store is untouched.
pub fn apply_search(state: &mut AppState, term: String) -> Vec<Command> {
    state.ui.todo.search_term = term.to_lowercase().trim().to_string();
    Vec::new()
}

pub fn clear_completing(state: &mut AppState, id: i64) -> Vec<Command> {
    state.ui.todo.completing.remove(&id);
    Vec::new()
}
