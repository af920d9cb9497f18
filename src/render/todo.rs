use super::{ListView, escape::escape_text, time::short_timestamp};
use crate::app::state::AppState;
use crate::domain::{Todo, TodoFilter};

/// Display tree for the todo widget.
#[derive(Debug)]
pub struct TodoView {
    pub input_draft: String,
    pub search_draft: String,
    pub filter: TodoFilter,
    pub stats: TodoStats,
    pub list: ListView<TodoItem>,
}

/// Counts over the unfiltered store, independent of filter and search.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
}

#[derive(Debug, PartialEq)]
pub struct TodoItem {
    pub id: i64,
    /// Escaped todo text.
    pub text: String,
    pub completed: bool,
    /// Transient post-toggle animation state.
    pub completing: bool,
    pub created_at: String,
}

/// Status filter first, then the committed search term, as a pure function
/// of its inputs.
pub fn filter_todos<'a>(todos: &'a [Todo], filter: TodoFilter, search_term: &str) -> Vec<&'a Todo> {
    todos
        .iter()
        .filter(|todo| filter.matches(todo))
        .filter(|todo| search_term.is_empty() || todo.text.to_lowercase().contains(search_term))
        .collect()
}

pub fn todo_view(state: &AppState) -> TodoView {
    let filtered = filter_todos(
        &state.domain.todos,
        state.ui.todo.filter,
        &state.ui.todo.search_term,
    );

    let list = if state.domain.todos.is_empty() {
        ListView::Empty {
            placeholder: "No todos yet. Add one above!",
        }
    } else if filtered.is_empty() {
        ListView::NoMatches {
            placeholder: "No todos match your search.",
        }
    } else {
        ListView::Items(
            filtered
                .into_iter()
                .map(|todo| TodoItem {
                    id: todo.id,
                    text: escape_text(&todo.text),
                    completed: todo.completed,
                    completing: state.ui.todo.completing.contains(&todo.id),
                    created_at: short_timestamp(todo.created_at),
                })
                .collect(),
        )
    };

    TodoView {
        input_draft: state.ui.todo.input.clone(),
        search_draft: state.ui.todo.search_draft.clone(),
        filter: state.ui.todo.filter,
        stats: TodoStats {
            total: state.domain.todos.len(),
            completed: state
                .domain
                .todos
                .iter()
                .filter(|todo| todo.completed)
                .count(),
        },
        list,
    }
}
