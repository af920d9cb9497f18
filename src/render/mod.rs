//! Pure view derivation.
//!
//! `render` rebuilds the whole display tree from state on every call; the
//! front-end rewrites its surface wholesale from the result. No function
//! here mutates anything, so rendering is safe to repeat at any time.

pub mod contact;
pub mod escape;
pub mod time;
pub mod todo;

pub use contact::{ContactView, MessageItem};
pub use escape::escape_text;
pub use todo::{TodoItem, TodoStats, TodoView, filter_todos};

use crate::app::state::AppState;

/// The whole display tree for one render pass.
#[derive(Debug)]
pub struct ViewModel {
    /// Raised by a failed persistence write; shown above both widgets
    /// until acknowledged.
    pub storage_alert: Option<String>,
    pub contact: ContactView,
    pub todos: TodoView,
}

/// Either a list of display items or one of the two empty tiers: an empty
/// store, or a store whose filtered view matched nothing.
#[derive(Debug, PartialEq)]
pub enum ListView<T> {
    Empty { placeholder: &'static str },
    NoMatches { placeholder: &'static str },
    Items(Vec<T>),
}

impl<T> ListView<T> {
    pub fn items(&self) -> Option<&[T]> {
        match self {
            Self::Items(items) => Some(items),
            _ => None,
        }
    }
}

pub fn render(state: &AppState) -> ViewModel {
    ViewModel {
        storage_alert: state.ui.storage_alert.clone(),
        contact: contact::contact_view(state),
        todos: todo::todo_view(state),
    }
}
