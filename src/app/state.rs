use std::collections::HashSet;

use crate::domain::{ContactField, IdGenerator, Message, Todo, TodoFilter};

/// All widget state in one struct, split between the record stores and the
/// transient UI layer.
#[derive(Debug, Default)]
pub struct AppState {
    pub domain: DomainState,
    pub ui: UiState,
}

/// The record stores. These are the source of truth for the session; the
/// persisted mirror follows every mutation.
#[derive(Debug, Default)]
pub struct DomainState {
    /// Inbox messages, oldest first (append order).
    pub messages: Vec<Message>,
    /// Todos, newest first (prepend order).
    pub todos: Vec<Todo>,
    pub ids: IdGenerator,
}

#[derive(Debug, Default)]
pub struct UiState {
    pub contact: ContactUi,
    pub todo: TodoUi,
    /// Raised when a persistence write fails; sticky until acknowledged or
    /// until a later write succeeds.
    pub storage_alert: Option<String>,
}

/// Transient contact-form state: drafts, inline errors, success notice.
#[derive(Debug, Default)]
pub struct ContactUi {
    pub name: String,
    pub email: String,
    pub message: String,
    pub errors: FieldErrors,
    pub success_notice: Option<String>,
}

#[derive(Debug, Default)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl ContactUi {
    pub fn draft(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set_draft(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn error(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::Name => self.errors.name.as_deref(),
            ContactField::Email => self.errors.email.as_deref(),
            ContactField::Message => self.errors.message.as_deref(),
        }
    }

    pub fn set_error(&mut self, field: ContactField, error: Option<String>) {
        match field {
            ContactField::Name => self.errors.name = error,
            ContactField::Email => self.errors.email = error,
            ContactField::Message => self.errors.message = error,
        }
    }

    /// Reset the form after a successful submission: drafts and error
    /// states both go.
    pub fn clear_form(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.errors = FieldErrors::default();
    }
}

/// Transient todo-pane state.
#[derive(Debug, Default)]
pub struct TodoUi {
    pub input: String,
    pub filter: TodoFilter,
    /// Raw search box contents; not yet applied to the view.
    pub search_draft: String,
    /// Committed search term (lowercased, trimmed) after the debounce
    /// settled. Rendering only ever reads this one.
    pub search_term: String,
    /// Todos currently in their brief post-toggle animation state.
    pub completing: HashSet<i64>,
}
