use crate::domain::{ContactField, TodoFilter};

#[derive(Debug)]
pub enum Action {
    Contact(ContactAction),
    Todo(TodoAction),
    Timer(TimerAction),
    Async(AsyncAction),
}

#[derive(Debug)]
pub enum ContactAction {
    /// A keystroke in one of the form fields.
    FieldChanged { field: ContactField, value: String },
    /// Submit the form; validates all fields synchronously.
    Submit,
    DeleteRequested(i64),
    /// The user confirmed the deletion prompt.
    DeleteConfirmed(i64),
    DismissStorageAlert,
}

#[derive(Debug)]
pub enum TodoAction {
    InputChanged(String),
    Add,
    Toggle(i64),
    /// A keystroke in the search box.
    SearchChanged(String),
    SetFilter(TodoFilter),
    DeleteRequested(i64),
    DeleteConfirmed(i64),
}

/// Work scheduled earlier that is now due. Values were captured when the
/// timer was scheduled, so a debounced validation always sees the keystroke
/// that created it.
#[derive(Debug, Clone)]
pub enum TimerAction {
    ValidateField { field: ContactField, value: String },
    ApplySearch { term: String },
    ClearCompleting(i64),
    ClearSuccessNotice,
}

/// Outcomes of runtime side effects fed back into the reducer.
#[derive(Debug)]
pub enum AsyncAction {
    MessagesPersisted(Result<(), String>),
    TodosPersisted(Result<(), String>),
}
