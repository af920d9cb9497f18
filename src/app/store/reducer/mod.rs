pub mod async_handler;
pub mod contact;
pub mod todo;

use super::super::state::AppState;
use super::action::{Action, TimerAction};
use super::command::Command;

pub fn reduce(state: &mut AppState, action: Action) -> Vec<Command> {
    match action {
        Action::Contact(action) => contact::reduce(state, action),
        Action::Todo(action) => todo::reduce(state, action),
        Action::Timer(action) => reduce_timer(state, action),
        Action::Async(action) => async_handler::reduce(state, action),
    }
}

fn reduce_timer(state: &mut AppState, action: TimerAction) -> Vec<Command> {
    match action {
        TimerAction::ValidateField { field, value } => {
            contact::apply_validation(state, field, &value)
        }
        TimerAction::ClearSuccessNotice => contact::clear_success_notice(state),
        TimerAction::ApplySearch { term } => todo::apply_search(state, term),
        TimerAction::ClearCompleting(id) => todo::clear_completing(state, id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::store::action::{AsyncAction, ContactAction, TodoAction};
    use crate::app::store::command::{
        CONTACT_FIELD_QUIET, DebounceChannel, DeleteTarget, TODO_SEARCH_QUIET,
    };
    use crate::domain::{ContactField, Todo, TodoFilter};
    use chrono::Utc;

    fn todo(id: i64, text: &str, completed: bool) -> Todo {
        Todo {
            id,
            text: text.into(),
            completed,
            created_at: Utc::now(),
        }
    }

    fn fill_contact_form(state: &mut AppState, name: &str, email: &str, message: &str) {
        state.ui.contact.name = name.into();
        state.ui.contact.email = email.into();
        state.ui.contact.message = message.into();
    }

    #[test]
    fn field_changed_schedules_debounced_validation() {
        let mut state = AppState::default();

        let commands = reduce(
            &mut state,
            Action::Contact(ContactAction::FieldChanged {
                field: ContactField::Name,
                value: "Jo".into(),
            }),
        );

        assert_eq!(state.ui.contact.name, "Jo");
        assert!(
            matches!(
                commands.as_slice(),
                [Command::Debounce {
                    channel: DebounceChannel::ContactField(ContactField::Name),
                    delay,
                    task: TimerAction::ValidateField {
                        field: ContactField::Name,
                        value,
                    },
                }] if *delay == CONTACT_FIELD_QUIET && value == "Jo"
            ),
            "expected a debounced validation for the name field"
        );
    }

    #[test]
    fn validation_timer_sets_then_clears_field_error() {
        let mut state = AppState::default();

        reduce(
            &mut state,
            Action::Timer(TimerAction::ValidateField {
                field: ContactField::Email,
                value: "nope".into(),
            }),
        );
        assert_eq!(
            state.ui.contact.error(ContactField::Email),
            Some("Please enter a valid email address")
        );

        reduce(
            &mut state,
            Action::Timer(TimerAction::ValidateField {
                field: ContactField::Email,
                value: "jo@x.com".into(),
            }),
        );
        assert_eq!(state.ui.contact.error(ContactField::Email), None);
    }

    #[test]
    fn submit_with_short_message_blocks_and_marks_only_that_field() {
        let mut state = AppState::default();
        fill_contact_form(&mut state, "Jo", "jo@x.com", "short");

        let commands = reduce(&mut state, Action::Contact(ContactAction::Submit));

        assert!(commands.is_empty(), "no record may be created");
        assert!(state.domain.messages.is_empty());
        // Name length 2 is valid; only the message field is marked.
        assert_eq!(state.ui.contact.error(ContactField::Name), None);
        assert_eq!(state.ui.contact.error(ContactField::Email), None);
        assert_eq!(
            state.ui.contact.error(ContactField::Message),
            Some("Message must be at least 10 characters")
        );
    }

    #[test]
    fn submit_empty_form_marks_all_fields() {
        let mut state = AppState::default();

        reduce(&mut state, Action::Contact(ContactAction::Submit));

        assert_eq!(
            state.ui.contact.error(ContactField::Name),
            Some("Name is required")
        );
        assert_eq!(
            state.ui.contact.error(ContactField::Email),
            Some("Email is required")
        );
        assert_eq!(
            state.ui.contact.error(ContactField::Message),
            Some("Message is required")
        );
    }

    #[test]
    fn submit_with_valid_fields_appends_clears_and_persists() {
        let mut state = AppState::default();
        state.ui.contact.errors.name = Some("Name is required".into());
        fill_contact_form(&mut state, "  Ada  ", "ada@example.com", "Hello from the engine room");

        let commands = reduce(&mut state, Action::Contact(ContactAction::Submit));

        assert_eq!(state.domain.messages.len(), 1);
        let message = &state.domain.messages[0];
        assert_eq!(message.name, "Ada");
        assert_eq!(message.email, "ada@example.com");
        assert_eq!(message.body, "Hello from the engine room");

        assert!(state.ui.contact.name.is_empty());
        assert!(state.ui.contact.errors.name.is_none());
        assert_eq!(
            state.ui.contact.success_notice.as_deref(),
            Some("Message sent successfully!")
        );
        assert!(
            matches!(
                commands.as_slice(),
                [
                    Command::PersistMessages,
                    Command::ScheduleTimer {
                        task: TimerAction::ClearSuccessNotice,
                        ..
                    }
                ]
            ),
            "expected a persist and a notice-clear timer"
        );
    }

    #[test]
    fn submissions_append_in_chronological_order() {
        let mut state = AppState::default();

        fill_contact_form(&mut state, "Ada", "ada@example.com", "First message here");
        reduce(&mut state, Action::Contact(ContactAction::Submit));
        fill_contact_form(&mut state, "Grace", "grace@example.com", "Second message here");
        reduce(&mut state, Action::Contact(ContactAction::Submit));

        assert_eq!(state.domain.messages[0].name, "Ada");
        assert_eq!(state.domain.messages[1].name, "Grace");
        assert!(state.domain.messages[0].id < state.domain.messages[1].id);
    }

    #[test]
    fn success_notice_timer_clears_notice() {
        let mut state = AppState::default();
        state.ui.contact.success_notice = Some("Message sent successfully!".into());

        reduce(&mut state, Action::Timer(TimerAction::ClearSuccessNotice));

        assert!(state.ui.contact.success_notice.is_none());
    }

    #[test]
    fn message_delete_requires_confirmation() {
        let mut state = AppState::default();

        let commands = reduce(&mut state, Action::Contact(ContactAction::DeleteRequested(7)));

        assert!(matches!(
            commands.as_slice(),
            [Command::ConfirmDelete(DeleteTarget::Message(7))]
        ));
    }

    #[test]
    fn todo_add_prepends_and_clears_input() {
        let mut state = AppState::default();

        state.ui.todo.input = "Buy milk".into();
        let commands = reduce(&mut state, Action::Todo(TodoAction::Add));
        assert!(matches!(commands.as_slice(), [Command::PersistTodos]));

        state.ui.todo.input = "Clean".into();
        reduce(&mut state, Action::Todo(TodoAction::Add));

        // Newest first.
        assert_eq!(state.domain.todos[0].text, "Clean");
        assert_eq!(state.domain.todos[1].text, "Buy milk");
        assert!(state.ui.todo.input.is_empty());
    }

    #[test]
    fn todo_add_blank_input_is_a_noop() {
        let mut state = AppState::default();
        state.ui.todo.input = "   ".into();

        let commands = reduce(&mut state, Action::Todo(TodoAction::Add));

        assert!(commands.is_empty());
        assert!(state.domain.todos.is_empty());
    }

    #[test]
    fn toggle_flips_persists_and_flashes() {
        let mut state = AppState::default();
        state.domain.todos.push(todo(1, "Buy milk", false));

        let commands = reduce(&mut state, Action::Todo(TodoAction::Toggle(1)));

        assert!(state.domain.todos[0].completed);
        assert!(state.ui.todo.completing.contains(&1));
        assert!(matches!(
            commands.as_slice(),
            [
                Command::PersistTodos,
                Command::ScheduleTimer {
                    task: TimerAction::ClearCompleting(1),
                    ..
                }
            ]
        ));

        reduce(&mut state, Action::Timer(TimerAction::ClearCompleting(1)));
        assert!(state.ui.todo.completing.is_empty());
        // The stored flag survives the animation clear.
        assert!(state.domain.todos[0].completed);
    }

    #[test]
    fn toggle_unknown_id_is_a_noop() {
        let mut state = AppState::default();

        let commands = reduce(&mut state, Action::Todo(TodoAction::Toggle(99)));

        assert!(commands.is_empty());
        assert!(state.ui.todo.completing.is_empty());
    }

    #[test]
    fn search_changed_schedules_debounce_on_the_search_channel() {
        let mut state = AppState::default();

        let commands = reduce(
            &mut state,
            Action::Todo(TodoAction::SearchChanged("  Milk ".into())),
        );

        assert_eq!(state.ui.todo.search_draft, "  Milk ");
        // Not committed until the timer fires.
        assert!(state.ui.todo.search_term.is_empty());
        assert!(
            matches!(
                commands.as_slice(),
                [Command::Debounce {
                    channel: DebounceChannel::TodoSearch,
                    delay,
                    task: TimerAction::ApplySearch { term },
                }] if *delay == TODO_SEARCH_QUIET && term == "  Milk "
            ),
            "expected a debounced search commit"
        );
    }

    #[test]
    fn apply_search_normalizes_the_term() {
        let mut state = AppState::default();

        reduce(
            &mut state,
            Action::Timer(TimerAction::ApplySearch {
                term: "  Milk ".into(),
            }),
        );

        assert_eq!(state.ui.todo.search_term, "milk");
    }

    #[test]
    fn set_filter_takes_effect_without_commands() {
        let mut state = AppState::default();

        let commands = reduce(
            &mut state,
            Action::Todo(TodoAction::SetFilter(TodoFilter::Active)),
        );

        assert_eq!(state.ui.todo.filter, TodoFilter::Active);
        assert!(commands.is_empty());
    }

    #[test]
    fn todo_delete_requires_confirmation_then_removes() {
        let mut state = AppState::default();
        state.domain.todos.push(todo(1, "Buy milk", false));

        let commands = reduce(&mut state, Action::Todo(TodoAction::DeleteRequested(1)));
        assert!(matches!(
            commands.as_slice(),
            [Command::ConfirmDelete(DeleteTarget::Todo(1))]
        ));
        // Nothing removed until confirmed.
        assert_eq!(state.domain.todos.len(), 1);

        let commands = reduce(&mut state, Action::Todo(TodoAction::DeleteConfirmed(1)));
        assert!(state.domain.todos.is_empty());
        assert!(matches!(commands.as_slice(), [Command::PersistTodos]));
    }

    #[test]
    fn delete_confirmed_for_absent_id_still_persists() {
        let mut state = AppState::default();
        state.domain.todos.push(todo(1, "Buy milk", false));

        let commands = reduce(&mut state, Action::Todo(TodoAction::DeleteConfirmed(42)));

        assert_eq!(state.domain.todos.len(), 1);
        assert!(matches!(commands.as_slice(), [Command::PersistTodos]));
    }

    #[test]
    fn persist_failure_raises_alert_and_keeps_records() {
        let mut state = AppState::default();
        state.domain.todos.push(todo(1, "Buy milk", false));

        reduce(
            &mut state,
            Action::Async(AsyncAction::TodosPersisted(Err(
                "Storage write failed: quota exceeded".into(),
            ))),
        );

        assert_eq!(
            state.ui.storage_alert.as_deref(),
            Some("Storage write failed: quota exceeded")
        );
        // The in-memory store is not rolled back.
        assert_eq!(state.domain.todos.len(), 1);

        reduce(&mut state, Action::Async(AsyncAction::TodosPersisted(Ok(()))));
        assert!(state.ui.storage_alert.is_none());
    }

    #[test]
    fn dismiss_clears_storage_alert() {
        let mut state = AppState::default();
        state.ui.storage_alert = Some("Storage write failed: disk full".into());

        reduce(&mut state, Action::Contact(ContactAction::DismissStorageAlert));

        assert!(state.ui.storage_alert.is_none());
    }
}
