use chrono::Utc;

use super::super::super::state::AppState;
use super::super::action::{ContactAction, TimerAction};
use super::super::command::{
    CONTACT_FIELD_QUIET, Command, DebounceChannel, DeleteTarget, SUCCESS_NOTICE_TTL,
};
use crate::domain::{ContactField, Message, validate_field};

pub const SUCCESS_NOTICE: &str = "Message sent successfully!";

pub fn reduce(state: &mut AppState, action: ContactAction) -> Vec<Command> {
    match action {
        ContactAction::FieldChanged { field, value } => {
            state.ui.contact.set_draft(field, value.clone());
            vec![Command::Debounce {
                channel: DebounceChannel::ContactField(field),
                delay: CONTACT_FIELD_QUIET,
                task: TimerAction::ValidateField { field, value },
            }]
        }
        ContactAction::Submit => submit(state),
        ContactAction::DeleteRequested(id) => {
            vec![Command::ConfirmDelete(DeleteTarget::Message(id))]
        }
        ContactAction::DeleteConfirmed(id) => {
            state.domain.messages.retain(|message| message.id != id);
            vec![Command::PersistMessages]
        }
        ContactAction::DismissStorageAlert => {
            state.ui.storage_alert = None;
            Vec::new()
        }
    }
}

/// Full-form validation is synchronous; a record is only created when all
/// three fields pass. Failing fields keep their error state, passing fields
/// clear it.
fn submit(state: &mut AppState) -> Vec<Command> {
    let name = state.ui.contact.name.trim().to_string();
    let email = state.ui.contact.email.trim().to_string();
    let body = state.ui.contact.message.trim().to_string();

    let mut all_valid = true;
    for (field, value) in [
        (ContactField::Name, name.as_str()),
        (ContactField::Email, email.as_str()),
        (ContactField::Message, body.as_str()),
    ] {
        let error = validate_field(field, value).err();
        all_valid &= error.is_none();
        state
            .ui
            .contact
            .set_error(field, error.map(|e| e.to_string()));
    }

    if !all_valid {
        return Vec::new();
    }

    let message = Message {
        id: state.domain.ids.next(),
        name,
        email,
        body,
        created_at: Utc::now(),
    };
    state.domain.messages.push(message);
    state.ui.contact.clear_form();
    state.ui.contact.success_notice = Some(SUCCESS_NOTICE.to_string());

    vec![
        Command::PersistMessages,
        Command::ScheduleTimer {
            delay: SUCCESS_NOTICE_TTL,
            task: TimerAction::ClearSuccessNotice,
        },
    ]
}

/// A debounced per-field validation coming due. Validates the value the
/// keystroke carried, not whatever the draft holds now.
pub fn apply_validation(state: &mut AppState, field: ContactField, value: &str) -> Vec<Command> {
    let error = validate_field(field, value).err();
    state
        .ui
        .contact
        .set_error(field, error.map(|e| e.to_string()));
    Vec::new()
}

pub fn clear_success_notice(state: &mut AppState) -> Vec<Command> {
    state.ui.contact.success_notice = None;
    Vec::new()
}
