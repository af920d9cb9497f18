use super::{ListView, escape::escape_text, time::full_timestamp};
use crate::app::state::AppState;
use crate::domain::Message;

/// Display tree for the contact widget: the form echo plus the inbox list.
#[derive(Debug)]
pub struct ContactView {
    pub name_draft: String,
    pub email_draft: String,
    pub message_draft: String,
    pub name_error: Option<String>,
    pub email_error: Option<String>,
    pub message_error: Option<String>,
    pub success_notice: Option<String>,
    pub message_count: usize,
    pub list: ListView<MessageItem>,
}

/// One inbox entry. All user-supplied fields are escaped.
#[derive(Debug, PartialEq)]
pub struct MessageItem {
    pub id: i64,
    pub from: String,
    pub email: String,
    pub body: String,
    pub sent_at: String,
}

pub fn contact_view(state: &AppState) -> ContactView {
    let list = if state.domain.messages.is_empty() {
        ListView::Empty {
            placeholder: "No messages yet",
        }
    } else {
        // Store order is append order, oldest first.
        ListView::Items(state.domain.messages.iter().map(message_item).collect())
    };

    ContactView {
        name_draft: state.ui.contact.name.clone(),
        email_draft: state.ui.contact.email.clone(),
        message_draft: state.ui.contact.message.clone(),
        name_error: state.ui.contact.errors.name.clone(),
        email_error: state.ui.contact.errors.email.clone(),
        message_error: state.ui.contact.errors.message.clone(),
        success_notice: state.ui.contact.success_notice.clone(),
        message_count: state.domain.messages.len(),
        list,
    }
}

fn message_item(message: &Message) -> MessageItem {
    MessageItem {
        id: message.id,
        from: escape_text(&message.name),
        email: escape_text(&message.email),
        body: escape_text(&message.body),
        sent_at: full_timestamp(message.created_at),
    }
}
