use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A submitted contact-form message.
///
/// Messages are immutable once created (deletion aside) and live in the
/// inbox in submission order, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique identifier, derived from the creation clock.
    pub id: i64,
    /// Sender name as entered in the form.
    pub name: String,
    /// Sender email as entered in the form.
    pub email: String,
    /// Message body.
    pub body: String,
    /// Submission timestamp.
    pub created_at: DateTime<Utc>,
}
