use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ContactCategory, ContactEmail, ContactId, ContactName};

/// A contact row as stored.
///
/// Serialized with the storage column names (`Id`, `Name`, `ReminderDate`, ...)
/// so the JSON returned by the list endpoint mirrors the table. Text columns
/// are kept as plain strings: whatever the database accepted is returned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub company: Option<String>,
    pub position: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub category: String,
    pub last_interaction_date: Option<NaiveDateTime>,
    pub notes: Option<String>,
    pub reminder_date: Option<NaiveDateTime>,
}

/// Data required to insert a new [`Contact`].
///
/// There is no reminder here: it is only ever set through the reminder update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewContact {
    pub name: ContactName,
    pub company: Option<String>,
    pub position: Option<String>,
    pub email: ContactEmail,
    pub phone: Option<String>,
    pub category: ContactCategory,
    pub last_interaction_date: Option<NaiveDateTime>,
    pub notes: Option<String>,
}
