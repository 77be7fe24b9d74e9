use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::contact::NewContact;
use crate::domain::types::{
    ContactCategory, ContactEmail, ContactId, ContactName, TypeConstraintError, empty_to_none,
    parse_timestamp,
};

fn optional_timestamp(
    value: Option<String>,
    field: &'static str,
) -> Result<Option<NaiveDateTime>, TypeConstraintError> {
    empty_to_none(value)
        .map(|v| parse_timestamp(&v, field))
        .transpose()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

/// Text columns accept JSON scalars too; `"phone": 5551234` is stored as `"5551234"`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<TextValue>::deserialize(deserializer)?.map(|value| match value {
            TextValue::Text(text) => text,
            TextValue::Integer(number) => number.to_string(),
            TextValue::Float(number) => number.to_string(),
            TextValue::Bool(flag) => flag.to_string(),
        }),
    )
}

/// JSON body of `POST /contacts`.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddContactForm {
    #[serde(default, deserialize_with = "lenient_text")]
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    #[validate(required, length(min = 1))]
    pub category: Option<String>,
    pub last_interaction_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddContactFormPayload {
    pub name: ContactName,
    pub company: Option<String>,
    pub position: Option<String>,
    pub email: ContactEmail,
    pub phone: Option<String>,
    pub category: ContactCategory,
    pub last_interaction_date: Option<NaiveDateTime>,
    pub notes: Option<String>,
}

impl AddContactFormPayload {
    pub fn into_new_contact(self) -> NewContact {
        NewContact {
            name: self.name,
            company: self.company,
            position: self.position,
            email: self.email,
            phone: self.phone,
            category: self.category,
            last_interaction_date: self.last_interaction_date,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Error)]
pub enum AddContactFormError {
    #[error("Add contact form validation failed: {0}")]
    Validation(String),
    #[error("Add contact form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddContactFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddContactFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddContactForm> for AddContactFormPayload {
    type Error = AddContactFormError;

    fn try_from(value: AddContactForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            name: ContactName::new(value.name.unwrap_or_default())?,
            company: empty_to_none(value.company),
            position: empty_to_none(value.position),
            email: ContactEmail::new(value.email.unwrap_or_default())?,
            phone: empty_to_none(value.phone),
            category: ContactCategory::new(value.category.unwrap_or_default())?,
            last_interaction_date: optional_timestamp(
                value.last_interaction_date,
                "lastInteractionDate",
            )?,
            notes: empty_to_none(value.notes),
        })
    }
}

/// JSON body of `PUT /contacts/{id}/reminder`. A missing `reminderDate` clears the reminder.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReminderForm {
    pub reminder_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateReminderFormPayload {
    pub contact_id: ContactId,
    pub reminder_date: Option<NaiveDateTime>,
}

#[derive(Debug, Error)]
pub enum UpdateReminderFormError {
    #[error("Update reminder form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<TypeConstraintError> for UpdateReminderFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl UpdateReminderForm {
    /// Attach the contact id taken from the request path.
    pub fn into_payload(
        self,
        contact_id: ContactId,
    ) -> Result<UpdateReminderFormPayload, UpdateReminderFormError> {
        Ok(UpdateReminderFormPayload {
            contact_id,
            reminder_date: optional_timestamp(self.reminder_date, "reminderDate")?,
        })
    }
}
