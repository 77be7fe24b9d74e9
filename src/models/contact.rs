use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::contact::{Contact as DomainContact, NewContact as DomainNewContact};
use crate::domain::types::TypeConstraintError;

/// Diesel model representing the `Contacts` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::contacts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Contact {
    pub id: i32,
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

/// Insertable form of [`Contact`].
///
/// Absent optional fields are bound as NULL rather than `DEFAULT`.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::contacts)]
#[diesel(treat_none_as_default_value = false)]
pub struct NewContact {
    pub name: String,
    pub company: Option<String>,
    pub position: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub category: String,
    pub last_interaction_date: Option<NaiveDateTime>,
    pub notes: Option<String>,
}

impl TryFrom<Contact> for DomainContact {
    type Error = TypeConstraintError;

    fn try_from(contact: Contact) -> Result<Self, Self::Error> {
        Ok(Self {
            id: contact.id.try_into()?,
            name: contact.name,
            company: contact.company,
            position: contact.position,
            email: contact.email,
            phone: contact.phone,
            category: contact.category,
            last_interaction_date: contact.last_interaction_date,
            notes: contact.notes,
            reminder_date: contact.reminder_date,
        })
    }
}

impl From<DomainNewContact> for NewContact {
    fn from(contact: DomainNewContact) -> Self {
        Self {
            name: contact.name.into_inner(),
            company: contact.company,
            position: contact.position,
            email: contact.email.into_inner(),
            phone: contact.phone,
            category: contact.category.into_inner(),
            last_interaction_date: contact.last_interaction_date,
            notes: contact.notes,
        }
    }
}
