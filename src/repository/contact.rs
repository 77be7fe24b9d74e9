use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::contact::{Contact, NewContact};
use crate::domain::types::ContactId;
use crate::models::contact::{Contact as DbContact, NewContact as DbNewContact};
use crate::repository::{ContactReader, ContactWriter, DieselRepository, RepositoryResult};

impl ContactReader for DieselRepository {
    fn list_contacts(&self) -> RepositoryResult<Vec<Contact>> {
        use crate::schema::contacts;

        let mut conn = self.conn()?;

        let items = contacts::table
            .select(DbContact::as_select())
            .order(contacts::id.asc())
            .load::<DbContact>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Contact>, _>>()?;

        Ok(items)
    }
}

impl ContactWriter for DieselRepository {
    fn create_contact(&self, contact: &NewContact) -> RepositoryResult<usize> {
        use crate::schema::contacts;

        let mut conn = self.conn()?;
        let db_contact: DbNewContact = contact.clone().into();

        let affected = diesel::insert_into(contacts::table)
            .values(db_contact)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn update_reminder_date(
        &self,
        id: ContactId,
        reminder_date: Option<NaiveDateTime>,
    ) -> RepositoryResult<usize> {
        use crate::schema::contacts;

        let mut conn = self.conn()?;

        let affected = diesel::update(contacts::table.filter(contacts::id.eq(id.get())))
            .set(contacts::reminder_date.eq(reminder_date))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
