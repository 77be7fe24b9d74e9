use crate::domain::contact::Contact;
use crate::forms::contacts::{AddContactFormPayload, UpdateReminderFormPayload};
use crate::repository::{ContactReader, ContactWriter};

use super::{ServiceError, ServiceResult};

/// Return every stored contact.
///
/// Repository failures are logged with their detail and collapsed into
/// [`ServiceError::Internal`] so nothing storage-specific reaches the caller.
pub fn list_contacts<R>(repo: &R) -> ServiceResult<Vec<Contact>>
where
    R: ContactReader,
{
    repo.list_contacts().map_err(|e| {
        log::error!("Error fetching contacts: {e}");
        ServiceError::Internal
    })
}

/// Insert a new contact. The storage-assigned id is not reported back.
pub fn add_contact<R>(payload: AddContactFormPayload, repo: &R) -> ServiceResult<()>
where
    R: ContactWriter,
{
    let contact = payload.into_new_contact();
    match repo.create_contact(&contact) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Error adding contact: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Set or clear the reminder date of a contact.
///
/// Succeeds even when no contact has the requested id; the miss is only logged.
pub fn update_reminder_date<R>(payload: UpdateReminderFormPayload, repo: &R) -> ServiceResult<()>
where
    R: ContactWriter,
{
    match repo.update_reminder_date(payload.contact_id, payload.reminder_date) {
        Ok(0) => {
            log::debug!("No contact with id {} to update", payload.contact_id);
            Ok(())
        }
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Error updating reminder date: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::types::{ContactCategory, ContactEmail, ContactId, ContactName};
    use crate::repository::test::TestRepository;

    fn jane() -> AddContactFormPayload {
        AddContactFormPayload {
            name: ContactName::new("Jane Doe").unwrap(),
            company: None,
            position: None,
            email: ContactEmail::new("jane@x.com").unwrap(),
            phone: None,
            category: ContactCategory::new("Lead").unwrap(),
            last_interaction_date: None,
            notes: None,
        }
    }

    fn reminder(id: i32, day: Option<u32>) -> UpdateReminderFormPayload {
        UpdateReminderFormPayload {
            contact_id: ContactId::new(id).unwrap(),
            reminder_date: day.map(|d| {
                NaiveDate::from_ymd_opt(2024, 5, d)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap()
            }),
        }
    }

    #[test]
    fn lists_empty_repository() {
        let repo = TestRepository::default();
        assert!(list_contacts(&repo).unwrap().is_empty());
    }

    #[test]
    fn added_contact_is_listed_without_reminder() {
        let repo = TestRepository::default();

        add_contact(jane(), &repo).unwrap();
        let contacts = list_contacts(&repo).unwrap();

        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].id, 1);
        assert_eq!(contacts[0].name, "Jane Doe");
        assert!(contacts[0].company.is_none());
        assert!(contacts[0].reminder_date.is_none());
    }

    #[test]
    fn reminder_update_touches_only_target_row() {
        let repo = TestRepository::default();
        add_contact(jane(), &repo).unwrap();
        add_contact(jane(), &repo).unwrap();

        update_reminder_date(reminder(2, Some(1)), &repo).unwrap();

        let contacts = repo.snapshot();
        assert!(contacts[0].reminder_date.is_none());
        assert_eq!(
            contacts[1].reminder_date.unwrap().to_string(),
            "2024-05-01 00:00:00"
        );
    }

    #[test]
    fn reminder_update_can_clear() {
        let repo = TestRepository::default();
        add_contact(jane(), &repo).unwrap();
        update_reminder_date(reminder(1, Some(1)), &repo).unwrap();

        update_reminder_date(reminder(1, None), &repo).unwrap();

        assert!(repo.snapshot()[0].reminder_date.is_none());
    }

    #[test]
    fn reminder_update_on_missing_contact_succeeds() {
        let repo = TestRepository::default();
        assert_eq!(update_reminder_date(reminder(42, Some(3)), &repo), Ok(()));
    }

    #[test]
    fn storage_failures_become_internal() {
        let repo = TestRepository::unavailable();

        assert_eq!(list_contacts(&repo), Err(ServiceError::Internal));
        assert_eq!(add_contact(jane(), &repo), Err(ServiceError::Internal));
        assert_eq!(
            update_reminder_date(reminder(1, None), &repo),
            Err(ServiceError::Internal)
        );
    }
}
