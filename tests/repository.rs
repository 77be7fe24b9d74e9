use chrono::NaiveDate;
use contacts_service::domain::contact::NewContact;
use contacts_service::domain::types::{ContactCategory, ContactEmail, ContactId, ContactName};
use contacts_service::repository::{ContactReader, ContactWriter, DieselRepository};
use contacts_service::schema::contacts;
use diesel::prelude::*;

mod common;

fn new_contact(name: &str) -> NewContact {
    NewContact {
        name: ContactName::new(name).expect("valid name"),
        company: None,
        position: None,
        email: ContactEmail::new("jane@x.com").expect("valid email"),
        phone: None,
        category: ContactCategory::new("Lead").expect("valid category"),
        last_interaction_date: None,
        notes: None,
    }
}

#[test]
#[ignore = "requires TEST_DATABASE_URL"]
fn empty_table_lists_nothing() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let contacts = repo.list_contacts().expect("should list contacts");
    assert!(contacts.is_empty());
}

#[test]
#[ignore = "requires TEST_DATABASE_URL"]
fn created_contact_binds_missing_fields_as_null() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let affected = repo
        .create_contact(&new_contact("Jane Doe"))
        .expect("should create contact");
    assert_eq!(affected, 1);

    let contacts = repo.list_contacts().expect("should list contacts");
    assert_eq!(contacts.len(), 1);
    let jane = &contacts[0];
    assert_eq!(jane.name, "Jane Doe");
    assert_eq!(jane.email, "jane@x.com");
    assert_eq!(jane.category, "Lead");
    assert!(jane.company.is_none());
    assert!(jane.position.is_none());
    assert!(jane.phone.is_none());
    assert!(jane.last_interaction_date.is_none());
    assert!(jane.notes.is_none());
    assert!(jane.reminder_date.is_none());
}

#[test]
#[ignore = "requires TEST_DATABASE_URL"]
fn reminder_update_changes_only_the_target_row() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let mut detailed = new_contact("Jane Doe");
    detailed.company = Some("Acme".to_string());
    detailed.notes = Some("met at expo".to_string());
    repo.create_contact(&detailed).expect("should create contact");
    repo.create_contact(&new_contact("John Roe"))
        .expect("should create contact");

    let before = repo.list_contacts().expect("should list contacts");
    let target = before[0].id;

    let reminder = NaiveDate::from_ymd_opt(2024, 5, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid date");
    let affected = repo
        .update_reminder_date(target, Some(reminder))
        .expect("should update reminder");
    assert_eq!(affected, 1);

    let after = repo.list_contacts().expect("should list contacts");
    assert_eq!(after[0].reminder_date, Some(reminder));
    assert_eq!(after[0].company.as_deref(), Some("Acme"));
    assert_eq!(after[0].notes.as_deref(), Some("met at expo"));
    assert_eq!(after[0].name, before[0].name);
    assert_eq!(after[1], before[1]);
}

#[test]
#[ignore = "requires TEST_DATABASE_URL"]
fn reminder_update_clears_and_ignores_missing_ids() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    repo.create_contact(&new_contact("Jane Doe"))
        .expect("should create contact");

    let mut conn = test_db
        .pool()
        .get()
        .expect("should acquire DB connection for setup");
    let id: i32 = contacts::table
        .select(contacts::id)
        .first(&mut conn)
        .expect("inserted contact id should be readable");
    drop(conn);
    let id = ContactId::new(id).expect("valid contact id");

    let reminder = NaiveDate::from_ymd_opt(2024, 6, 1)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .expect("valid date");
    repo.update_reminder_date(id, Some(reminder))
        .expect("should set reminder");
    repo.update_reminder_date(id, None)
        .expect("should clear reminder");

    let contacts = repo.list_contacts().expect("should list contacts");
    assert!(contacts[0].reminder_date.is_none());

    let missing = ContactId::new(id.get() + 1000).expect("valid contact id");
    let affected = repo
        .update_reminder_date(missing, Some(reminder))
        .expect("missing id is not an error");
    assert_eq!(affected, 0);
}
