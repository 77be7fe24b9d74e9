// Maintained by hand: the `Contacts` table pre-exists and uses quoted
// PascalCase identifiers, so every column carries its SQL name.

diesel::table! {
    #[sql_name = "Contacts"]
    contacts (id) {
        #[sql_name = "Id"]
        id -> Int4,
        #[sql_name = "Name"]
        name -> Text,
        #[sql_name = "Company"]
        company -> Nullable<Text>,
        #[sql_name = "Position"]
        position -> Nullable<Text>,
        #[sql_name = "Email"]
        email -> Text,
        #[sql_name = "Phone"]
        phone -> Nullable<Text>,
        #[sql_name = "Category"]
        category -> Text,
        #[sql_name = "LastInteractionDate"]
        last_interaction_date -> Nullable<Timestamp>,
        #[sql_name = "Notes"]
        notes -> Nullable<Text>,
        #[sql_name = "ReminderDate"]
        reminder_date -> Nullable<Timestamp>,
    }
}
