use chrono::NaiveDateTime;

use crate::db::{DbConnection, DbPool};
use crate::domain::contact::{Contact, NewContact};
use crate::domain::types::ContactId;

pub mod contact;
pub mod errors;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and PostgreSQL.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    ///
    /// The guard returns the connection to the pool when dropped.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for contact entities.
pub trait ContactReader {
    /// List every stored contact.
    fn list_contacts(&self) -> RepositoryResult<Vec<Contact>>;
}

/// Write operations for contact entities.
pub trait ContactWriter {
    /// Persist a new contact. Returns the number of inserted rows.
    fn create_contact(&self, contact: &NewContact) -> RepositoryResult<usize>;
    /// Set or clear the reminder of a contact. Returns the number of updated
    /// rows, which is zero when no contact has the given id.
    fn update_reminder_date(
        &self,
        id: ContactId,
        reminder_date: Option<NaiveDateTime>,
    ) -> RepositoryResult<usize>;
}
