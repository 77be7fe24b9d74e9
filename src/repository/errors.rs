use diesel::r2d2::PoolError;
use thiserror::Error;

/// Errors raised by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No connection could be checked out of the pool.
    #[error("connection error: {0}")]
    Connection(#[from] PoolError),
    /// The statement failed in the database.
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// A stored row could not be turned into a domain value.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
