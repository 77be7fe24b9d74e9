//! Connection pool plumbing shared by the repository and the server bootstrap.

use std::time::Duration;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError, PooledConnection};

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<PgConnection>>;

/// Build a pool and verify that at least one connection can be opened.
///
/// `timeout` bounds how long pool checkout waits, both here and for every
/// later request.
pub fn establish_connection_pool(
    database_url: &str,
    timeout: Duration,
) -> Result<DbPool, PoolError> {
    Pool::builder()
        .connection_timeout(timeout)
        .build(ConnectionManager::<PgConnection>::new(database_url))
}

/// Build a pool without touching the database.
///
/// Connection failures surface on the first checkout instead of here.
pub fn lazy_connection_pool(database_url: &str, timeout: Duration) -> DbPool {
    Pool::builder()
        .connection_timeout(timeout)
        .build_unchecked(ConnectionManager::<PgConnection>::new(database_url))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Nothing listens on port 1 locally, so connecting is refused immediately.
    const UNREACHABLE: &str = "host=127.0.0.1 port=1 connect_timeout=1";

    #[test]
    fn eager_pool_fails_when_database_is_unreachable() {
        let result = establish_connection_pool(UNREACHABLE, Duration::from_millis(500));
        assert!(result.is_err());
    }

    #[test]
    fn lazy_pool_defers_failure_to_checkout() {
        let pool = lazy_connection_pool(UNREACHABLE, Duration::from_millis(500));
        assert!(pool.get().is_err());
    }
}
