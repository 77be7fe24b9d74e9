//! Helpers for integration tests.
//!
//! Tests run against the PostgreSQL database named by `TEST_DATABASE_URL`
//! (an empty database is expected). Every test works inside a transaction
//! that is never committed, so the schema and rows vanish afterwards.
//! The tests are `#[ignore]`d; run them with `cargo test -- --ignored`.

use contacts_service::db::DbPool;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, TestCustomizer};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

/// Transactional database used in integration tests.
pub struct TestDb {
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set");

        // A single connection keeps the whole test inside one uncommitted transaction.
        let pool = Pool::builder()
            .max_size(1)
            .connection_customizer(Box::new(TestCustomizer))
            .build(ConnectionManager::<PgConnection>::new(url))
            .expect("Failed to establish PostgreSQL connection pool.");
        let mut conn = pool
            .get()
            .expect("Failed to get PostgreSQL connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");

        TestDb { pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}
