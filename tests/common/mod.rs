//! Shared helpers for integration tests.

use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use selector_admin::db::{DbPool, establish_connection_pool};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// SQLite database living in a temporary directory, migrated on creation and
/// removed on drop.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"), Some(2))
            .expect("create pool");

        let mut pooled = pool.get().expect("get connection");
        let conn: &mut SqliteConnection = &mut pooled;
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}
