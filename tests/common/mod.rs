//! Shared fixtures for integration tests

use swc_ffl_api::storage::FantasyDatabase;
use tempfile::TempDir;

const SEED_SQL: &str = include_str!("../fixtures/seed.sql");

/// Create a schema-initialized database file seeded with the reference fixture.
///
/// Keep the returned `TempDir` alive for as long as the database is used.
pub fn seeded_database() -> (TempDir, FantasyDatabase) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fantasy_data.db");

    let db = FantasyDatabase::initialize(&path).unwrap();
    rusqlite::Connection::open(&path)
        .unwrap()
        .execute_batch(SEED_SQL)
        .unwrap();

    (dir, db)
}
