//! Database initialization command

use crate::{config::resolve_database_path, storage::FantasyDatabase, Result};
use std::path::PathBuf;

/// Create the database file and schema if they do not exist yet.
///
/// Safe to run against a populated database; existing tables and rows are
/// left untouched.
pub fn handle_init_db(db_path: Option<PathBuf>) -> Result<FantasyDatabase> {
    let path = resolve_database_path(db_path)?;
    let existed = path.is_file();

    let db = FantasyDatabase::initialize(&path)?;

    if existed {
        println!("✓ Schema verified at {}", db.path().display());
    } else {
        println!("✓ Created empty database at {}", db.path().display());
    }

    Ok(db)
}
