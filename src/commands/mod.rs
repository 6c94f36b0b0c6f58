//! Command implementations for the SWC fantasy football CLI

pub mod counts;
pub mod init_db;
pub mod serve;

use crate::{config::resolve_database_path, error::SwcError, storage::FantasyDatabase, Result};
use std::path::PathBuf;

/// Resolve the database path and make sure the file is there.
///
/// Serving and counting only ever read, so a missing file is reported up
/// front instead of surfacing as a failure on the first query.
pub fn open_existing_database(db_path: Option<PathBuf>) -> Result<FantasyDatabase> {
    let path = resolve_database_path(db_path)?;

    if !path.is_file() {
        return Err(SwcError::DatabaseMissing {
            path: path.display().to_string(),
        });
    }

    Ok(FantasyDatabase::new(path))
}
