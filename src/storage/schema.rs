//! Database schema and connection management

use anyhow::{Context, Result};
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS player (
    player_id         INTEGER PRIMARY KEY,
    gsis_id           TEXT,
    first_name        TEXT NOT NULL,
    last_name         TEXT NOT NULL,
    position          TEXT NOT NULL,
    last_changed_date DATE NOT NULL
);

CREATE TABLE IF NOT EXISTS performance (
    performance_id    INTEGER PRIMARY KEY,
    week_number       TEXT NOT NULL,
    fantasy_points    REAL NOT NULL,
    last_changed_date DATE NOT NULL,
    player_id         INTEGER NOT NULL REFERENCES player(player_id)
);

CREATE TABLE IF NOT EXISTS league (
    league_id         INTEGER PRIMARY KEY,
    league_name       TEXT NOT NULL,
    scoring_type      TEXT NOT NULL,
    last_changed_date DATE NOT NULL
);

CREATE TABLE IF NOT EXISTS team (
    team_id           INTEGER PRIMARY KEY,
    team_name         TEXT NOT NULL,
    last_changed_date DATE NOT NULL,
    league_id         INTEGER NOT NULL REFERENCES league(league_id)
);

CREATE TABLE IF NOT EXISTS team_player (
    team_id           INTEGER NOT NULL REFERENCES team(team_id),
    player_id         INTEGER NOT NULL REFERENCES player(player_id),
    last_changed_date DATE NOT NULL,
    PRIMARY KEY (team_id, player_id)
);

CREATE INDEX IF NOT EXISTS idx_player_changed      ON player(last_changed_date);
CREATE INDEX IF NOT EXISTS idx_performance_changed ON performance(last_changed_date);
CREATE INDEX IF NOT EXISTS idx_performance_player  ON performance(player_id);
CREATE INDEX IF NOT EXISTS idx_league_changed      ON league(last_changed_date);
CREATE INDEX IF NOT EXISTS idx_team_changed        ON team(last_changed_date);
CREATE INDEX IF NOT EXISTS idx_team_league         ON team(league_id);
CREATE INDEX IF NOT EXISTS idx_team_player_player  ON team_player(player_id);
";

/// Handle to the fantasy database file.
///
/// Holds no open connection. Every unit of work opens its own read-only
/// [`Session`] and drops it when done, so handles are cheap to clone into
/// request state.
#[derive(Debug, Clone)]
pub struct FantasyDatabase {
    path: PathBuf,
}

/// A single read-only connection, scoped to one request or command.
pub struct Session {
    pub(crate) conn: Connection,
}

impl FantasyDatabase {
    /// Point at an existing database file without touching it
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create the database file (and parent directories) and ensure tables exist
    pub fn initialize(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }

        let conn = Connection::open(&path)
            .with_context(|| format!("opening {} for writing", path.display()))?;
        initialize_schema(&conn)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a read-only session against the database file
    pub fn open_session(&self) -> Result<Session> {
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_context(|| format!("opening {} read-only", self.path.display()))?;
        Ok(Session { conn })
    }

    /// Run `work` against a fresh session on the blocking thread pool.
    ///
    /// The session is dropped when `work` returns, whether it succeeded or not.
    pub async fn with_session<T, F>(&self, work: F) -> Result<T>
    where
        F: FnOnce(&Session) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db = self.clone();
        tokio::task::spawn_blocking(move || {
            let session = db.open_session()?;
            work(&session)
        })
        .await
        .context("database task panicked")?
    }
}

impl Session {
    /// In-memory session with the schema applied, for tests
    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }
}

/// Create all tables and indexes if they do not already exist
pub(crate) fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)
        .context("creating fantasy database schema")?;
    Ok(())
}
